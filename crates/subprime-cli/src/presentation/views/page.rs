use std::fmt;

use subprime_types::Page;

use super::layout::{Segment, Styled, StyledLine, layout_blocks};
use super::paint::Painter;
use crate::presentation::charts::{ChartAdapter, TextChartAdapter};
use crate::presentation::formatters::wrap;
use crate::presentation::view_models::{ConsoleStyle, CreateView, PageViewModel};

impl CreateView for PageViewModel {
    fn create_view<'a>(&'a self, style: ConsoleStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(PageView::new(self, style))
    }
}

pub struct PageView<'a> {
    data: &'a PageViewModel,
    style: ConsoleStyle,
}

impl<'a> PageView<'a> {
    pub fn new(data: &'a PageViewModel, style: ConsoleStyle) -> Self {
        Self { data, style }
    }

    fn breadcrumb(&self) -> String {
        let nav = &self.data.navigation;
        let page = nav
            .selected_page()
            .map(|p| p.label.as_str())
            .unwrap_or_default();
        match nav.selected_sub() {
            Some(sub) => format!("{} › {}", page, sub.label),
            None => page.to_string(),
        }
    }
}

impl<'a> fmt::Display for PageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let paint = Painter::new(self.style.color);
        let width = self.style.width;
        let chrome = &self.data.chrome;

        if !chrome.title.is_empty() {
            writeln!(
                f,
                "{}",
                paint.title(&format!("{} {}", chrome.icon, chrome.title))
            )?;
        }
        writeln!(f, "{}", paint.dim(&self.breadcrumb()))?;
        writeln!(f, "{}", "═".repeat(width))?;

        if self.data.page() == Page::Introduction && !chrome.intro.is_empty() {
            for line in wrap(&chrome.intro, width) {
                writeln!(f, "{}", paint.dim(&line))?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", paint.title(&self.data.entry.title))?;
        writeln!(f)?;

        let adapter = TextChartAdapter::new(width);
        for (i, segment) in layout_blocks(&self.data.entry.blocks, width)
            .iter()
            .enumerate()
        {
            if i > 0 {
                writeln!(f)?;
            }
            let lines: Vec<StyledLine> = match segment {
                Segment::Text(lines) => lines.clone(),
                Segment::Chart(spec) => chart_lines(adapter.chart(spec)),
                Segment::Graph(spec) => chart_lines(adapter.graph(spec)),
            };
            for line in &lines {
                writeln!(f, "{}", paint.line(line))?;
            }
        }

        if !chrome.footer.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", "─".repeat(width))?;
            for line in &chrome.footer {
                writeln!(f, "{}", paint.dim(line))?;
            }
        }

        Ok(())
    }
}

fn chart_lines(lines: Vec<crate::presentation::charts::text::TextLine>) -> Vec<StyledLine> {
    lines
        .iter()
        .map(|line| line.iter().map(Styled::from).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_page;
    use subprime_content::ContentTables;
    use subprime_engine::NavigationState;
    use subprime_types::{Locale, Period, SubSelection};

    fn render(locale: Locale, state: &NavigationState) -> String {
        let tables = ContentTables::embedded(locale).unwrap();
        let model = present_page(&tables, state).unwrap();
        model.create_view(ConsoleStyle::default()).to_string()
    }

    #[test]
    fn test_peak_period_page() {
        let mut state = NavigationState::at(Page::Timeline);
        state
            .set_sub(SubSelection::Period(Period::Peak))
            .unwrap();

        let text = render(Locale::En, &state);
        assert!(text.contains("Timeline › Peak of the Crisis (2008)"));
        assert!(text.contains("▸ Sep 2008 (15th)"));
        assert!(text.contains("Lehman Brothers"));
        assert!(text.contains("📊 Subprime Crisis Timeline"));
        assert!(!text.contains("\u{1b}["));
    }

    #[test]
    fn test_introduction_shows_intro_and_footer() {
        let text = render(Locale::Pt, &NavigationState::new());
        let tables = ContentTables::embedded(Locale::Pt).unwrap();
        let intro: String = tables.meta().intro.chars().take(20).collect();

        assert!(text.contains(&intro));
        assert!(text.contains(&tables.meta().footer[0]));
        assert!(text.lines().all(|l| l.chars().count() <= 80));
    }
}
