use std::fmt;

use super::paint::Painter;
use crate::presentation::view_models::{ConsoleStyle, CreateView, PageListViewModel};

impl CreateView for PageListViewModel {
    fn create_view<'a>(&'a self, style: ConsoleStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(PageListView { data: self, style })
    }
}

struct PageListView<'a> {
    data: &'a PageListViewModel,
    style: ConsoleStyle,
}

impl<'a> fmt::Display for PageListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paint = Painter::new(self.style.color);
        let slug_w = self
            .data
            .pages
            .iter()
            .flat_map(|p| std::iter::once(&p.slug).chain(p.options.iter().map(|o| &o.slug)))
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0);

        for (i, page) in self.data.pages.iter().enumerate() {
            writeln!(
                f,
                "{}. {:<slug_w$}  {}",
                i + 1,
                page.slug,
                paint.title(&page.label)
            )?;
            if page.title != page.label {
                writeln!(f, "   {:<slug_w$}  {}", "", paint.dim(&page.title))?;
            }
            if let Some(dimension) = page.dimension {
                writeln!(f, "   {:<slug_w$}  {}:", "", paint.dim(&dimension.to_string()))?;
            }
            for option in &page.options {
                writeln!(
                    f,
                    "     - {:<w$}  {}",
                    option.slug,
                    option.label,
                    w = slug_w.saturating_sub(2)
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_pages;
    use subprime_content::ContentTables;
    use subprime_types::Locale;

    #[test]
    fn test_lists_pages_and_options() {
        let tables = ContentTables::embedded(Locale::En).unwrap();
        let model = present_pages(&tables);
        let text = model.create_view(ConsoleStyle::default()).to_string();

        let numbered: Vec<&str> = text.lines().filter(|l| !l.starts_with(' ')).collect();
        assert_eq!(numbered.len(), 7);
        assert!(numbered[0].starts_with("1. introduction"));
        assert!(numbered[6].starts_with("7. lessons-learned"));
        assert!(text.contains("- peak"));
        assert!(text.contains("- international"));
    }
}
