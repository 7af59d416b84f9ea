use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{ACCENT, KEY_HINT};
use crate::presentation::view_models::PageViewModel;

/// Page list and the "about" text
pub struct SidebarView<'a> {
    model: &'a PageViewModel,
}

impl<'a> SidebarView<'a> {
    pub fn new(model: &'a PageViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SidebarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chrome = &self.model.chrome;
        let nav = &self.model.navigation;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", chrome.navigation_heading));
        let inner = block.inner(area);
        block.render(area, buf);

        let list_height = u16::try_from(nav.pages.len() + 2).unwrap_or(u16::MAX);
        let [list_area, about_area] =
            Layout::vertical([Constraint::Length(list_height), Constraint::Min(0)]).areas(inner);

        let mut lines = vec![
            Line::from(Span::styled(
                nav.prompt.clone(),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::default(),
        ];
        for (i, page) in nav.pages.iter().enumerate() {
            let key = Span::styled(format!("{} ", i + 1), Style::default().fg(KEY_HINT));
            let label = if page.selected {
                Span::styled(
                    format!("▸ {}", page.label),
                    Style::default()
                        .fg(Color::Black)
                        .bg(ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(format!("  {}", page.label))
            };
            lines.push(Line::from(vec![key, label]));
        }
        Paragraph::new(lines).render(list_area, buf);

        let mut about = vec![Line::from(Span::styled(
            chrome.about_heading.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        about.extend(chrome.about.iter().map(|p| Line::from(p.clone())));
        Paragraph::new(about)
            .wrap(Wrap { trim: true })
            .render(about_area, buf);
    }
}
