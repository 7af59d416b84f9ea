use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::ACCENT;
use crate::presentation::view_models::PageViewModel;

/// Application title with the page's sub-selector, if it has one
pub struct HeaderView<'a> {
    model: &'a PageViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a PageViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chrome = &self.model.chrome;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(Span::styled(
                format!(" {} {} ", chrome.icon, chrome.title),
                Style::default().add_modifier(Modifier::BOLD),
            ));

        let line = match &self.model.navigation.sub {
            Some(sub) => {
                let mut spans = vec![Span::styled(
                    format!("{} ", sub.prompt),
                    Style::default().add_modifier(Modifier::DIM),
                )];
                for option in &sub.options {
                    let style = if option.selected {
                        Style::default()
                            .fg(Color::Black)
                            .bg(ACCENT)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    spans.push(Span::styled(format!(" {} ", option.label), style));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            }
            None => {
                let label = self
                    .model
                    .navigation
                    .selected_page()
                    .map(|p| p.label.clone())
                    .unwrap_or_default();
                Line::from(Span::styled(
                    label,
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            }
        };

        Paragraph::new(line)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
