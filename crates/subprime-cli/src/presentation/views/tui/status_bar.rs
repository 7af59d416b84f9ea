use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use subprime_types::Locale;

use super::KEY_HINT;

/// Key help on the left, locale and scroll position on the right
pub struct StatusBarView {
    locale: Locale,
    scroll: u16,
    max_scroll: u16,
}

impl StatusBarView {
    pub fn new(locale: Locale, scroll: u16, max_scroll: u16) -> Self {
        Self {
            locale,
            scroll,
            max_scroll,
        }
    }

    fn position(&self) -> String {
        if self.max_scroll == 0 {
            return "all".to_string();
        }
        let pct = u32::from(self.scroll.min(self.max_scroll)) * 100 / u32::from(self.max_scroll);
        format!("{}%", pct)
    }
}

impl Widget for StatusBarView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [help_area, info_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(14)]).areas(area);

        let key = |k: &'static str| Span::styled(k, Style::default().fg(KEY_HINT));
        let help = Line::from(vec![
            key("[↑/↓]"),
            Span::raw("page "),
            key("[←/→]"),
            Span::raw("view "),
            key("[1-7]"),
            Span::raw("jump "),
            key("[PgUp/PgDn]"),
            Span::raw("scroll "),
            key("[q]"),
            Span::raw("uit"),
        ]);
        Paragraph::new(help).render(help_area, buf);

        let info = Line::from(vec![
            Span::styled(
                self.locale.code().to_uppercase(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {}", self.position())),
        ])
        .right_aligned();
        Paragraph::new(info).render(info_area, buf);
    }
}
