//! Ratatui widgets for the interactive dashboard.
//!
//! Widgets borrow a `PageViewModel` and only map it onto the terminal;
//! wrapping and table layout come from the shared block layout.

pub mod body;
pub mod header;
pub mod sidebar;
pub mod status_bar;

pub use body::{PageBody, PageBodyView};
pub use header::HeaderView;
pub use sidebar::SidebarView;
pub use status_bar::StatusBarView;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::layout::{Emphasis, Styled, StyledLine};
use crate::presentation::charts::rgb_color;

pub(crate) const ACCENT: Color = Color::Cyan;
pub(crate) const KEY_HINT: Color = Color::Yellow;

pub(crate) fn to_span(styled: &Styled) -> Span<'static> {
    let mut style = Style::default();
    if let Some(fg) = styled.fg {
        style = style.fg(rgb_color(fg));
    }
    if let Some(bg) = styled.bg {
        style = style.bg(rgb_color(bg));
    }
    style = match styled.emphasis {
        Emphasis::Normal => style,
        Emphasis::Strong => style.add_modifier(Modifier::BOLD),
        Emphasis::Muted => style.add_modifier(Modifier::DIM),
        Emphasis::Italic => style.add_modifier(Modifier::ITALIC),
    };
    Span::styled(styled.text.clone(), style)
}

pub(crate) fn to_line(line: &StyledLine) -> Line<'static> {
    Line::from(line.iter().map(to_span).collect::<Vec<_>>())
}
