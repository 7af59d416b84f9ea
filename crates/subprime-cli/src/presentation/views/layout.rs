//! Block layout shared by the console and the TUI.
//!
//! Prose, event lists and tables are wrapped into styled lines for a given
//! width; charts and graphs are left as slots for a chart adapter to fill.

use subprime_engine::row_color;
use subprime_types::{Block, EventList, Prose, ProseStyle, Rgb, Table};

use crate::presentation::charts::TextSpan;
use crate::presentation::formatters::{pad, wrap};

const CALLOUT_ACCENT: Rgb = Rgb::new(0x19, 0x76, 0xD2);
const EVENT_ACCENT: Rgb = Rgb::new(0xD5, 0x3E, 0x4F);
const ROW_TINT: f32 = 0.45;
const MIN_COLUMN: usize = 8;
const COLUMN_SEP: &str = " │ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Normal,
    Strong,
    Muted,
    Italic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Styled {
    pub text: String,
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub emphasis: Emphasis,
}

impl Styled {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bg: None,
            emphasis: Emphasis::Normal,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self::plain(text).with_emphasis(Emphasis::Strong)
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    pub fn with_fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn with_bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }
}

impl From<&TextSpan> for Styled {
    fn from(span: &TextSpan) -> Self {
        Self {
            text: span.text.clone(),
            fg: span.color,
            bg: None,
            emphasis: Emphasis::Normal,
        }
    }
}

pub type StyledLine = Vec<Styled>;

/// Text of a styled line without any styling
pub fn line_text(line: &StyledLine) -> String {
    line.iter().map(|s| s.text.as_str()).collect()
}

pub enum Segment<'a> {
    Text(Vec<StyledLine>),
    Chart(&'a subprime_types::ChartSpec),
    Graph(&'a subprime_types::GraphSpec),
}

/// Lay out blocks in reading order, one blank line between blocks
pub fn layout_blocks(blocks: &[Block], width: usize) -> Vec<Segment<'_>> {
    let width = width.max(MIN_COLUMN * 2);
    let mut segments = Vec::new();
    let mut text: Vec<StyledLine> = Vec::new();

    for block in blocks {
        let lines = match block {
            Block::Prose(prose) => prose_lines(prose, width),
            Block::Events(events) => event_lines(events, width),
            Block::Table(table) => table_lines(table, width),
            Block::Chart(spec) => {
                flush(&mut text, &mut segments);
                segments.push(Segment::Chart(spec));
                continue;
            }
            Block::Graph(spec) => {
                flush(&mut text, &mut segments);
                segments.push(Segment::Graph(spec));
                continue;
            }
        };

        if !text.is_empty() {
            text.push(Vec::new());
        }
        text.extend(lines);
    }

    flush(&mut text, &mut segments);
    segments
}

fn flush<'a>(text: &mut Vec<StyledLine>, segments: &mut Vec<Segment<'a>>) {
    if !text.is_empty() {
        segments.push(Segment::Text(std::mem::take(text)));
    }
}

pub fn prose_lines(prose: &Prose, width: usize) -> Vec<StyledLine> {
    let (prefix, body) = match prose.style {
        ProseStyle::Body => ("", Emphasis::Normal),
        ProseStyle::Callout => ("│ ", Emphasis::Normal),
        ProseStyle::Quote => ("  ", Emphasis::Italic),
        ProseStyle::Caption => ("", Emphasis::Muted),
    };
    let inner = width.saturating_sub(prefix.chars().count()).max(MIN_COLUMN);
    let gutter = || Styled::plain(prefix).with_fg(CALLOUT_ACCENT);

    let mut lines: Vec<StyledLine> = Vec::new();
    if let Some(heading) = &prose.heading {
        let mut styled = Styled::strong(heading.as_str());
        if prose.style == ProseStyle::Callout {
            styled = styled.with_fg(CALLOUT_ACCENT);
        }
        lines.push(vec![gutter(), styled]);
    }

    let paragraphs = |texts: &[String], lines: &mut Vec<StyledLine>| {
        for (i, paragraph) in texts.iter().enumerate() {
            if i > 0 {
                lines.push(vec![gutter()]);
            }
            for row in wrap(paragraph, inner) {
                lines.push(vec![gutter(), Styled::plain(row).with_emphasis(body)]);
            }
        }
    };

    paragraphs(&prose.paragraphs, &mut lines);

    for (i, bullet) in prose.bullets.iter().enumerate() {
        let marker = if prose.numbered {
            format!("{}. ", i + 1)
        } else {
            "• ".to_string()
        };
        let indent = marker.chars().count();
        let label = bullet.label.as_ref().map(|l| format!("{}:", l));
        let text = match &label {
            Some(label) => format!("{} {}", label, bullet.text),
            None => bullet.text.clone(),
        };

        for (row_idx, row) in wrap(&text, inner.saturating_sub(indent).max(1))
            .into_iter()
            .enumerate()
        {
            let lead = if row_idx == 0 {
                marker.clone()
            } else {
                " ".repeat(indent)
            };
            let mut line = vec![gutter(), Styled::plain(lead)];
            match &label {
                Some(label) if row_idx == 0 && row.starts_with(label.as_str()) => {
                    let rest = row[label.len()..].to_string();
                    line.push(Styled::strong(label.as_str()));
                    line.push(Styled::plain(rest).with_emphasis(body));
                }
                _ => line.push(Styled::plain(row).with_emphasis(body)),
            }
            lines.push(line);
        }
    }

    if !prose.closing.is_empty() {
        if !lines.is_empty() {
            lines.push(vec![gutter()]);
        }
        paragraphs(&prose.closing, &mut lines);
    }

    // Drop empty gutter spans so plain body text has no leading noise
    for line in &mut lines {
        line.retain(|s| !s.text.is_empty());
    }
    lines
}

pub fn event_lines(list: &EventList, width: usize) -> Vec<StyledLine> {
    let accent = list.accent.unwrap_or(EVENT_ACCENT);
    let mut lines = Vec::new();

    if let Some(title) = &list.title {
        lines.push(vec![Styled::strong(title.as_str())]);
    }

    for event in &list.events {
        lines.push(vec![
            Styled::plain("▸ ").with_fg(accent),
            Styled::strong(event.date.as_str()).with_fg(accent),
        ]);
        for row in wrap(&event.description, width.saturating_sub(4).max(MIN_COLUMN)) {
            lines.push(vec![Styled::plain(format!("    {}", row))]);
        }
    }

    lines
}

/// Column widths that fit `width`, shrinking the widest column first
pub fn column_widths(table: &Table, width: usize) -> Vec<usize> {
    let count = table.columns.len();
    if count == 0 {
        return Vec::new();
    }

    let mut widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .chain(std::iter::once(header))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separators = COLUMN_SEP.chars().count() * (count - 1);
    let available = width.saturating_sub(separators).max(MIN_COLUMN * count);

    while widths.iter().sum::<usize>() > available {
        let Some((idx, widest)) = widths
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|(_, w)| *w)
        else {
            break;
        };
        if widest <= MIN_COLUMN {
            break;
        }
        widths[idx] = widest - 1;
    }

    widths
}

pub fn table_lines(table: &Table, width: usize) -> Vec<StyledLine> {
    let widths = column_widths(table, width);
    let mut lines = Vec::new();

    if let Some(title) = &table.title {
        lines.push(vec![Styled::strong(title.as_str())]);
    }

    lines.extend(grid_row(&table.columns, &widths, None, None, Emphasis::Strong));
    lines.push(vec![Styled::plain(
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    )]);

    for (idx, row) in table.rows.iter().enumerate() {
        let bg = row_color(&table.palette, idx).tint(ROW_TINT);
        lines.extend(grid_row(
            row,
            &widths,
            Some(bg),
            table.emphasis_column,
            Emphasis::Normal,
        ));
    }

    lines
}

fn grid_row(
    cells: &[String],
    widths: &[usize],
    bg: Option<Rgb>,
    emphasis_column: Option<usize>,
    emphasis: Emphasis,
) -> Vec<StyledLine> {
    let wrapped: Vec<Vec<String>> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| wrap(cells.get(i).map(String::as_str).unwrap_or(""), *w))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

    (0..height)
        .map(|row| {
            let mut line = Vec::new();
            for (i, w) in widths.iter().enumerate() {
                if i > 0 {
                    line.push(styled_cell(COLUMN_SEP, bg, Emphasis::Normal));
                }
                let text = wrapped[i].get(row).map(String::as_str).unwrap_or("");
                let cell_emphasis = if emphasis_column == Some(i) {
                    Emphasis::Strong
                } else {
                    emphasis
                };
                line.push(styled_cell(&pad(text, *w), bg, cell_emphasis));
            }
            line
        })
        .collect()
}

fn styled_cell(text: &str, bg: Option<Rgb>, emphasis: Emphasis) -> Styled {
    let styled = Styled::plain(text).with_emphasis(emphasis);
    match bg {
        Some(bg) => styled.with_fg(Rgb::new(0, 0, 0)).with_bg(bg),
        None => styled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subprime_engine::DEFAULT_ROW_PALETTE;
    use subprime_types::{Bullet, TimelineEvent};

    fn texts(lines: &[StyledLine]) -> Vec<String> {
        lines.iter().map(line_text).collect()
    }

    fn table() -> Table {
        Table {
            title: Some("Measures".into()),
            columns: vec!["Measure".into(), "Year".into()],
            rows: vec![
                vec!["Dodd-Frank Act".into(), "2010".into()],
                vec!["Basel III".into(), "2010".into()],
                vec!["EMIR".into(), "2012".into()],
            ],
            palette: vec![],
            emphasis_column: Some(0),
        }
    }

    #[test]
    fn test_callout_keeps_gutter_and_labels() {
        let prose = Prose {
            heading: Some("Key Facts".into()),
            style: ProseStyle::Callout,
            bullets: vec![Bullet {
                label: Some("Duration".into()),
                text: "2007-2009".into(),
            }],
            ..Prose::default()
        };

        let lines = prose_lines(&prose, 60);
        assert_eq!(texts(&lines), vec!["│ Key Facts", "│ • Duration: 2007-2009"]);
        assert_eq!(lines[1][2].emphasis, Emphasis::Strong);
        assert_eq!(lines[1][2].text, "Duration:");
    }

    #[test]
    fn test_numbered_bullets_indent_continuations() {
        let prose = Prose {
            bullets: vec![Bullet {
                label: None,
                text: "Low interest rates kept credit cheap".into(),
            }],
            numbered: true,
            ..Prose::default()
        };

        let lines = texts(&prose_lines(&prose, 20));
        assert_eq!(lines[0], "1. Low interest");
        assert!(lines[1].starts_with("   "));
    }

    #[test]
    fn test_events_use_accent() {
        let list = EventList {
            title: None,
            accent: None,
            events: vec![TimelineEvent {
                date: "Sep 2008 (15th)".into(),
                description: "Lehman Brothers files for bankruptcy".into(),
            }],
        };

        let lines = event_lines(&list, 80);
        assert_eq!(lines[0][1].fg, Some(EVENT_ACCENT));
        assert_eq!(line_text(&lines[1]), "    Lehman Brothers files for bankruptcy");
    }

    #[test]
    fn test_table_rows_cycle_palette() {
        let lines = table_lines(&table(), 60);
        assert_eq!(line_text(&lines[1]), "Measure        │ Year");

        let row_bg = |line: &StyledLine| line[0].bg;
        assert_eq!(row_bg(&lines[3]), Some(DEFAULT_ROW_PALETTE[0].tint(ROW_TINT)));
        assert_eq!(row_bg(&lines[4]), Some(DEFAULT_ROW_PALETTE[1].tint(ROW_TINT)));
        assert_eq!(lines[3][0].emphasis, Emphasis::Strong);
        assert_eq!(lines[3][2].emphasis, Emphasis::Normal);
    }

    #[test]
    fn test_narrow_tables_wrap_cells() {
        let widths = column_widths(&table(), 20);
        assert_eq!(widths.iter().sum::<usize>(), 17);

        let lines = table_lines(&table(), 20);
        let dodd: Vec<String> = texts(&lines[3..5]);
        assert_eq!(dodd, vec!["Dodd-Frank    │ 2010", "Act           │     "]);
    }

    #[test]
    fn test_charts_split_text_segments() {
        let blocks = vec![
            Block::Table(table()),
            Block::Chart(crate::presentation::charts::fixtures::line()),
            Block::Prose(Prose {
                paragraphs: vec!["After".into()],
                ..Prose::default()
            }),
        ];

        let segments = layout_blocks(&blocks, 60);
        assert_eq!(segments.len(), 3);
        assert!(matches!(segments[1], Segment::Chart(_)));
    }
}
