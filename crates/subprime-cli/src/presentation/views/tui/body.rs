//! Scrollable page body.
//!
//! Text rows and charts are stacked in one virtual column; only the rows
//! inside the viewport are drawn. Charts render into a scratch buffer first
//! so a chart cut by the viewport edge still shows its visible rows.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::{ACCENT, to_line};
use crate::presentation::charts::{ChartAdapter, ChartWidget, TuiChartAdapter};
use crate::presentation::view_models::PageViewModel;
use crate::presentation::views::layout::{Segment, layout_blocks};

enum BodyPart {
    Lines(Vec<Line<'static>>),
    Chart(ChartWidget),
}

impl BodyPart {
    fn height(&self) -> u16 {
        match self {
            BodyPart::Lines(lines) => u16::try_from(lines.len()).unwrap_or(u16::MAX),
            BodyPart::Chart(chart) => chart.height(),
        }
    }
}

/// A page laid out for a given width
pub struct PageBody {
    parts: Vec<BodyPart>,
}

impl PageBody {
    pub fn new(model: &PageViewModel, width: u16) -> Self {
        let adapter = TuiChartAdapter;
        let title = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let mut parts = vec![BodyPart::Lines(vec![
            Line::from(Span::styled(model.entry.title.clone(), title)),
            Line::default(),
        ])];

        for (i, segment) in layout_blocks(&model.entry.blocks, usize::from(width))
            .iter()
            .enumerate()
        {
            if i > 0 {
                parts.push(BodyPart::Lines(vec![Line::default()]));
            }
            parts.push(match segment {
                Segment::Text(lines) => BodyPart::Lines(lines.iter().map(to_line).collect()),
                Segment::Chart(spec) => BodyPart::Chart(adapter.chart(spec)),
                Segment::Graph(spec) => BodyPart::Chart(adapter.graph(spec)),
            });
        }

        Self { parts }
    }

    /// Total rows of the page
    pub fn height(&self) -> u16 {
        self.parts
            .iter()
            .fold(0u16, |acc, part| acc.saturating_add(part.height()))
    }

    pub fn max_scroll(&self, viewport: u16) -> u16 {
        self.height().saturating_sub(viewport)
    }

    pub fn chart_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|p| matches!(p, BodyPart::Chart(_)))
            .count()
    }
}

pub struct PageBodyView<'a> {
    body: &'a PageBody,
    scroll: u16,
}

impl<'a> PageBodyView<'a> {
    pub fn new(body: &'a PageBody, scroll: u16) -> Self {
        Self { body, scroll }
    }
}

impl<'a> Widget for PageBodyView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top = self.scroll;
        let bottom = top.saturating_add(area.height);
        let mut start = 0u16;

        for part in &self.body.parts {
            if start >= bottom {
                break;
            }
            let end = start.saturating_add(part.height());
            if end <= top {
                start = end;
                continue;
            }

            match part {
                BodyPart::Lines(lines) => {
                    for (k, line) in lines.iter().enumerate() {
                        let row = start.saturating_add(u16::try_from(k).unwrap_or(u16::MAX));
                        if row >= top && row < bottom {
                            buf.set_line(area.x, area.y + row - top, line, area.width);
                        }
                    }
                }
                BodyPart::Chart(chart) => {
                    let chart_area = Rect::new(0, 0, area.width, chart.height());
                    let mut scratch = Buffer::empty(chart_area);
                    Widget::render(chart, chart_area, &mut scratch);

                    for r in 0..chart.height() {
                        let row = start.saturating_add(r);
                        if row < top || row >= bottom {
                            continue;
                        }
                        for col in 0..area.width {
                            if let (Some(src), Some(dst)) = (
                                scratch.cell((col, r)),
                                buf.cell_mut((area.x + col, area.y + row - top)),
                            ) {
                                *dst = src.clone();
                            }
                        }
                    }
                }
            }

            start = end;
        }
    }
}
