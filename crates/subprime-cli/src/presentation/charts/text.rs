//! Plain-text charts for console output.
//!
//! Every chart becomes a list of lines made of spans, each optionally
//! coloured; the console view decides whether colours are emitted.

use subprime_engine::{edge_midpoint, node_color};
use subprime_types::{ChartKind, ChartSpec, GraphSpec, NodeCategory, Rgb, format_number};

use super::{ChartAdapter, point_color, value_range};
use crate::presentation::formatters::{pad, truncate};

const MIN_WIDTH: usize = 40;
const MAX_LABEL: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub color: Option<Rgb>,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub type TextLine = Vec<TextSpan>;

/// Text of a rendered chart, without colours
pub fn plain_text(lines: &[TextLine]) -> String {
    lines
        .iter()
        .map(|line| line.iter().map(|s| s.text.as_str()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct TextChartAdapter {
    width: usize,
}

impl TextChartAdapter {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
        }
    }
}

impl ChartAdapter for TextChartAdapter {
    type Artifact = Vec<TextLine>;

    fn chart(&self, spec: &ChartSpec) -> Vec<TextLine> {
        let mut lines = Vec::new();
        if let Some(title) = &spec.title {
            lines.push(vec![TextSpan::plain(format!("📊 {}", title))]);
        }

        match spec.chart {
            ChartKind::Timeline => self.timeline(spec, &mut lines),
            ChartKind::Line | ChartKind::Bar if spec.series.len() == 1 => {
                self.band_legend(spec, &mut lines);
                self.point_rows(spec, &mut lines);
            }
            _ => {
                self.band_legend(spec, &mut lines);
                self.grouped_rows(spec, &mut lines);
            }
        }

        if let Some(y_label) = &spec.y_label
            && spec.chart != ChartKind::Timeline
        {
            lines.push(vec![TextSpan::plain(format!("   ({})", y_label))]);
        }
        lines
    }

    fn graph(&self, spec: &GraphSpec) -> Vec<TextLine> {
        let mut lines = Vec::new();
        if let Some(title) = &spec.title {
            lines.push(vec![TextSpan::plain(format!("🔀 {}", title))]);
        }

        for category in NodeCategory::ALL {
            let members: Vec<&str> = spec
                .nodes
                .iter()
                .filter(|n| n.category == category)
                .map(|n| n.id.as_str())
                .collect();
            if members.is_empty() {
                continue;
            }
            let label = spec
                .legend
                .iter()
                .find(|l| l.category == category)
                .map(|l| l.label.clone())
                .unwrap_or_else(|| format!("{:?}", category));
            lines.push(vec![
                TextSpan::colored("■ ", node_color(category)),
                TextSpan::plain(format!("{}: {}", label, members.join(", "))),
            ]);
        }

        for edge in &spec.edges {
            let mut text = format!("  {} → {}", edge.from, edge.to);
            if let Some(label) = &edge.label
                && edge_midpoint(spec, edge).is_some()
            {
                text.push_str(&format!("  ({})", label));
            }
            lines.push(vec![TextSpan::plain(text)]);
        }
        lines
    }
}

impl TextChartAdapter {
    fn label_width(&self, labels: &[String]) -> usize {
        labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL)
    }

    fn track_width(&self, label_width: usize) -> usize {
        self.width.saturating_sub(label_width + 14).max(10)
    }

    fn band_legend(&self, spec: &ChartSpec, lines: &mut Vec<TextLine>) {
        for band in &spec.bands {
            let color = band.color.unwrap_or(Rgb::new(0xBD, 0xBD, 0xBD));
            lines.push(vec![
                TextSpan::colored("▌ ", color),
                TextSpan::plain(format!(
                    "{} ({} – {})",
                    band.label,
                    format_number(band.start),
                    format_number(band.end)
                )),
            ]);
        }
    }

    /// One row per x point of a single series
    fn point_rows(&self, spec: &ChartSpec, lines: &mut Vec<TextLine>) {
        let Some(series) = spec.series.first() else {
            return;
        };
        let labels: Vec<String> = (0..spec.x.len())
            .map(|i| spec.x.label(i).unwrap_or_default())
            .collect();
        let label_w = self.label_width(&labels);
        let track_w = self.track_width(label_w);
        let (lo, hi) = value_range(spec);
        let scale = Scale::new(lo, hi, track_w);
        let baseline_col = spec.baseline.map(|b| scale.col(b));

        for (i, value) in series.values.iter().enumerate() {
            let color = point_color(series, 0, i);
            let x = spec.x.position(i);
            let col = scale.col(*value);

            let mut line = vec![TextSpan::plain(format!(
                "{} │",
                pad(&labels[i], label_w)
            ))];

            if spec.chart == ChartKind::Bar {
                let base = scale.col(lo.max(0.0));
                line.push(TextSpan::plain(" ".repeat(base)));
                line.push(TextSpan::colored(
                    "█".repeat(col.saturating_sub(base).max(1)),
                    color,
                ));
                line.push(TextSpan::plain(" ".repeat(track_w.saturating_sub(col.max(base + 1)))));
            } else {
                let marker_color = spec
                    .bands
                    .iter()
                    .find(|b| x >= b.start && x <= b.end)
                    .and_then(|b| b.color)
                    .unwrap_or(color);
                let mut track: Vec<char> = vec![' '; track_w];
                if let Some(b) = baseline_col
                    && let Some(cell) = track.get_mut(b)
                {
                    *cell = '┆';
                }
                let before: String = track.iter().take(col).collect();
                let after: String = track.iter().skip(col + 1).collect();
                line.push(TextSpan::plain(before));
                line.push(TextSpan::colored("●", marker_color));
                line.push(TextSpan::plain(after));
            }

            line.push(TextSpan::plain(format!(" {}", format_number(*value))));

            if let Some(note) = spec
                .annotations
                .iter()
                .find(|a| nearest_point(spec, a.x) == Some(i))
            {
                line.push(TextSpan::plain(format!("  ◆ {}", note.text)));
            }
            lines.push(line);
        }
    }

    /// One block per category, one bar per series, growing from zero
    fn grouped_rows(&self, spec: &ChartSpec, lines: &mut Vec<TextLine>) {
        let names: Vec<String> = spec.series.iter().map(|s| s.name.clone()).collect();
        let name_w = self.label_width(&names);
        let track_w = self.track_width(name_w + 2);
        let (lo, hi) = value_range(spec);
        let scale = Scale::new(lo, hi, track_w);
        let zero = scale.col(0.0_f64.clamp(lo, hi));

        for i in 0..spec.x.len() {
            let category = spec.x.label(i).unwrap_or_default();
            lines.push(vec![TextSpan::plain(truncate(&category, self.width))]);

            for (j, series) in spec.series.iter().enumerate() {
                let Some(value) = series.values.get(i) else {
                    continue;
                };
                let col = scale.col(*value);
                let (start, end) = if col >= zero { (zero, col) } else { (col, zero) };
                let filled = (end - start).max(1);

                lines.push(vec![
                    TextSpan::plain(format!("  {} ", pad(&series.name, name_w))),
                    TextSpan::plain(" ".repeat(start)),
                    TextSpan::colored("█".repeat(filled), point_color(series, j, i)),
                    TextSpan::plain(" ".repeat(track_w.saturating_sub(start + filled))),
                    TextSpan::plain(format!(" {}", format_number(*value))),
                ]);
            }
        }
    }

    /// Horizontal spans on a shared year axis, one row per category
    fn timeline(&self, spec: &ChartSpec, lines: &mut Vec<TextLine>) {
        let labels: Vec<String> = (0..spec.x.len())
            .map(|i| spec.x.label(i).unwrap_or_default())
            .collect();
        let label_w = self.label_width(&labels);
        let track_w = self.track_width(label_w);
        let (lo, hi) = value_range(spec);
        let scale = Scale::new(lo, hi, track_w);

        for (i, label) in labels.iter().enumerate() {
            let mut line = vec![TextSpan::plain(format!("{} │", pad(label, label_w)))];
            let Some(band) = spec.bands.get(i) else {
                lines.push(line);
                continue;
            };

            let start = scale.col(band.start);
            let end = scale.col(band.end).max(start + 1).min(track_w);
            let color = band.color.unwrap_or(Rgb::new(0x32, 0x88, 0xBD));
            let markers: Vec<usize> = spec
                .annotations
                .iter()
                .filter(|a| a.category.as_deref() == Some(label.as_str()))
                .map(|a| scale.col(a.x))
                .collect();

            for col in 0..track_w {
                let filled = col >= start && col < end;
                let glyph = if markers.contains(&col) {
                    "◆"
                } else if filled {
                    "█"
                } else {
                    " "
                };
                if filled {
                    line.push(TextSpan::colored(glyph, color));
                } else {
                    line.push(TextSpan::plain(glyph));
                }
            }
            lines.push(merge_spans(line));
        }

        lines.push(vec![TextSpan::plain(format!(
            "{} └{}",
            " ".repeat(label_w),
            "─".repeat(track_w)
        ))]);

        let lo_label = format_number(lo);
        let hi_label = format_number(hi);
        let gap = track_w.saturating_sub(lo_label.len() + hi_label.len());
        let axis_title = spec.x_label.clone().unwrap_or_default();
        lines.push(vec![TextSpan::plain(format!(
            "{}  {}{}{}  {}",
            " ".repeat(label_w),
            lo_label,
            " ".repeat(gap),
            hi_label,
            axis_title
        ))]);

        for note in &spec.annotations {
            lines.push(vec![TextSpan::plain(format!(
                "  ◆ {} {}",
                format_number(note.x),
                note.text
            ))]);
        }
    }
}

/// Linear map from a value range onto `0..width` columns
struct Scale {
    lo: f64,
    hi: f64,
    width: usize,
}

impl Scale {
    fn new(lo: f64, hi: f64, width: usize) -> Self {
        Self { lo, hi, width }
    }

    fn col(&self, value: f64) -> usize {
        let span = self.hi - self.lo;
        if span <= 0.0 || self.width == 0 {
            return 0;
        }
        let t = ((value - self.lo) / span).clamp(0.0, 1.0);
        ((t * (self.width - 1) as f64).round() as usize).min(self.width - 1)
    }
}

fn nearest_point(spec: &ChartSpec, x: f64) -> Option<usize> {
    (0..spec.x.len()).min_by(|a, b| {
        let da = (spec.x.position(*a) - x).abs();
        let db = (spec.x.position(*b) - x).abs();
        da.total_cmp(&db)
    })
}

/// Join neighbouring spans that share a colour
fn merge_spans(spans: TextLine) -> TextLine {
    let mut merged: TextLine = Vec::new();
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.color == span.color => last.text.push_str(&span.text),
            _ => merged.push(span),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::charts::fixtures;
    use subprime_types::{GraphEdge, GraphNode, LegendEntry};

    #[test]
    fn test_grouped_bars_grow_from_zero() {
        let lines = TextChartAdapter::new(60).chart(&fixtures::grouped_bar());
        let text = plain_text(&lines);

        assert!(text.starts_with("📊 GDP growth\nUSA\n"));
        assert!(text.contains(" 1.9"));
        assert!(text.contains(" -4"));

        // Negative bars end where positive bars start
        let row = |needle: &str| {
            lines
                .iter()
                .find(|l| plain_text(std::slice::from_ref(*l)).ends_with(needle))
                .cloned()
                .unwrap()
        };
        let positive = plain_text(&[row(" 2.7")]);
        let negative = plain_text(&[row(" -4")]);
        let first_positive = positive.chars().position(|c| c == '█').unwrap();
        let negative: Vec<char> = negative.chars().collect();
        let last_negative = negative.iter().rposition(|c| *c == '█').unwrap();
        assert_eq!(last_negative + 1, first_positive);
    }

    #[test]
    fn test_timeline_marks_annotations_on_their_row() {
        let lines = TextChartAdapter::new(60).chart(&fixtures::timeline());
        let text = plain_text(&lines);
        let collapse = text.lines().find(|l| l.starts_with("Collapse")).unwrap();
        assert!(collapse.contains('◆'));
        let bubble = text.lines().find(|l| l.starts_with("Bubble ")).unwrap();
        assert!(bubble.contains('█'));
        assert!(!bubble.contains('◆'));
        assert!(text.contains("◆ 2008.7 Lehman Brothers bankruptcy"));
        assert!(text.contains("2000"));
        assert!(text.contains("2010  Year"));
    }

    #[test]
    fn test_line_rows_carry_annotations_and_bands() {
        let lines = TextChartAdapter::new(60).chart(&fixtures::line());
        let text = plain_text(&lines);
        assert!(text.contains("▌ Bubble formation (2000 – 2006.5)"));
        let peak = text.lines().find(|l| l.starts_with("2006.5")).unwrap();
        assert!(peak.contains("206.2"));
        assert!(peak.ends_with("◆ Bubble peak"));
        assert!(text.contains('┆'));
    }

    #[test]
    fn test_graph_lists_nodes_by_category_and_edges() {
        let graph = GraphSpec {
            title: Some("Flow".into()),
            nodes: vec![
                GraphNode {
                    id: "Households".into(),
                    category: NodeCategory::Participant,
                    x: 0.0,
                    y: 4.6,
                },
                GraphNode {
                    id: "Originating Banks".into(),
                    category: NodeCategory::Bank,
                    x: 1.8,
                    y: 4.0,
                },
            ],
            edges: vec![GraphEdge {
                from: "Households".into(),
                to: "Originating Banks".into(),
                label: Some("Mortgages".into()),
            }],
            legend: vec![LegendEntry {
                category: NodeCategory::Participant,
                label: "Participants".into(),
            }],
        };

        let lines = TextChartAdapter::new(60).graph(&graph);
        assert_eq!(lines[1][0].color, Some(node_color(NodeCategory::Participant)));
        insta::assert_snapshot!(plain_text(&lines), @r"
        🔀 Flow
        ■ Participants: Households
        ■ Bank: Originating Banks
          Households → Originating Banks  (Mortgages)
        ");
    }
}
