//! Ratatui charts for the interactive dashboard.
//!
//! The adapter precomputes everything a chart needs into an owned
//! [`ChartWidget`]; drawing happens later, once the page layout knows where
//! the chart lands. Line charts use `Chart` (falling back to a `Sparkline`
//! when squeezed), bars, timelines and diagrams are painted on a `Canvas`.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Sparkline, Widget,
        canvas::{Canvas, Context, Line as CanvasLine},
    },
};
use subprime_engine::{edge_midpoint, node_color};
use subprime_types::{ChartKind, ChartSpec, GraphSpec, NodeCategory, Rgb, format_number};

use super::{ChartAdapter, point_color, series_color, value_range};

const AXIS_COLOR: Color = Color::DarkGray;
const SPARKLINE_BELOW: u16 = 8;

pub fn rgb_color(c: Rgb) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

pub struct TuiChartAdapter;

impl ChartAdapter for TuiChartAdapter {
    type Artifact = ChartWidget;

    fn chart(&self, spec: &ChartSpec) -> ChartWidget {
        match spec.chart {
            ChartKind::Line => ChartWidget::Plot(line_plot(spec)),
            ChartKind::Bar | ChartKind::GroupedBar => ChartWidget::Canvas(bar_plot(spec)),
            ChartKind::Timeline => ChartWidget::Canvas(timeline_plot(spec)),
        }
    }

    fn graph(&self, spec: &GraphSpec) -> ChartWidget {
        ChartWidget::Canvas(diagram_plot(spec))
    }
}

#[derive(Debug, Clone)]
pub enum ChartWidget {
    Plot(LinePlot),
    Canvas(CanvasPlot),
}

impl ChartWidget {
    /// Rows the chart wants in the page layout
    pub fn height(&self) -> u16 {
        match self {
            ChartWidget::Plot(_) => 18,
            ChartWidget::Canvas(plot) => plot.height,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartWidget::Plot(plot) => &plot.title,
            ChartWidget::Canvas(plot) => &plot.title,
        }
    }
}

impl Widget for &ChartWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            ChartWidget::Plot(plot) => plot.render(area, buf),
            ChartWidget::Canvas(plot) => plot.render(area, buf),
        }
    }
}

fn chart_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(AXIS_COLOR))
        .title(format!(" {} ", title))
}

// --------------------------------------------------------
// Line charts
// --------------------------------------------------------

#[derive(Debug, Clone)]
struct PlotSeries {
    name: Option<String>,
    color: Color,
    marker: Marker,
    graph_type: GraphType,
    points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone)]
pub struct LinePlot {
    title: String,
    x_title: String,
    y_title: String,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    datasets: Vec<PlotSeries>,
    spark: Vec<u64>,
    spark_color: Color,
}

fn line_plot(spec: &ChartSpec) -> LinePlot {
    let n = spec.x.len();
    let x_lo = spec.x.position(0);
    let x_hi = spec.x.position(n.saturating_sub(1)).max(x_lo + 1.0);
    let (y_lo, y_hi) = value_range(spec);
    let mut datasets = Vec::new();

    // Phase bands as coloured vertical edges
    for band in &spec.bands {
        let color = band.color.map(rgb_color).unwrap_or(AXIS_COLOR);
        datasets.push(PlotSeries {
            name: Some(band.label.clone()),
            color,
            marker: Marker::Braille,
            graph_type: GraphType::Line,
            points: vec![(band.start, y_lo), (band.start, y_hi)],
        });
    }

    if let Some(baseline) = spec.baseline {
        datasets.push(PlotSeries {
            name: None,
            color: AXIS_COLOR,
            marker: Marker::Dot,
            graph_type: GraphType::Line,
            points: vec![(x_lo, baseline), (x_hi, baseline)],
        });
    }

    for (idx, series) in spec.series.iter().enumerate() {
        datasets.push(PlotSeries {
            name: Some(series.name.clone()),
            color: rgb_color(series_color(series, idx)),
            marker: Marker::Braille,
            graph_type: GraphType::Line,
            points: series
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| (spec.x.position(i), *v))
                .collect(),
        });
    }

    for note in &spec.annotations {
        let Some(y) = note.y else { continue };
        datasets.push(PlotSeries {
            name: Some(format!("◆ {}", note.text)),
            color: Color::White,
            marker: Marker::Block,
            graph_type: GraphType::Scatter,
            points: vec![(note.x, y)],
        });
    }

    let spark = spec
        .series
        .first()
        .map(|s| {
            s.values
                .iter()
                .map(|v| (((v - y_lo) / (y_hi - y_lo)).clamp(0.0, 1.0) * 100.0).round() as u64)
                .collect()
        })
        .unwrap_or_default();
    let spark_color = spec
        .series
        .first()
        .map(|s| rgb_color(series_color(s, 0)))
        .unwrap_or(Color::Cyan);

    LinePlot {
        title: spec.title.clone().unwrap_or_default(),
        x_title: spec.x_label.clone().unwrap_or_default(),
        y_title: spec.y_label.clone().unwrap_or_default(),
        x_bounds: [x_lo, x_hi],
        y_bounds: [y_lo, y_hi],
        datasets,
        spark,
        spark_color,
    }
}

impl LinePlot {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = chart_block(&self.title);

        if area.height < SPARKLINE_BELOW {
            Sparkline::default()
                .block(block)
                .data(&self.spark)
                .max(100)
                .style(Style::default().fg(self.spark_color))
                .render(area, buf);
            return;
        }

        let datasets: Vec<Dataset> = self
            .datasets
            .iter()
            .map(|s| {
                let dataset = Dataset::default()
                    .marker(s.marker)
                    .graph_type(s.graph_type)
                    .style(Style::default().fg(s.color))
                    .data(&s.points);
                match &s.name {
                    Some(name) => dataset.name(name.clone()),
                    None => dataset,
                }
            })
            .collect();

        let [x_lo, x_hi] = self.x_bounds;
        let [y_lo, y_hi] = self.y_bounds;
        let axis_labels = |lo: f64, hi: f64| {
            vec![
                Span::raw(format_number(lo)),
                Span::raw(format_number((lo + hi) / 2.0)),
                Span::raw(format_number(hi)),
            ]
        };

        Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title(Span::styled(self.x_title.clone(), Style::default().fg(AXIS_COLOR)))
                    .style(Style::default().fg(AXIS_COLOR))
                    .bounds(self.x_bounds)
                    .labels(axis_labels(x_lo, x_hi)),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(self.y_title.clone(), Style::default().fg(AXIS_COLOR)))
                    .style(Style::default().fg(AXIS_COLOR))
                    .bounds(self.y_bounds)
                    .labels(axis_labels(y_lo, y_hi)),
            )
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(3, 4)))
            .render(area, buf);
    }
}

// --------------------------------------------------------
// Canvas charts: bars, timelines, diagrams
// --------------------------------------------------------

#[derive(Debug, Clone)]
struct PlotRect {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    color: Color,
}

#[derive(Debug, Clone)]
struct PlotLabel {
    x: f64,
    y: f64,
    text: String,
    style: Style,
}

#[derive(Debug, Clone)]
pub struct CanvasPlot {
    title: String,
    height: u16,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    rects: Vec<PlotRect>,
    lines: Vec<(f64, f64, f64, f64, Color)>,
    labels: Vec<PlotLabel>,
    legend: Vec<(String, Color)>,
}

impl CanvasPlot {
    fn new(title: Option<&String>, height: u16) -> Self {
        Self {
            title: title.cloned().unwrap_or_default(),
            height,
            x_bounds: [0.0, 1.0],
            y_bounds: [0.0, 1.0],
            rects: Vec::new(),
            lines: Vec::new(),
            labels: Vec::new(),
            legend: Vec::new(),
        }
    }

    fn label(&mut self, x: f64, y: f64, text: impl Into<String>, style: Style) {
        self.labels.push(PlotLabel {
            x,
            y,
            text: text.into(),
            style,
        });
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut block = chart_block(&self.title);
        if !self.legend.is_empty() {
            let mut spans = Vec::new();
            for (name, color) in &self.legend {
                spans.push(Span::styled(" ■ ", Style::default().fg(*color)));
                spans.push(Span::raw(name.clone()));
            }
            spans.push(Span::raw(" "));
            block = block.title_bottom(Line::from(spans));
        }

        let inner = block.inner(area);
        let [x_lo, x_hi] = self.x_bounds;
        // One vertical stroke per cell column fills a rectangle
        let step = (x_hi - x_lo) / f64::from(inner.width.max(1)) / 2.0;

        Canvas::default()
            .block(block)
            .marker(Marker::Block)
            .x_bounds(self.x_bounds)
            .y_bounds(self.y_bounds)
            .paint(|ctx| self.paint(ctx, step))
            .render(area, buf);
    }

    fn paint(&self, ctx: &mut Context, step: f64) {
        for &(x1, y1, x2, y2, color) in &self.lines {
            ctx.draw(&CanvasLine {
                x1,
                y1,
                x2,
                y2,
                color,
            });
        }
        ctx.layer();

        for rect in &self.rects {
            let mut x = rect.x0;
            while x <= rect.x1 {
                ctx.draw(&CanvasLine {
                    x1: x,
                    y1: rect.y0,
                    x2: x,
                    y2: rect.y1,
                    color: rect.color,
                });
                x += step.max(f64::EPSILON);
            }
        }

        for label in &self.labels {
            ctx.print(
                label.x,
                label.y,
                Line::styled(label.text.clone(), label.style),
            );
        }
    }
}

fn bar_plot(spec: &ChartSpec) -> CanvasPlot {
    let mut plot = CanvasPlot::new(spec.title.as_ref(), 18);
    let categories = spec.x.len().max(1);
    let groups = spec.series.len().max(1);
    let (lo, hi) = value_range(spec);
    let pad = (hi - lo) * 0.12;
    let bar_w = 0.8 / groups as f64;

    plot.x_bounds = [0.0, categories as f64];
    plot.y_bounds = [lo - pad, hi + pad * 0.5];
    plot.lines.push((0.0, 0.0_f64.clamp(lo, hi), categories as f64, 0.0_f64.clamp(lo, hi), AXIS_COLOR));

    for (j, series) in spec.series.iter().enumerate() {
        for (i, value) in series.values.iter().enumerate() {
            let x0 = i as f64 + 0.1 + j as f64 * bar_w;
            plot.rects.push(PlotRect {
                x0,
                x1: x0 + bar_w * 0.85,
                y0: value.min(0.0).max(lo),
                y1: value.max(0.0),
                color: rgb_color(point_color(series, j, i)),
            });
        }
        if spec.series.len() > 1 || spec.chart == ChartKind::GroupedBar {
            plot.legend
                .push((series.name.clone(), rgb_color(series_color(series, j))));
        }
    }

    for i in 0..spec.x.len() {
        let text = spec.x.label(i).unwrap_or_default();
        plot.label(i as f64 + 0.1, lo - pad, text, Style::default().fg(Color::Gray));
    }
    plot.label(0.0, hi + pad * 0.5, format_number(hi), Style::default().fg(AXIS_COLOR));
    if lo < 0.0 {
        plot.label(0.0, lo, format_number(lo), Style::default().fg(AXIS_COLOR));
    }
    if let Some(y_label) = &spec.y_label {
        plot.legend.push((y_label.clone(), AXIS_COLOR));
    }
    plot
}

fn timeline_plot(spec: &ChartSpec) -> CanvasPlot {
    let rows = spec.x.len();
    let mut plot = CanvasPlot::new(spec.title.as_ref(), (rows as u16 + 6).max(12));
    let (lo, hi) = value_range(spec);
    let gutter = (hi - lo) * 0.45;

    plot.x_bounds = [lo - gutter, hi];
    plot.y_bounds = [-1.0, rows as f64];
    plot.lines.push((lo, -0.2, hi, -0.2, AXIS_COLOR));

    for i in 0..rows {
        let y = (rows - i - 1) as f64;
        let label = spec.x.label(i).unwrap_or_default();

        if let Some(band) = spec.bands.get(i) {
            let color = band.color.map(rgb_color).unwrap_or(Color::Blue);
            plot.rects.push(PlotRect {
                x0: band.start,
                x1: band.end,
                y0: y + 0.2,
                y1: y + 0.8,
                color,
            });
        }
        for note in spec
            .annotations
            .iter()
            .filter(|a| a.category.as_deref() == Some(label.as_str()))
        {
            plot.label(
                note.x,
                y + 0.5,
                format!("◆ {}", note.text),
                Style::default().add_modifier(Modifier::BOLD),
            );
        }
        plot.label(lo - gutter, y + 0.5, label, Style::default());
    }

    let mut year = lo.ceil();
    while year <= hi {
        plot.label(year, -0.8, format_number(year), Style::default().fg(AXIS_COLOR));
        year += 4.0;
    }
    plot
}

fn diagram_plot(spec: &GraphSpec) -> CanvasPlot {
    let mut plot = CanvasPlot::new(spec.title.as_ref(), 24);
    let ((x_lo, x_hi), (y_lo, y_hi)) = spec.bounds().unwrap_or(((0.0, 1.0), (0.0, 1.0)));

    plot.x_bounds = [x_lo - 0.5, x_hi + 2.5];
    plot.y_bounds = [y_lo - 0.5, y_hi + 0.5];

    for edge in &spec.edges {
        let (Some(from), Some(to)) = (spec.node(&edge.from), spec.node(&edge.to)) else {
            continue;
        };
        plot.lines.push((from.x, from.y, to.x, to.y, AXIS_COLOR));
        if let (Some(label), Some((mx, my))) = (&edge.label, edge_midpoint(spec, edge)) {
            plot.label(
                mx,
                my,
                label.clone(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            );
        }
    }

    for node in &spec.nodes {
        plot.label(
            node.x,
            node.y,
            format!(" {} ", node.id),
            Style::default()
                .bg(rgb_color(node_color(node.category)))
                .fg(Color::Black),
        );
    }

    for category in NodeCategory::ALL {
        if let Some(entry) = spec.legend.iter().find(|l| l.category == category) {
            plot.legend
                .push((entry.label.clone(), rgb_color(node_color(category))));
        }
    }
    plot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::charts::fixtures;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(widget: &ChartWidget, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(widget, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_grouped_bars_are_painted_on_canvas() {
        let widget = TuiChartAdapter.chart(&fixtures::grouped_bar());
        assert!(matches!(widget, ChartWidget::Canvas(_)));
        let screen = draw(&widget, 60, widget.height());
        assert!(screen.contains("GDP growth"));
        assert!(screen.contains("USA"));
        assert!(screen.contains("2009"));
    }

    #[test]
    fn test_timeline_rows_have_labels_and_markers() {
        let widget = TuiChartAdapter.chart(&fixtures::timeline());
        assert_eq!(widget.height(), 12);
        let screen = draw(&widget, 80, 12);
        assert!(screen.contains("Bubble"));
        assert!(screen.contains("Collapse"));
        assert!(screen.contains("◆"));
    }

    #[test]
    fn test_line_chart_falls_back_to_sparkline_when_short() {
        let widget = TuiChartAdapter.chart(&fixtures::line());
        assert!(matches!(widget, ChartWidget::Plot(_)));
        let full = draw(&widget, 70, 18);
        assert!(full.contains("Home prices"));
        assert!(full.contains("Index"));

        let short = draw(&widget, 70, 5);
        assert!(short.contains("Home prices"));
    }
}
