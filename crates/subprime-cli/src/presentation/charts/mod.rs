//! Chart adapters
//!
//! Content carries charts as data (`ChartSpec`, `GraphSpec`). An adapter turns
//! that data into something a front end can display: styled text lines for
//! the console, a ratatui widget for the TUI.

pub mod text;
pub mod tui;

pub use text::{TextChartAdapter, TextSpan};
pub use tui::{ChartWidget, TuiChartAdapter, rgb_color};

use subprime_types::{ChartKind, ChartSpec, GraphSpec, Rgb, Series};

pub trait ChartAdapter {
    type Artifact;

    fn chart(&self, spec: &ChartSpec) -> Self::Artifact;

    fn graph(&self, spec: &GraphSpec) -> Self::Artifact;
}

/// Series colours used when content gives none
const SERIES_FALLBACK: [Rgb; 6] = [
    Rgb::new(0x1F, 0x77, 0xB4),
    Rgb::new(0xFF, 0x7F, 0x0E),
    Rgb::new(0x2C, 0xA0, 0x2C),
    Rgb::new(0xD6, 0x27, 0x28),
    Rgb::new(0x94, 0x67, 0xBD),
    Rgb::new(0x8C, 0x56, 0x4B),
];

pub(crate) fn series_color(series: &Series, idx: usize) -> Rgb {
    series
        .color
        .unwrap_or(SERIES_FALLBACK[idx % SERIES_FALLBACK.len()])
}

/// Colour of point `point` of a series
pub(crate) fn point_color(series: &Series, idx: usize, point: usize) -> Rgb {
    series
        .point_colors
        .get(point)
        .copied()
        .unwrap_or_else(|| series_color(series, idx))
}

/// Value axis range of a chart.
///
/// Timeline charts measure along their year range; bar charts always include
/// zero so bars have a base.
pub(crate) fn value_range(spec: &ChartSpec) -> (f64, f64) {
    if let Some([lo, hi]) = spec.y_range {
        return (lo, hi);
    }

    let values = spec.series.iter().flat_map(|s| s.values.iter().copied());
    let values: Vec<f64> = match spec.chart {
        ChartKind::Timeline => spec.bands.iter().flat_map(|b| [b.start, b.end]).collect(),
        _ => values.chain(spec.baseline).collect(),
    };

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }

    if matches!(spec.chart, ChartKind::Bar | ChartKind::GroupedBar) {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    if hi <= lo {
        hi = lo + 1.0;
    }
    (lo, hi)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use subprime_types::{Annotation, Band, ChartKind, ChartSpec, Series, XAxis};

    pub fn grouped_bar() -> ChartSpec {
        ChartSpec {
            title: Some("GDP growth".into()),
            chart: ChartKind::GroupedBar,
            x_label: None,
            y_label: Some("%".into()),
            x: XAxis::Categories(vec!["USA".into(), "UK".into()]),
            series: vec![
                Series {
                    name: "2007".into(),
                    color: Some("#4CAF50".parse().unwrap()),
                    point_colors: vec![],
                    values: vec![1.9, 2.7],
                },
                Series {
                    name: "2009".into(),
                    color: None,
                    point_colors: vec![],
                    values: vec![-2.5, -4.0],
                },
            ],
            bands: vec![],
            annotations: vec![],
            y_range: None,
            baseline: None,
        }
    }

    pub fn timeline() -> ChartSpec {
        let band = |label: &str, start: f64, end: f64| Band {
            label: label.into(),
            start,
            end,
            color: Some("#D53E4F".parse().unwrap()),
        };
        ChartSpec {
            title: Some("Crisis timeline".into()),
            chart: ChartKind::Timeline,
            x_label: Some("Year".into()),
            y_label: None,
            x: XAxis::Categories(vec!["Bubble".into(), "Collapse".into()]),
            series: vec![],
            bands: vec![band("Bubble", 2001.0, 2006.0), band("Collapse", 2008.0, 2008.75)],
            annotations: vec![Annotation {
                x: 2008.7,
                y: None,
                category: Some("Collapse".into()),
                text: "Lehman Brothers bankruptcy".into(),
            }],
            y_range: Some([2000.0, 2010.0]),
            baseline: None,
        }
    }

    pub fn line() -> ChartSpec {
        ChartSpec {
            title: Some("Home prices".into()),
            chart: ChartKind::Line,
            x_label: Some("Year".into()),
            y_label: Some("Index".into()),
            x: XAxis::Values(vec![2000.0, 2004.0, 2006.5, 2009.0]),
            series: vec![Series {
                name: "Index".into(),
                color: None,
                point_colors: vec![],
                values: vec![100.0, 150.0, 206.2, 140.0],
            }],
            bands: vec![Band {
                label: "Bubble formation".into(),
                start: 2000.0,
                end: 2006.5,
                color: None,
            }],
            annotations: vec![Annotation {
                x: 2006.5,
                y: Some(206.2),
                category: None,
                text: "Bubble peak".into(),
            }],
            y_range: None,
            baseline: Some(100.0),
        }
    }
}
