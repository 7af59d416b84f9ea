use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::keys::{Page, SubSelection};

/// Everything displayed for one (page, sub-selection) key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub page: Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<SubSelection>,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl ContentEntry {
    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Chart(c) => Some(c),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn event_lists(&self) -> impl Iterator<Item = &EventList> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Events(e) => Some(e),
            _ => None,
        })
    }

    pub fn graphs(&self) -> impl Iterator<Item = &GraphSpec> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Graph(g) => Some(g),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    Prose(Prose),
    Events(EventList),
    Table(Table),
    Chart(ChartSpec),
    Graph(GraphSpec),
}

impl Block {
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Prose(_) => "prose",
            Block::Events(_) => "events",
            Block::Table(_) => "table",
            Block::Chart(_) => "chart",
            Block::Graph(_) => "graph",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProseStyle {
    #[default]
    Body,
    Callout,
    Quote,
    Caption,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Prose {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub style: ProseStyle,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<Bullet>,
    #[serde(default)]
    pub numbered: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub closing: Vec<String>,
}

impl Prose {
    /// All text of the block in reading order
    pub fn text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(h) = &self.heading {
            parts.push(h.clone());
        }
        parts.extend(self.paragraphs.iter().cloned());
        parts.extend(self.bullets.iter().map(|b| match &b.label {
            Some(label) => format!("{}: {}", label, b.text),
            None => b.text.clone(),
        }));
        parts.extend(self.closing.iter().cloned());
        parts.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Rgb>,
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: String,
    pub description: String,
}

/// Rows of fixed arity under a header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Row colours by index; the renderer falls back to its own palette when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub palette: Vec<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis_column: Option<usize>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(
            self.rows
                .iter()
                .filter_map(|r| r.get(idx).map(String::as_str))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    GroupedBar,
    /// Horizontal bars spanning [start, end] per category
    Timeline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XAxis {
    Categories(Vec<String>),
    Values(Vec<f64>),
}

impl XAxis {
    pub fn len(&self) -> usize {
        match self {
            XAxis::Categories(c) => c.len(),
            XAxis::Values(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Label of the i-th x point
    pub fn label(&self, i: usize) -> Option<String> {
        match self {
            XAxis::Categories(c) => c.get(i).cloned(),
            XAxis::Values(v) => v.get(i).map(|x| format_number(*x)),
        }
    }

    /// Numeric position of the i-th x point (categories use their index)
    pub fn position(&self, i: usize) -> f64 {
        match self {
            XAxis::Categories(_) => i as f64,
            XAxis::Values(v) => v.get(i).copied().unwrap_or(i as f64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    /// Per-point colours, overriding `color` where present
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub point_colors: Vec<Rgb>,
    pub values: Vec<f64>,
}

/// Shaded x range: a phase band on line charts, a bar on timeline charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub label: String,
    pub start: f64,
    pub end: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Category row the marker sits on (timeline charts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub chart: ChartKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    pub x: XAxis,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<Series>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bands: Vec<Band>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_range: Option<[f64; 2]>,
    /// Horizontal reference line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<f64>,
}

impl ChartSpec {
    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Lowest and highest value over all series and bands
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let values = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .chain(self.bands.iter().flat_map(|b| [b.start, b.end]));
        values.fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    Participant,
    Bank,
    Asset,
    Investor,
    Risk,
    Special,
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 6] = [
        NodeCategory::Participant,
        NodeCategory::Bank,
        NodeCategory::Asset,
        NodeCategory::Investor,
        NodeCategory::Risk,
        NodeCategory::Special,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub category: NodeCategory,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub category: NodeCategory,
    pub label: String,
}

/// Directed diagram with hand-placed nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legend: Vec<LegendEntry>,
}

impl GraphSpec {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Coordinate bounds as ((min_x, max_x), (min_y, max_y))
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let first = self.nodes.first()?;
        let init = ((first.x, first.x), (first.y, first.y));
        Some(self.nodes.iter().fold(init, |((x0, x1), (y0, y1)), n| {
            ((x0.min(n.x), x1.max(n.x)), (y0.min(n.y), y1.max(n.y)))
        }))
    }
}

/// Shortest decimal rendering of a chart value (`2008.75`, `100`, `-0.1`)
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
