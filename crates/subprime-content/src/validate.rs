//! Totality checks over a content document.
//!
//! A document is accepted only if every page and every sub-option of every
//! page's dimension has content, and every block is internally consistent.
//! All problems are collected rather than stopping at the first one.

use std::collections::HashSet;

use subprime_types::{
    Block, ChartKind, ChartSpec, ContentDocument, Dimension, GraphSpec, Labels, Page,
    PageDocument, SubSelection, Table,
};

/// Expected label count per dimension
const LABEL_DIMENSIONS: [Dimension; 5] = [
    Dimension::Page,
    Dimension::Period,
    Dimension::Metric,
    Dimension::Region,
    Dimension::Tab,
];

pub fn validate(doc: &ContentDocument) -> Vec<String> {
    let mut problems = Vec::new();

    check_labels(&doc.labels, &mut problems);

    for page in Page::ALL {
        match doc.pages.iter().filter(|p| p.page == page).count() {
            0 => problems.push(format!("page '{}' is missing", page)),
            1 => {}
            n => problems.push(format!("page '{}' appears {} times", page, n)),
        }
    }

    for page_doc in &doc.pages {
        check_page(page_doc, &mut problems);
    }

    problems
}

fn check_labels(labels: &Labels, problems: &mut Vec<String>) {
    for dimension in LABEL_DIMENSIONS {
        let expected = match dimension {
            Dimension::Page => Page::ALL.len(),
            other => SubSelection::options(other).len(),
        };
        let options = labels.options(dimension);
        if options.len() != expected {
            problems.push(format!(
                "{} labels: expected {}, found {}",
                dimension,
                expected,
                options.len()
            ));
        }

        let mut seen = HashSet::new();
        for label in options {
            if label.trim().is_empty() {
                problems.push(format!("{} labels: empty label", dimension));
            } else if !seen.insert(label.as_str()) {
                problems.push(format!("{} labels: duplicate label '{}'", dimension, label));
            }
        }

        if dimension != Dimension::Page && labels.prompt(dimension).trim().is_empty() {
            problems.push(format!("{} prompt is empty", dimension));
        }
    }
}

fn check_page(page_doc: &PageDocument, problems: &mut Vec<String>) {
    let page = page_doc.page;

    match page.dimension() {
        Some(dimension) => {
            for sub in SubSelection::options(dimension) {
                match page_doc.views.iter().filter(|v| v.sub == sub).count() {
                    0 => problems.push(format!("{}: no view for '{}'", page, sub)),
                    1 => {}
                    n => problems.push(format!("{}: view '{}' appears {} times", page, sub, n)),
                }
            }
            for view in &page_doc.views {
                if view.sub.dimension() != dimension {
                    problems.push(format!(
                        "{}: view '{}' belongs to {}, not {}",
                        page,
                        view.sub,
                        view.sub.dimension(),
                        dimension
                    ));
                }
                if view.blocks.is_empty() {
                    problems.push(format!("{}: view '{}' has no blocks", page, view.sub));
                }
            }
        }
        None => {
            if !page_doc.views.is_empty() {
                problems.push(format!("{}: page has no sub-selector but defines views", page));
            }
            if page_doc.lead.is_empty() && page_doc.trail.is_empty() {
                problems.push(format!("{}: page has no content", page));
            }
        }
    }

    let view_blocks = page_doc.views.iter().flat_map(|v| {
        v.blocks
            .iter()
            .map(move |b| (format!("{}/{}", page, v.sub), b))
    });
    let page_blocks = page_doc
        .lead
        .iter()
        .chain(page_doc.trail.iter())
        .map(|b| (page.to_string(), b));

    for (location, block) in page_blocks.chain(view_blocks) {
        check_block(&location, block, problems);
    }
}

fn check_block(location: &str, block: &Block, problems: &mut Vec<String>) {
    match block {
        Block::Prose(prose) => {
            if prose.text().trim().is_empty() {
                problems.push(format!("{}: empty prose block", location));
            }
        }
        Block::Events(list) => {
            if list.events.is_empty() {
                problems.push(format!("{}: event list without events", location));
            }
        }
        Block::Table(table) => check_table(location, table, problems),
        Block::Chart(chart) => check_chart(location, chart, problems),
        Block::Graph(graph) => check_graph(location, graph, problems),
    }
}

fn check_table(location: &str, table: &Table, problems: &mut Vec<String>) {
    let arity = table.columns.len();
    for (i, row) in table.rows.iter().enumerate() {
        if row.len() != arity {
            problems.push(format!(
                "{}: table row {} has {} cells, header has {}",
                location,
                i,
                row.len(),
                arity
            ));
        }
    }
    if let Some(col) = table.emphasis_column
        && col >= arity
    {
        problems.push(format!(
            "{}: emphasis column {} out of range",
            location, col
        ));
    }
}

fn check_chart(location: &str, chart: &ChartSpec, problems: &mut Vec<String>) {
    let points = chart.x.len();

    if chart.chart == ChartKind::Timeline {
        if chart.bands.len() != points {
            problems.push(format!(
                "{}: timeline chart has {} categories but {} spans",
                location,
                points,
                chart.bands.len()
            ));
        }
    } else if chart.series.is_empty() {
        problems.push(format!("{}: chart without series", location));
    }

    for series in &chart.series {
        if series.values.len() != points {
            problems.push(format!(
                "{}: series '{}' has {} values for {} x points",
                location,
                series.name,
                series.values.len(),
                points
            ));
        }
        if !series.point_colors.is_empty() && series.point_colors.len() != points {
            problems.push(format!(
                "{}: series '{}' has {} point colours for {} x points",
                location,
                series.name,
                series.point_colors.len(),
                points
            ));
        }
    }

    for band in &chart.bands {
        if band.end < band.start {
            problems.push(format!(
                "{}: band '{}' ends before it starts",
                location, band.label
            ));
        }
    }

    if let Some([lo, hi]) = chart.y_range
        && hi <= lo
    {
        problems.push(format!("{}: empty y range", location));
    }
}

fn check_graph(location: &str, graph: &GraphSpec, problems: &mut Vec<String>) {
    let mut ids = HashSet::new();
    for node in &graph.nodes {
        if !ids.insert(node.id.as_str()) {
            problems.push(format!("{}: duplicate node '{}'", location, node.id));
        }
    }
    for edge in &graph.edges {
        for end in [&edge.from, &edge.to] {
            if !ids.contains(end.as_str()) {
                problems.push(format!(
                    "{}: edge {} -> {} references unknown node '{}'",
                    location, edge.from, edge.to, end
                ));
            }
        }
    }
}
