//! Fixed colour rules of the dashboard, shared by every renderer.

use subprime_types::{GraphEdge, GraphSpec, NodeCategory, Rgb};

/// Row colours used when a table carries no palette of its own
pub const DEFAULT_ROW_PALETTE: [Rgb; 8] = [
    Rgb::new(0xFF, 0x9E, 0x80),
    Rgb::new(0xFF, 0xCC, 0x80),
    Rgb::new(0xFF, 0xD1, 0x80),
    Rgb::new(0xF5, 0x7C, 0x00),
    Rgb::new(0xEF, 0x6C, 0x00),
    Rgb::new(0xBF, 0x36, 0x0C),
    Rgb::new(0xB7, 0x1C, 0x1C),
    Rgb::new(0x88, 0x0E, 0x4F),
];

/// Colour of table row `idx`, cycling when rows outnumber the palette
pub fn row_color(palette: &[Rgb], idx: usize) -> Rgb {
    let palette = if palette.is_empty() {
        &DEFAULT_ROW_PALETTE[..]
    } else {
        palette
    };
    palette[idx % palette.len()]
}

pub fn node_color(category: NodeCategory) -> Rgb {
    match category {
        NodeCategory::Participant => Rgb::new(0xE1, 0xBE, 0xE7),
        NodeCategory::Bank => Rgb::new(0xBB, 0xDE, 0xFB),
        NodeCategory::Asset => Rgb::new(0xFF, 0xF9, 0xC4),
        NodeCategory::Investor => Rgb::new(0xC8, 0xE6, 0xC9),
        NodeCategory::Risk => Rgb::new(0xFF, 0xCD, 0xD2),
        NodeCategory::Special => Rgb::new(0xD1, 0xC4, 0xE9),
    }
}

/// Anchor of an edge label: the midpoint between its two nodes
pub fn edge_midpoint(graph: &GraphSpec, edge: &GraphEdge) -> Option<(f64, f64)> {
    let from = graph.node(&edge.from)?;
    let to = graph.node(&edge.to)?;
    Some(((from.x + to.x) / 2.0, (from.y + to.y) / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use subprime_types::GraphNode;

    #[test]
    fn rows_cycle_through_the_palette() {
        let palette = [Rgb::new(1, 1, 1), Rgb::new(2, 2, 2), Rgb::new(3, 3, 3)];
        let colors: Vec<Rgb> = (0..5).map(|i| row_color(&palette, i)).collect();
        assert_eq!(
            colors,
            vec![palette[0], palette[1], palette[2], palette[0], palette[1]]
        );
    }

    #[test]
    fn empty_palette_uses_period_colours() {
        assert_eq!(row_color(&[], 3).to_string(), "#F57C00");
        assert_eq!(row_color(&[], 8), DEFAULT_ROW_PALETTE[0]);
    }

    #[test]
    fn node_colours_follow_category() {
        let colors: Vec<String> = NodeCategory::ALL
            .into_iter()
            .map(|c| node_color(c).to_string())
            .collect();
        assert_eq!(
            colors,
            vec!["#E1BEE7", "#BBDEFB", "#FFF9C4", "#C8E6C9", "#FFCDD2", "#D1C4E9"]
        );
    }

    #[test]
    fn edge_labels_sit_at_midpoints() {
        let node = |id: &str, x: f64, y: f64| GraphNode {
            id: id.into(),
            category: NodeCategory::Bank,
            x,
            y,
        };
        let graph = GraphSpec {
            title: None,
            nodes: vec![node("Borrowers", 0.0, 5.0), node("Banks", 3.0, 4.0)],
            edges: vec![],
            legend: vec![],
        };
        let edge = GraphEdge {
            from: "Borrowers".into(),
            to: "Banks".into(),
            label: Some("Mortgages".into()),
        };
        assert_eq!(edge_midpoint(&graph, &edge), Some((1.5, 4.5)));

        let dangling = GraphEdge {
            from: "Borrowers".into(),
            to: "Nowhere".into(),
            label: None,
        };
        assert_eq!(edge_midpoint(&graph, &dangling), None);
    }
}
