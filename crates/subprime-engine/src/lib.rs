// Engine - navigation model and content lookup
// Sits between the content tables and the CLI presentation layer

pub mod navigation;
pub mod resolver;
pub mod styling;

pub use navigation::{NavigationState, parse_page, parse_sub};
pub use resolver::{resolve, resolve_state};
pub use styling::{edge_midpoint, node_color, row_color, DEFAULT_ROW_PALETTE};
