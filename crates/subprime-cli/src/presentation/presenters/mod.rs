//! Presenters turn resolved content into view models.
//!
//! They never print; renderers decide between text, JSON and the TUI.

pub mod content;
pub mod page;
pub mod pages;

pub use content::present_content_check;
pub use page::{present_page, sub_view_hints};
pub use pages::present_pages;
