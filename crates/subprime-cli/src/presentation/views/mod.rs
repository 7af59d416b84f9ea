// Views bridge view models and the final output: console text through
// `CreateView`, ratatui widgets under `tui`.

pub mod content;
pub mod layout;
pub mod page;
pub mod pages;
mod paint;
pub mod tui;

pub use page::PageView;
