mod context;

pub mod content;
pub mod pages;
pub mod show;
pub mod tui;

pub use context::HandlerContext;
