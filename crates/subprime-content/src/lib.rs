//! Content tables for the dashboard.
//!
//! Content is data: each locale is one TOML document embedded in the binary.
//! A document of the same schema may also be loaded from disk. Every
//! document is validated for totality over the closed navigation key space
//! before a [`ContentTables`] is handed out, so lookups downstream cannot
//! miss.

mod embedded;
pub mod error;
mod tables;
pub mod validate;

pub use embedded::embedded_source;
pub use error::{Error, Result};
pub use tables::ContentTables;
