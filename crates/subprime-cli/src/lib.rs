// NOTE: subprime layering
//
// types    closed key space (pages, sub-options) and the content schema
// content  localized TOML documents, loaded and checked for totality
// engine   navigation state, resolution of (page, sub) to an entry, colour rules
// cli      this crate: argument parsing, config, logging and the two front ends
//
// Both front ends (interactive TUI and one-shot console output) go through the
// same presenter, so a page looks the same whether it is browsed or printed.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ContentCommand};
pub use commands::run;
