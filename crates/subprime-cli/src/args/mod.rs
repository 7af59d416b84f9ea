mod commands;

pub use commands::*;

use clap::Parser;
use std::path::PathBuf;

use crate::types::{Lang, LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "subprime")]
#[command(about = "Explore the 2008 subprime crisis from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Interface language (overrides the config file)
    #[arg(long, global = true)]
    pub lang: Option<Lang>,

    /// External content document to use instead of the embedded one
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    /// Config file (default: $SUBPRIME_CONFIG or <config dir>/subprime/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
