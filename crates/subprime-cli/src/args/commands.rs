use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse the dashboard interactively (default)")]
    Tui,

    #[command(about = "Print one page, optionally with a sub-view")]
    Show {
        /// Page label or slug (default: the configured start page)
        page: Option<String>,

        /// Period, metric, region or topic of the page
        #[arg(long)]
        sub: Option<String>,
    },

    #[command(about = "List pages and their sub-options")]
    Pages,

    #[command(about = "Validate or export content documents")]
    Content {
        #[command(subcommand)]
        command: ContentCommand,
    },
}

#[derive(Subcommand)]
pub enum ContentCommand {
    #[command(about = "Check a content document for completeness")]
    Check {
        /// TOML content document
        file: PathBuf,
    },

    #[command(about = "Print the embedded content document of the current language")]
    Dump,
}
