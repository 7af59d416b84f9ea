use anyhow::Result;
use is_terminal::IsTerminal;

use super::args::{Cli, Commands, ContentCommand};
use super::handlers::{self, HandlerContext};
use crate::config::Config;
use crate::logging::{self, LogSink};

pub fn run(cli: Cli) -> Result<()> {
    // The dashboard owns the terminal, so its logs may only go to a file
    let interactive =
        matches!(cli.command, None | Some(Commands::Tui)) && std::io::stdout().is_terminal();
    let sink = if interactive {
        LogSink::FileOnly
    } else {
        LogSink::Stderr
    };
    logging::init_tracing(cli.log_level, sink)?;

    let config = Config::load(cli.config.as_deref())?;
    let ctx = HandlerContext::new(&cli, &config);
    tracing::debug!(locale = %ctx.locale, format = %ctx.format, "starting");

    match cli.command {
        None | Some(Commands::Tui) => handlers::tui::handle(&ctx),

        Some(Commands::Show { page, sub }) => handlers::show::handle(&ctx, page, sub),

        Some(Commands::Pages) => handlers::pages::handle(&ctx),

        Some(Commands::Content { command }) => match command {
            ContentCommand::Check { file } => handlers::content::check(&ctx, &file),
            ContentCommand::Dump => handlers::content::dump(&ctx),
        },
    }
}
