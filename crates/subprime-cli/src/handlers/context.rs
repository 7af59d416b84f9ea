use anyhow::{Result, anyhow};
use is_terminal::IsTerminal;
use serde::Serialize;
use std::path::PathBuf;
use subprime_content::ContentTables;
use subprime_engine::{NavigationState, parse_page};
use subprime_types::Locale;

use crate::args::Cli;
use crate::config::Config;
use crate::presentation::view_models::{CommandResultViewModel, ConsoleStyle, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

const MIN_WIDTH: usize = 40;
const MAX_WIDTH: usize = 120;

/// Settings shared by every handler, merged from flags and the config file
pub struct HandlerContext {
    pub format: OutputFormat,
    pub locale: Locale,
    /// External content document; flags win over the config file
    pub content_path: Option<PathBuf>,
    pub start_page: Option<String>,
}

impl HandlerContext {
    pub fn new(cli: &Cli, config: &Config) -> Self {
        Self {
            format: cli.format,
            locale: cli
                .lang
                .map(Locale::from)
                .or(config.locale)
                .unwrap_or_default(),
            content_path: cli.content.clone().or_else(|| config.content.clone()),
            start_page: config.start_page.clone(),
        }
    }

    /// Content tables for the session: the external document if one is
    /// configured, the embedded one of the chosen locale otherwise
    pub fn tables(&self) -> Result<ContentTables> {
        match &self.content_path {
            Some(path) => {
                let tables = ContentTables::from_path(path)
                    .map_err(|err| anyhow!("{}: {}", path.display(), err))?;
                tracing::debug!(
                    path = %path.display(),
                    locale = %tables.locale(),
                    "external content loaded"
                );
                Ok(tables)
            }
            None => Ok(ContentTables::embedded(self.locale)?),
        }
    }

    /// Navigation state at the configured start page
    pub fn start_state(&self, tables: &ContentTables) -> Result<NavigationState> {
        match &self.start_page {
            Some(label) => Ok(NavigationState::at(parse_page(tables.labels(), label)?)),
            None => Ok(NavigationState::new()),
        }
    }

    pub fn console_style(&self) -> ConsoleStyle {
        let stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return ConsoleStyle::default();
        }

        let width = crossterm::terminal::size()
            .map(|(w, _)| usize::from(w))
            .unwrap_or(ConsoleStyle::default().width);
        ConsoleStyle {
            color: std::env::var_os("NO_COLOR").is_none(),
            width: width.clamp(MIN_WIDTH, MAX_WIDTH),
        }
    }

    /// Render a view model in the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let json_mode = self.format == OutputFormat::Json;
        ConsoleRenderer::new(json_mode, self.console_style()).render(view_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use subprime_types::Page;

    fn context(args: &[&str], config: Config) -> HandlerContext {
        let cli = Cli::try_parse_from(args).unwrap();
        HandlerContext::new(&cli, &config)
    }

    #[test]
    fn test_flag_language_beats_config() {
        let config = Config {
            locale: Some(Locale::Pt),
            ..Config::default()
        };
        assert_eq!(context(&["subprime", "pages"], config.clone()).locale, Locale::Pt);
        assert_eq!(
            context(&["subprime", "--lang", "en", "pages"], config).locale,
            Locale::En
        );
        assert_eq!(context(&["subprime"], Config::default()).locale, Locale::En);
    }

    #[test]
    fn test_start_page_accepts_labels_and_slugs() {
        let ctx = context(
            &["subprime"],
            Config {
                start_page: Some("Linha do Tempo".into()),
                locale: Some(Locale::Pt),
                ..Config::default()
            },
        );
        let tables = ctx.tables().unwrap();
        assert_eq!(ctx.start_state(&tables).unwrap().page(), Page::Timeline);

        let ctx = context(
            &["subprime"],
            Config {
                start_page: Some("securitization".into()),
                ..Config::default()
            },
        );
        let tables = ctx.tables().unwrap();
        assert_eq!(ctx.start_state(&tables).unwrap().page(), Page::Securitization);
    }

    #[test]
    fn test_unknown_start_page_is_rejected() {
        let ctx = context(
            &["subprime"],
            Config {
                start_page: Some("Nonexistent".into()),
                ..Config::default()
            },
        );
        let tables = ctx.tables().unwrap();
        let err = ctx.start_state(&tables).unwrap_err();
        assert!(err.to_string().starts_with("Invalid selection"));
    }
}
