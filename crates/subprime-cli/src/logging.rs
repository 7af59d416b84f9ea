use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

pub const LOG_ENV: &str = "SUBPRIME_LOG";
pub const LOG_FILE_ENV: &str = "SUBPRIME_LOG_FILE";

/// Where log output may go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    /// The terminal belongs to the TUI; logs go to $SUBPRIME_LOG_FILE or nowhere
    FileOnly,
}

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

pub fn init_tracing(level: LogLevel, sink: LogSink) -> Result<()> {
    let filter = env_filter(level);

    match sink {
        LogSink::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}")),
        LogSink::FileOnly => {
            let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
                return Ok(());
            };
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| {
                    format!("failed to open log file {}", path.to_string_lossy())
                })?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|error| {
                    anyhow::anyhow!("failed to initialize tracing subscriber: {error}")
                })
        }
    }
}
