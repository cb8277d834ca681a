//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for commands that do not own the terminal.
    Stderr,
    /// A log file, so interactive play keeps the terminal to itself.
    File(PathBuf),
}

/// Installs the subscriber for `target`.
pub fn init(target: &LogTarget, default_filter: &str) -> Result<()> {
    match target {
        LogTarget::Stderr => {
            init_stderr(default_filter);
            Ok(())
        }
        LogTarget::File(path) => init_file(path, default_filter),
    }
}

fn filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Logs to stderr. Used by the tooling commands.
pub fn init_stderr(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Logs to a file so interactive play keeps the screen.
pub fn init_file(path: &Path, default_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
