use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use crate::config;
use crate::display::DisplayLog;
use crate::reader;

/// Where `show` reads the log from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    /// Path resolved from env and config files
    Resolved,
    File(PathBuf),
    Stdin,
}

pub fn run(source: LogSource, bytes: Option<usize>, full: bool) -> Result<()> {
    let max_bytes = if full {
        None
    } else {
        Some(bytes.unwrap_or_else(config::get_tail_bytes))
    };

    let raw = match source {
        LogSource::Stdin => reader::read_log_from(std::io::stdin().lock(), max_bytes)?,
        LogSource::File(path) => reader::read_log(&path, max_bytes)?,
        LogSource::Resolved => {
            let path = config::get_log_path().context("Failed to resolve log path")?;
            reader::read_log(&path, max_bytes)?
        }
    };

    let log = DisplayLog::build(Some(&raw));
    debug!(
        total = log.total_lines(),
        omitted = log.omitted_lines(),
        truncated = log.is_truncated(),
        "formatted log"
    );

    if log.is_empty() {
        eprintln!("{}", "(log is empty)".bright_black());
        return Ok(());
    }

    println!("{}", log);
    Ok(())
}
