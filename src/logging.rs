//! File-based tracing. The terminal belongs to the operator console, so events
//! go to `logs/bible-projector.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "bible-projector.log";
const LOG_ENV: &str = "BIBLE_PROJECTOR_LOG";

/// Pick the filter: environment first, then the configured directive, then a
/// default that `verbose` raises to debug. A configured directive that does not
/// parse is an error so a typo in `config.toml` is not silently ignored.
pub fn build_filter(configured: Option<&str>, verbose: bool) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    match configured {
        Some(directive) => parse_directive(directive),
        None => Ok(default_filter(verbose)),
    }
}

pub fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("bible_projector=debug,info")
    } else {
        EnvFilter::new("bible_projector=info,warn")
    }
}

fn parse_directive(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log_filter directive `{directive}`"))
}

/// Install the global subscriber writing to a log file in `log_dir`. Returns
/// the path of the file.
pub fn init(log_dir: &Path, filter: EnvFilter) -> Result<PathBuf> {
    fs::create_dir_all(log_dir).context("failed to create log directory")?;
    let log_path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(path = %log_path.display(), "logging initialized");
    Ok(log_path)
}
