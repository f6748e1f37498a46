//! File-backed `tracing` setup.
//!
//! The TUI draws on stdout, so log lines go to a file or nowhere.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{AppError, Result};

/// Installs the global subscriber.
///
/// Returns `Ok(false)` when no log file is configured. `RUST_LOG`, when
/// set, takes precedence over `config.level`. The filter is parsed before
/// anything is created on disk.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };
    let filter = build_filter(&config.level)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| AppError::Logging {
            path: path.clone(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::Logging {
            path: path.clone(),
            source,
        })?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_timer(UtcTime::rfc_3339())
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %path.display(), "logging initialized");
    }
    Ok(installed)
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|err| AppError::LogFilter {
        directive: level.to_string(),
        message: err.to_string(),
    })
}
