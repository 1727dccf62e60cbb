//! Tracing subscriber setup.
//!
//! The interactive view owns the screen, so it logs to a file in the data
//! directory. One-shot commands log to stderr.

use crate::types::LogLevel;
use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.to_string())
}

/// `RUST_LOG` wins over `--log-level` when set.
fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level))
}

pub fn build_file_subscriber(
    log_file: File,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
}

/// Returns false when the log file could not be opened; the caller carries on
/// without logging.
pub fn init_file(log_file_path: &Path, level: LogLevel) -> bool {
    if let Some(parent) = log_file_path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return false;
    }

    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };

    build_file_subscriber(log_file, env_filter(level)).try_init().is_ok()
}

pub fn init_stderr(level: LogLevel) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(level))
        .try_init();
}
