// Tracing setup.
// - The terminal belongs to the UI, so events go to an append-only log file.
// - WEBTOOLS_LOG overrides the default `info` filter.
use std::{fs::OpenOptions, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

pub const LOG_ENV: &str = "WEBTOOLS_LOG";

pub fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
