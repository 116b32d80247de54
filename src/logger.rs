//! Logging setup.
//!
//! [`init_logging`] installs a `fern` dispatch behind the `log` facade. Records always
//! go to an in-memory [`Logger`] (for a UI debug panel) and, when logging is enabled in
//! the configuration, to a log file as well.

use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME, MAX_LOG_ENTRIES};

/// Shared in-memory log buffer that can be used across the application.
///
/// Holds at most `capacity` entries; the oldest are dropped first.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            while logs.len() >= self.capacity {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Path of the log file written when logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the dispatch for `config`, feeding `logger`.
///
/// Split from [`init_logging`] so the dispatch can be inspected without installing it.
pub fn build_dispatch(config: &LoggingConfig, logger: Logger) -> Result<fern::Dispatch> {
    let level = config
        .level_filter()
        .ok_or_else(|| anyhow::anyhow!("Invalid log level '{}'", config.level))?;

    let mut dispatch = fern::Dispatch::new()
        .level(log::LevelFilter::Warn)
        .level_for("todosync", level)
        .chain(fern::Output::call(move |record| {
            logger.log(format!("{} {} {}", record.level(), record.target(), record.args()));
        }));

    if config.enabled {
        let path = Logger::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        );
    }

    Ok(dispatch)
}

/// Install the global logger. Fails if a logger was already installed.
pub fn init_logging(config: &LoggingConfig, logger: Logger) -> Result<()> {
    build_dispatch(config, logger)?
        .apply()
        .context("Failed to install logger")?;
    log::debug!("logger initialized level={}", config.level);
    Ok(())
}
