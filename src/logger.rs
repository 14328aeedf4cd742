//! Custom logging module.
//!
//! This module provides a logger implementation that captures log entries
//! and forwards them to the dashboard state for display in the log panel.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{mpsc, Arc, Mutex};

/// Callback receiving each formatted log line.
///
type LogCallback = Box<dyn Fn(String) + Send + Sync>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Custom logger that captures logs to state
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<LogCallback>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: LogCallback) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(callback) = self.log_callback.lock() {
            if let Some(ref cb) = *callback {
                cb(format_log(record));
            }
        }
    }

    fn flush(&self) {}
}

/// Install the logger globally, sending every line down the given channel.
///
pub fn init(level: LevelFilter, sender: mpsc::Sender<String>) -> AppResult<()> {
    let logger = CustomLogger::new(level);
    let sender = Mutex::new(sender);
    logger.set_log_callback(Box::new(move |line: String| {
        if let Ok(sender) = sender.lock() {
            // Receiver gone means the UI has shut down
            let _ = sender.send(line);
        }
    }));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
