//! File logger for debugging sessions.
//!
//! Parser traces and search summaries go through the `log` facade; this
//! installs a minimal logger that appends them to a file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, Metadata, Record};

use crate::error::LogInitError;

struct FileLogger {
    file: Mutex<File>,
    level: Level,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = self.file.lock() {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Appends `Debug` and more severe records to `path`.
pub fn init_logger(path: impl AsRef<Path>) -> Result<(), LogInitError> {
    init_logger_with_level(path, Level::Debug)
}

/// Appends records at `level` and more severe to `path`.
///
/// Fails if the file cannot be opened or a logger is already installed.
pub fn init_logger_with_level(path: impl AsRef<Path>, level: Level) -> Result<(), LogInitError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let logger = FileLogger {
        file: Mutex::new(file),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
