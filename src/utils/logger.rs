//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata};

/// Logger writing to a file and echoing to the console
pub struct Logger {
    file: Mutex<Option<File>>,
    level: Level,
}

impl Logger {
    /// Creates a logger writing to `log_file`, truncating it
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: Level::Debug,
        })
    }

    /// Highest level this logger records
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Writes one line to the log file
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Writes a titled block of `key: value` lines
    pub fn log_summary(&self, title: &str, entries: &[(&str, String)]) -> io::Result<()> {
        self.log(&format!("{}:", title))?;
        for (key, value) in entries {
            self.log(&format!("  {}: {}", key, value))?;
        }
        Ok(())
    }

    /// Installs a file logger as the global `log` backend
    pub fn init_global_logger(log_file: &str, level: Level) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?.with_level(level);

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level.to_level_filter());
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);
            println!("{}", message);
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_summary_written_to_file() {
        let path = std::env::temp_dir().join(format!("planekit-logger-{}.log", std::process::id()));
        let path_str = path.to_string_lossy().to_string();
        let logger = Logger::new(&path_str).unwrap();
        logger
            .log_summary("Tile", &[("plane", "4096x4096".to_string()), ("tile", "4096x512".to_string())])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Tile:\n  plane: 4096x4096\n  tile: 4096x512\n");
        let _ = fs::remove_file(&path);
    }
}
