//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities. Console echo
//! goes to stderr so stdout only carries the comparison result.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter, warn};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Echo records to stderr
    echo: bool,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            echo: false,
        })
    }

    /// Opens an existing or new log file without truncating it
    ///
    /// Lets a second logger share the file of the global logger.
    pub fn append_to<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            echo: false,
        })
    }

    /// Logger that discards direct messages
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            echo: false,
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = &mut *guard {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs a message, reporting a failed write as a warning
    pub fn note(&self, message: &str) {
        if let Err(e) = self.log(message) {
            warn!("Could not write log note: {}", e);
        }
    }

    /// Static method to initialize the global logger
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path of the file receiving `log` records
    /// * `verbose` - Also echo records to stderr
    pub fn init_global_logger(log_file: &str, verbose: bool) -> io::Result<()> {
        // Truncate once, then append so step notes sharing the file interleave
        File::create(log_file)?;
        let mut global_logger = Logger::append_to(log_file)?;
        global_logger.echo = verbose;

        // Only called once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            if self.echo {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
