//! File logging for PeoplePick
//!
//! The interactive picker owns the terminal, so diagnostics go to a log file instead of
//! stderr. Each run truncates the file and writes one line per entry:
//!
//! ```text
//! [2026-10-19 14:03:11.482] [INFO ] [DROPDOWN] Committed query 'an'
//! ```

use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::Person;

/// Global logger instance
static LOGGER: OnceLock<Mutex<PickLogger>> = OnceLock::new();

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `{:5}` padding only applies through `Formatter::pad`
        let label = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.pad(label)
    }
}

/// Main logger struct
pub struct PickLogger {
    sink: Option<Box<dyn Write + Send>>,
    min_level: LogLevel,
}

impl PickLogger {
    /// Create a logger writing to the given file (or the default path)
    fn new(path: Option<&Path>) -> Self {
        let log_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_log_path);
        let sink = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true) // Start fresh each run
            .open(&log_path)
            .ok()
            .map(|file| Box::new(file) as Box<dyn Write + Send>);

        if sink.is_some() {
            eprintln!("[PeoplePick] Logging to: {}", log_path.display());
        }

        Self {
            sink,
            min_level: LogLevel::Debug,
        }
    }

    /// Create a logger around an arbitrary writer
    pub fn with_writer(writer: Box<dyn Write + Send>, min_level: LogLevel) -> Self {
        Self {
            sink: Some(writer),
            min_level,
        }
    }

    /// Get the default log file path
    pub fn default_log_path() -> PathBuf {
        std::env::temp_dir().join("peoplepick.log")
    }

    /// Write a log entry
    pub fn log(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let entry = format!("[{}] [{:5}] [{}] {}\n", timestamp, level, module, message);

        if let Some(ref mut sink) = self.sink {
            let _ = sink.write_all(entry.as_bytes());
            let _ = sink.flush();
        }
    }
}

/// Initialize the global logger
pub fn init(path: Option<&Path>) {
    let _ = LOGGER.set(Mutex::new(PickLogger::new(path)));
}

fn log(level: LogLevel, module: &str, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.lock().log(level, module, message);
    }
}

/// Log debug message
pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

/// Log info message
pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

/// Log error message
pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

/// Log a debounced query reaching the host
pub fn log_query_commit(query: &str) {
    info("DROPDOWN", &format!("Committed query '{}'", query));
}

/// Log a pending query dropped at teardown
pub fn log_commit_cancelled(query: &str) {
    debug("DROPDOWN", &format!("Cancelled pending query '{}'", query));
}

/// Log a person picked from the suggestions
pub fn log_selection(person: &Person) {
    info(
        "DROPDOWN",
        &format!("Selected '{}' (slug={})", person.name, person.slug),
    );
}

/// Flush the log file
pub fn flush() {
    if let Some(logger) = LOGGER.get() {
        let mut logger = logger.lock();
        if let Some(ref mut sink) = logger.sink {
            let _ = sink.flush();
        }
    }
}

/// Write a separator line for readability
pub fn separator(label: &str) {
    let msg = format!("========== {} ==========", label);
    info("---", &msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Writer that keeps everything in a shared buffer
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    #[test]
    fn entries_below_min_level_are_skipped() {
        let captured = Captured::default();
        let mut logger = PickLogger::with_writer(Box::new(captured.clone()), LogLevel::Info);

        logger.log(LogLevel::Debug, "TEST", "hidden");
        logger.log(LogLevel::Warn, "TEST", "shown");

        let text = captured.text();
        assert!(!text.contains("hidden"));
        assert!(text.contains("[WARN ] [TEST] shown"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn level_labels_are_padded() {
        assert_eq!(format!("{:5}", LogLevel::Info), "INFO ");
        assert_eq!(format!("{:5}", LogLevel::Error), "ERROR");
    }
}
