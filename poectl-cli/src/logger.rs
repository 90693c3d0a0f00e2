//! Logging abstraction for testable output.
//!
//! Trait-based so command tests can capture log lines deterministically
//! instead of depending on global state. Progress chatter goes through the
//! logger to stderr; command results go through `output` to stdout.

use std::sync::Mutex;

/// Verbosity level for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Normal output (always shown)
    Normal,
    /// Verbose output (-v flag)
    Verbose,
    /// Debug output (-vv flag)
    Debug,
}

impl Verbosity {
    /// Create verbosity from CLI flag count.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Trait for logging output.
pub trait Logger: Send + Sync {
    /// Log a message at the given verbosity level.
    fn log(&self, level: Verbosity, message: &str);

    /// Log at normal level (always visible).
    fn info(&self, message: &str) {
        self.log(Verbosity::Normal, message);
    }

    /// Log at verbose level (requires -v).
    fn verbose(&self, message: &str) {
        self.log(Verbosity::Verbose, message);
    }

    /// Log at debug level (requires -vv).
    fn debug(&self, message: &str) {
        self.log(Verbosity::Debug, message);
    }
}

/// Logger that writes to stderr.
#[derive(Debug)]
pub struct StderrLogger {
    level: Verbosity,
}

impl StderrLogger {
    /// Create a new stderr logger with the given verbosity level.
    pub fn new(level: Verbosity) -> Self {
        Self { level }
    }
}

impl Logger for StderrLogger {
    fn log(&self, level: Verbosity, message: &str) {
        if level <= self.level {
            eprintln!("{}", message);
        }
    }
}

/// Logger that captures messages for assertions in tests.
#[derive(Debug, Default)]
pub struct CaptureLogger {
    messages: Mutex<Vec<(Verbosity, String)>>,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured messages, in order.
    pub fn messages(&self) -> Vec<(Verbosity, String)> {
        self.messages.lock().expect("capture logger lock").clone()
    }
}

impl Logger for CaptureLogger {
    fn log(&self, level: Verbosity, message: &str) {
        self.messages
            .lock()
            .expect("capture logger lock")
            .push((level, message.to_string()));
    }
}
