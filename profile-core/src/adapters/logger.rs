//! Logger implementations
//!
//! - [`TracingLogger`] forwards to the `tracing` macros; the binary decides
//!   where those end up by installing a subscriber.
//! - [`MemoryLogger`] keeps timestamped lines in memory so callers can show
//!   or assert on them.

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::Logger;

/// Logger backed by `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "profile", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "profile", "{}", message);
    }
}

/// Severity of a captured line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }
}

/// A captured log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S,%3f"),
            self.level.as_str(),
            self.message
        )
    }
}

/// Logger that keeps every line in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<LogLine>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        self.guard().clone()
    }

    /// Messages logged at info level
    pub fn infos(&self) -> Vec<String> {
        self.messages(LogLevel::Info)
    }

    /// Messages logged at error level
    pub fn errors(&self) -> Vec<String> {
        self.messages(LogLevel::Error)
    }

    fn messages(&self, level: LogLevel) -> Vec<String> {
        self.guard()
            .iter()
            .filter(|l| l.level == level)
            .map(|l| l.message.clone())
            .collect()
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.guard().push(LogLine {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
        });
    }

    // A poisoned lock still holds valid lines; logging must not panic
    fn guard(&self) -> MutexGuard<'_, Vec<LogLine>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}
