//! Shared buffer of captured log events

use jaxbify_core::LogLevel;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// One captured event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    /// Module path the event was emitted from
    pub target: String,
    /// The event's message, without its fields
    pub message: String,
    /// Structured fields in the order they were recorded
    pub fields: Vec<(String, String)>,
}

impl LogRecord {
    /// Value of a structured field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Message followed by `key=value` pairs, as a console formatter would print it
    pub fn rendered(&self) -> String {
        let mut out = self.message.clone();
        for (key, value) in &self.fields {
            out.push(' ');
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

/// Cloneable handle to a shared list of [`LogRecord`]s
///
/// Clones share the same buffer and level, so a test keeps one handle while
/// the layer owns another.
#[derive(Debug, Clone)]
pub struct LogSink {
    records: Arc<RwLock<Vec<LogRecord>>>,
    level: Arc<AtomicU8>,
}

impl LogSink {
    /// Create an empty sink capturing `Info` and above
    pub fn new() -> Self {
        Self::with_level(LogLevel::Info)
    }

    pub fn with_level(level: LogLevel) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            level: Arc::new(AtomicU8::new(level as u8)),
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Check if a log level is captured
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.level()
    }

    /// Append a record if its level is enabled
    pub fn push(&self, record: LogRecord) {
        if self.is_enabled(record.level) {
            self.records.write().push(record);
        }
    }

    /// Snapshot of everything captured so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.read().clone()
    }

    /// Messages of everything captured so far
    pub fn messages(&self) -> Vec<String> {
        self.records
            .read()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}
