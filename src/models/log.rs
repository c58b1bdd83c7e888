//! Activity log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of an activity log entry.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One human-readable record of something the pipeline did.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LogEntry {
    pub message: String,

    #[serde(rename = "type")]
    pub level: LogLevel,

    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            timestamp: Utc::now(),
        }
    }
}
