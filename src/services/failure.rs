//! Scripted node-failure narrative.
//!
//! This only writes to the activity log. No catalog state changes and no
//! fault is actually injected.

use super::activity_log::ActivityLog;
use crate::models::log::LogLevel;

const NARRATIVE: [(LogLevel, &str); 5] = [
    (LogLevel::Error, "ALERT: Primary node failure detected!"),
    (LogLevel::Warning, "Initiating failover to replica nodes..."),
    (LogLevel::Info, "Data recovery in progress..."),
    (LogLevel::Success, "All data recovered from replica nodes"),
    (LogLevel::Success, "System operational - Zero data loss!"),
];

pub fn simulate_failure(log: &mut ActivityLog) {
    for (level, message) in NARRATIVE {
        log.push(level, message);
    }
}
