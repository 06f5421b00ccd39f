//! In-app diagnostic channel: a list of timestamped entries shown on the
//! history screen. Every entry is also emitted through `tracing`.

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Oldest entries are dropped past this many.
pub const MAX_ENTRIES: usize = 200;

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info | LogLevel::Success => tracing::info!("{message}"),
            LogLevel::Warning => tracing::warn!("{message}"),
            LogLevel::Error => tracing::error!("{message}"),
        }
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(level, message);
}

/// `HH:MM:SS` in UTC.
fn current_time() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (h, m, s) = ((secs / 3600) % 24, (secs / 60) % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_records_entry() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Info, "Profile loaded");
        log.push(LogLevel::Error, "Could not save profile");

        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[0].message, "Profile loaded");
        assert_eq!(log.entries[1].level, LogLevel::Error);
    }

    #[test]
    fn test_push_keeps_newest_entries() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.push(LogLevel::Info, &format!("entry {i}"));
        }

        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message, "entry 5");
        assert_eq!(
            log.entries.last().map(|e| e.message.as_str()),
            Some(format!("entry {}", MAX_ENTRIES + 4).as_str())
        );
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = current_time();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.as_bytes()[2], b':');
        assert_eq!(ts.as_bytes()[5], b':');
    }
}
