//! Operator-facing log capability
//!
//! The gateway reports every success and failure through this interface
//! instead of a process-wide logger, so tests can substitute a capturing
//! sink without touching global subscriber state.

use std::sync::Mutex;

/// Capability for emitting operator-facing log lines
pub trait OpsLog: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default log implementation forwarding to the `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl OpsLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// In-memory capturing sink for tests
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<(Level, String)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines in emission order
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().expect("log mutex poisoned").clone()
    }

    /// Whether any captured line at the given level contains `needle`
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.lines()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    fn push(&self, level: Level, message: &str) {
        self.lines
            .lock()
            .expect("log mutex poisoned")
            .push((level, message.to_string()));
    }
}

impl OpsLog for MemoryLog {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_log_captures_in_order() {
        let log = MemoryLog::new();
        log.info("first");
        log.warn("second");
        log.error("third");

        let lines = log.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], (Level::Info, "first".to_string()));
        assert_eq!(lines[1], (Level::Warn, "second".to_string()));
        assert_eq!(lines[2], (Level::Error, "third".to_string()));
    }

    #[test]
    fn test_memory_log_contains() {
        let log = MemoryLog::new();
        log.error("Authentication failed: no credentials");

        assert!(log.contains(Level::Error, "Authentication failed"));
        assert!(!log.contains(Level::Warn, "Authentication failed"));
    }
}
