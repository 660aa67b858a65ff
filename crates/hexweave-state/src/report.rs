//! Update reporting
//!
//! State-machine operations never talk to the outside world directly;
//! they collect narrative notifications and log lines into an
//! [`UpdateResult`] that the driving layer dispatches. Emission can never
//! fail or reorder a transition.

use serde::{Deserialize, Serialize};

/// Severity for collected log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

/// A narrative message for the room.
///
/// Messages use the host's template form: `%NAME%` expands to the
/// target's name at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
}

impl Notification {
    /// Create a notification
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Collected outputs of one state-machine operation
#[derive(Debug, Clone, Default)]
pub struct UpdateResult {
    /// Narrative messages to announce
    pub notifications: Vec<Notification>,
    /// Log lines for the host's console
    pub logs: Vec<(LogLevel, String)>,
}

impl UpdateResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a narrative notification
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::new(message));
    }

    /// Queue a log line
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.logs.push((level, message.into()));
    }

    /// Queue a warning log line
    pub fn warn(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    /// Fold another result into this one, preserving order
    pub fn merge(&mut self, other: UpdateResult) {
        self.notifications.extend(other.notifications);
        self.logs.extend(other.logs);
    }
}
