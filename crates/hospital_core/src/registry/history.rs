//! Append-only action log.
//!
//! # Invariants
//! - Entries are never edited or removed once appended.
//! - Entries are kept in append order; the log is unbounded.

use chrono::NaiveDateTime;

/// Timestamp format used when rendering log entries.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder returned when nothing has been logged yet.
pub const EMPTY_HISTORY_PLACEHOLDER: &str = "No actions performed";

/// One recorded registry action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEntry {
    recorded_at: NaiveDateTime,
    message: String,
}

impl ActionEntry {
    pub fn recorded_at(&self) -> NaiveDateTime {
        self.recorded_at
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders as `[YYYY-MM-DD HH:MM:SS] message`.
    pub fn render(&self) -> String {
        format!(
            "[{}] {}",
            self.recorded_at.format(LOG_TIMESTAMP_FORMAT),
            self.message
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: Vec<ActionEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, recorded_at: NaiveDateTime, message: impl Into<String>) {
        self.entries.push(ActionEntry {
            recorded_at,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[ActionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders every entry oldest first, or the placeholder when empty.
    pub fn render(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![EMPTY_HISTORY_PLACEHOLDER.to_string()];
        }
        self.entries.iter().map(ActionEntry::render).collect()
    }
}
