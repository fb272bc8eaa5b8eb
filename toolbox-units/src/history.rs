//! Bounded conversion history, newest first

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of history entries retained.
pub const HISTORY_CAP: usize = 50;

/// One performed conversion.
///
/// `value` keeps the raw input text so both numeric and clock-formatted
/// inputs round-trip through persistence unchanged. The serialized field
/// names match the layout the original surface persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub value: String,
    pub from_unit: String,
    pub to_unit: String,
    /// Category display name, not identifier.
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered list of conversions, capped at [`HISTORY_CAP`] entries.
///
/// Entries are never individually mutated or deleted; insertion evicts the
/// oldest entry once the cap is exceeded.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted entries (newest first), re-applying the cap.
    pub fn load(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_CAP);
        History { entries }
    }

    /// Prepend an entry, evicting the oldest past the cap.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
