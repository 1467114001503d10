use std::fmt;

use serde::{Deserialize, Serialize};

/// Final outcome of a finished quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    pub score: u32,
    pub total: u32,
}

impl SessionResult {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self { score, total }
    }
}

/// Persisted record of one completed session.
///
/// The serialized field names (`date`, `score`, `total`) are the storage format
/// of the history slot and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "date")]
    pub timestamp: String,
    pub score: u32,
    pub total: u32,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(timestamp: impl Into<String>, score: u32, total: u32) -> Self {
        Self {
            timestamp: timestamp.into(),
            score,
            total,
        }
    }

    /// Build an entry for a finished session stamped with `timestamp`.
    #[must_use]
    pub fn from_result(timestamp: impl Into<String>, result: SessionResult) -> Self {
        Self::new(timestamp, result.score, result.total)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} / {}", self.timestamp, self.score, self.total)
    }
}
