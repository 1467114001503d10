//! Append-only score history kept in a single durable slot.

use std::sync::Arc;

use quiz_core::model::HistoryEntry;
use tracing::{debug, warn};

use crate::repository::{SlotRepository, StorageError};

/// Name of the slot holding the serialized history.
pub const HISTORY_SLOT: &str = "scoreHistory";

/// Ordered log of finished sessions, oldest first.
///
/// The slot holds a JSON array of `{date, score, total}` objects. Entries are
/// only ever appended. Absent or unreadable data reads as an empty history,
/// but an append never writes over a slot it could not read.
#[derive(Clone)]
pub struct HistoryStore {
    slots: Arc<dyn SlotRepository>,
    key: String,
}

impl HistoryStore {
    #[must_use]
    pub fn new(slots: Arc<dyn SlotRepository>) -> Self {
        Self::with_key(slots, HISTORY_SLOT)
    }

    /// Use a slot other than [`HISTORY_SLOT`].
    #[must_use]
    pub fn with_key(slots: Arc<dyn SlotRepository>, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load every entry in insertion order.
    ///
    /// Never fails: read errors and corrupt data are logged and treated as
    /// "no history".
    pub async fn load_all(&self) -> Vec<HistoryEntry> {
        match self.slots.read_slot(&self.key).await {
            Ok(Some(raw)) => decode(&self.key, &raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(slot = %self.key, error = %err, "history slot unreadable");
                Vec::new()
            }
        }
    }

    /// Append `entry` to the end of the history.
    ///
    /// Corrupt existing data is replaced by a history containing only `entry`.
    /// A failed read aborts without writing, so earlier entries survive.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the slot cannot be read or written, or
    /// `StorageError::Serialization` if the history cannot be encoded.
    pub async fn append(&self, entry: HistoryEntry) -> Result<(), StorageError> {
        let mut entries = match self.slots.read_slot(&self.key).await? {
            Some(raw) => decode(&self.key, &raw),
            None => Vec::new(),
        };
        entries.push(entry);

        let raw = serde_json::to_string(&entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.slots.write_slot(&self.key, &raw).await?;

        debug!(slot = %self.key, len = entries.len(), "history entry appended");
        Ok(())
    }
}

fn decode(key: &str, raw: &str) -> Vec<HistoryEntry> {
    // A JSON `null` is what an unset browser slot serializes to; treat it as empty.
    match serde_json::from_str::<Option<Vec<HistoryEntry>>>(raw) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(err) => {
            warn!(slot = %key, error = %err, "history slot is corrupt, ignoring it");
            Vec::new()
        }
    }
}
