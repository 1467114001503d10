use quiz_core::model::{HistoryEntry, SessionResult};
use quiz_core::time::format_local_timestamp;
use storage::HistoryStore;
use storage::repository::StorageError;

use crate::Clock;

/// Stamps finished sessions and records them in the history store.
#[derive(Clone)]
pub struct HistoryService {
    clock: Clock,
    store: HistoryStore,
    format: fn(chrono::DateTime<chrono::Utc>) -> String,
}

impl HistoryService {
    #[must_use]
    pub fn new(clock: Clock, store: HistoryStore) -> Self {
        Self {
            clock,
            store,
            format: format_local_timestamp,
        }
    }

    /// Override how timestamps are rendered (tests pin this to UTC).
    #[must_use]
    pub fn with_formatter(mut self, format: fn(chrono::DateTime<chrono::Utc>) -> String) -> Self {
        self.format = format;
        self
    }

    /// Append `result` stamped with the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the history cannot be written.
    pub async fn record(&self, result: SessionResult) -> Result<HistoryEntry, StorageError> {
        let entry = HistoryEntry::from_result((self.format)(self.clock.now()), result);
        self.store.append(entry.clone()).await?;
        Ok(entry)
    }

    /// All recorded sessions, oldest first.
    pub async fn list(&self) -> Vec<HistoryEntry> {
        self.store.load_all().await
    }
}
