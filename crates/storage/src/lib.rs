#![forbid(unsafe_code)]

pub mod history;
pub mod repository;
pub mod sqlite;

pub use history::{HISTORY_SLOT, HistoryStore};
pub use repository::{InMemoryRepository, SlotRepository, Storage, StorageError};
