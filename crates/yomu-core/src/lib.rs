pub mod dictionary;
pub mod error;
pub mod history;
pub mod language;
pub mod settings;
pub mod storage;
pub mod types;

pub use error::{LookupError, StorageError};
pub use history::{HistoryStore, MAX_HISTORY_ENTRIES};
pub use settings::SettingsStore;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
