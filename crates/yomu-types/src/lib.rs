pub mod types;

pub use types::{Category, CharacterRecord, HistoryEntry, LookupRequest, LookupResult};
