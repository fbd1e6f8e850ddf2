use std::sync::Arc;

use uuid::Uuid;
use yomu_types::{HistoryEntry, LookupResult};

use crate::storage::KeyValueStore;

/// Most lookups kept; older ones are evicted first
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Bounded, most-recent-first log of past lookups.
///
/// The in-memory sequence is authoritative. Every mutation rewrites the whole
/// sequence under `key`; a failed write is logged and otherwise ignored.
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Empty history that has not read persisted state
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            entries: Vec::new(),
        }
    }

    /// Read persisted history, falling back to empty on any failure
    pub async fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let mut history = Self::new(store, key);

        match history.store.get(&history.key).await {
            Ok(Some(value)) => match serde_json::from_value::<Vec<HistoryEntry>>(value) {
                Ok(mut entries) => {
                    entries.truncate(MAX_HISTORY_ENTRIES);
                    tracing::info!("Loaded {} history entries", entries.len());
                    history.entries = entries;
                }
                Err(e) => {
                    tracing::warn!("Discarding malformed history '{}': {}", history.key, e);
                }
            },
            Ok(None) => {
                tracing::debug!("No persisted history under '{}'", history.key);
            }
            Err(e) => {
                tracing::warn!("Failed to read history '{}': {}", history.key, e);
            }
        }

        history
    }

    /// Prepend a lookup, evict beyond the cap, and persist
    pub async fn record(&mut self, result: LookupResult) -> HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::now_v7(),
            result,
        };

        self.entries.insert(0, entry.clone());
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        self.persist().await;

        entry
    }

    /// Entries, most recent first
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub async fn clear(&mut self) {
        self.entries.clear();
        self.persist().await;
    }

    async fn persist(&self) {
        let value = match serde_json::to_value(&self.entries) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to serialize history: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, value).await {
            tracing::warn!("Failed to persist history '{}': {}", self.key, e);
        }
    }
}
