use std::sync::Arc;

use yomu_config::{SettingToggle, Settings};

use crate::storage::KeyValueStore;

/// Persisted user settings with an in-memory copy that wins on failure
pub struct SettingsStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    current: Settings,
}

impl SettingsStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            current: Settings::default(),
        }
    }

    /// Defaults overlaid with whatever keys were persisted
    pub async fn load(&mut self) -> Settings {
        match self.store.get(&self.key).await {
            Ok(Some(value)) => match serde_json::from_value::<Settings>(value) {
                Ok(settings) => self.current = settings,
                Err(e) => {
                    tracing::warn!("Ignoring malformed settings '{}': {}", self.key, e);
                    self.current = Settings::default();
                }
            },
            Ok(None) => {
                tracing::debug!("No persisted settings, using defaults");
                self.current = Settings::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read settings '{}': {}", self.key, e);
            }
        }

        self.current
    }

    pub fn current(&self) -> Settings {
        self.current
    }

    /// Replace the settings wholesale and persist them
    pub async fn save(&mut self, settings: Settings) {
        self.current = settings;

        let value = match serde_json::to_value(settings) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to serialize settings: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, value).await {
            tracing::warn!("Failed to persist settings '{}': {}", self.key, e);
        }
    }

    /// Flip one switch and save
    pub async fn toggle(&mut self, toggle: SettingToggle) -> Settings {
        let mut settings = self.current;
        settings.set(toggle, !settings.get(toggle));
        tracing::debug!("{} -> {}", toggle.as_str(), settings.get(toggle));
        self.save(settings).await;
        self.current
    }
}
