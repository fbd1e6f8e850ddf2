use std::env;

use serde::{Deserialize, Serialize};

use self::storage::StorageConfig;

pub mod settings;
pub mod storage;

pub use settings::{SettingToggle, Settings};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,

    /// Capacity of the request queue between the UI and the lookup service
    pub channel_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let channel_capacity = env::var("YOMU_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v: &usize| *v > 0)
            .unwrap_or(64);

        Config {
            storage: StorageConfig::new(),
            channel_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
