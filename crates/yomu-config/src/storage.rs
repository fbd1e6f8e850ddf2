use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from(".yomu")
}

fn default_history_key() -> String {
    "history".to_string()
}

fn default_settings_key() -> String {
    "settings".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one JSON file per key
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_history_key")]
    pub history_key: String,
    #[serde(default = "default_settings_key")]
    pub settings_key: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("YOMU_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let history_key =
            env::var("YOMU_HISTORY_KEY").unwrap_or_else(|_| default_history_key());

        let settings_key =
            env::var("YOMU_SETTINGS_KEY").unwrap_or_else(|_| default_settings_key());

        Self {
            data_dir,
            history_key,
            settings_key,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            history_key: default_history_key(),
            settings_key: default_settings_key(),
        }
    }
}
