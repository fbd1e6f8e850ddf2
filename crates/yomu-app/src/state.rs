use std::sync::Arc;

use tokio::sync::RwLock;
use yomu_config::Config;
use yomu_core::KeyValueStore;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Backing store for both the history and settings keys
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            store,
        }
    }
}
