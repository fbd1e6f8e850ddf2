use yomu_config::{SettingToggle, Settings};
use yomu_core::SettingsStore;

pub fn handle_get_settings(store: &SettingsStore) -> Settings {
    store.current()
}

pub async fn handle_save_settings(store: &mut SettingsStore, settings: Settings) -> Settings {
    store.save(settings).await;
    store.current()
}

pub async fn handle_toggle_setting(store: &mut SettingsStore, toggle: SettingToggle) -> Settings {
    let settings = store.toggle(toggle).await;
    tracing::info!("{} is now {}", toggle.as_str(), settings.get(toggle));
    settings
}
