use tokio::sync::oneshot;
use yomu_config::{SettingToggle, Settings};
use yomu_types::{HistoryEntry, LookupRequest, LookupResult};

/// Sender half for the single response to a request
pub type Reply<T> = oneshot::Sender<T>;

/// Requests accepted by the lookup service
#[derive(Debug)]
pub enum AppEvent {
    Lookup {
        request: LookupRequest,
        reply: Reply<LookupResult>,
    },
    ListHistory {
        reply: Reply<Vec<HistoryEntry>>,
    },
    ClearHistory {
        reply: Reply<()>,
    },
    GetSettings {
        reply: Reply<Settings>,
    },
    SaveSettings {
        settings: Settings,
        reply: Reply<Settings>,
    },
    ToggleSetting {
        toggle: SettingToggle,
        reply: Reply<Settings>,
    },
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::Lookup { .. } => "lookup",
            AppEvent::ListHistory { .. } => "list_history",
            AppEvent::ClearHistory { .. } => "clear_history",
            AppEvent::GetSettings { .. } => "get_settings",
            AppEvent::SaveSettings { .. } => "save_settings",
            AppEvent::ToggleSetting { .. } => "toggle_setting",
        }
    }
}
