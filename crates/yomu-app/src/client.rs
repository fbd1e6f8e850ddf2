use kanal::AsyncSender;
use tokio::sync::oneshot;
use yomu_config::{SettingToggle, Settings};
use yomu_core::LookupError;
use yomu_core::types::{AppEvent, Reply};
use yomu_types::{HistoryEntry, LookupRequest, LookupResult};

/// Request/response handle onto the event loop.
///
/// Each call sends one event and awaits its single reply. Nothing is retried.
#[derive(Clone)]
pub struct LookupClient {
    tx: AsyncSender<AppEvent>,
}

impl LookupClient {
    pub fn new(tx: AsyncSender<AppEvent>) -> Self {
        Self { tx }
    }

    async fn request<T>(
        &self,
        make_event: impl FnOnce(Reply<T>) -> AppEvent,
    ) -> Result<T, LookupError> {
        let (reply, response) = oneshot::channel();

        self.tx
            .send(make_event(reply))
            .await
            .map_err(|_| LookupError::Disconnected)?;

        response.await.map_err(|_| LookupError::NoResponse)
    }

    pub async fn lookup(&self, text: impl Into<String>) -> Result<LookupResult, LookupError> {
        let request = LookupRequest::new(text);
        self.request(|reply| AppEvent::Lookup { request, reply })
            .await
    }

    pub async fn history(&self) -> Result<Vec<HistoryEntry>, LookupError> {
        self.request(|reply| AppEvent::ListHistory { reply }).await
    }

    pub async fn clear_history(&self) -> Result<(), LookupError> {
        self.request(|reply| AppEvent::ClearHistory { reply }).await
    }

    pub async fn settings(&self) -> Result<Settings, LookupError> {
        self.request(|reply| AppEvent::GetSettings { reply }).await
    }

    pub async fn save_settings(&self, settings: Settings) -> Result<Settings, LookupError> {
        self.request(|reply| AppEvent::SaveSettings { settings, reply })
            .await
    }

    pub async fn toggle(&self, toggle: SettingToggle) -> Result<Settings, LookupError> {
        self.request(|reply| AppEvent::ToggleSetting { toggle, reply })
            .await
    }
}
