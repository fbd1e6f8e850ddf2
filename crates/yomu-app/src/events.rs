use std::sync::Arc;

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use yomu_core::types::AppEvent;
use yomu_core::{HistoryStore, SettingsStore};
use yomu_lang_japanese::JapaneseProcessor;

use crate::state::AppState;

pub mod history;
pub mod lookup;
pub mod settings;

use history::{handle_clear_history, handle_list_history};
use lookup::handle_lookup;
use settings::{handle_get_settings, handle_save_settings, handle_toggle_setting};

/// App's main loop.
///
/// Owns the history and settings stores, so requests are applied one at a
/// time in arrival order.
pub async fn event_loop(
    state: Arc<AppState>,
    requests: AsyncReceiver<AppEvent>,
    processor: Arc<JapaneseProcessor>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (mut history, mut settings) = {
        let config = state.config.read().await;
        let history = HistoryStore::load(state.store.clone(), &config.storage.history_key).await;
        let mut settings = SettingsStore::new(state.store.clone(), &config.storage.settings_key);
        settings.load().await;
        (history, settings)
    };

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Shutdown requested");
                break;
            }
            event = requests.recv() => match event {
                Ok(event) => event,
                Err(e) => {
                    tracing::info!("[EVENT_LOOP] Request channel closed: {}", e);
                    break;
                }
            },
        };

        tracing::debug!("[EVENT_LOOP] EVENT RECEIVED: {}", event.name());
        handle_events(&processor, &mut history, &mut settings, event).await;
    }

    // Queued requests are dropped, their callers see no response
    while let Ok(Some(event)) = requests.try_recv() {
        tracing::debug!("[EVENT_LOOP] Dropping pending {}", event.name());
    }
    requests.close();
    Ok(())
}

async fn handle_events(
    processor: &JapaneseProcessor,
    history: &mut HistoryStore,
    settings: &mut SettingsStore,
    event: AppEvent,
) {
    match event {
        AppEvent::Lookup { request, reply } => {
            let result = handle_lookup(processor, history, request).await;
            respond(reply, result, "lookup");
        }
        AppEvent::ListHistory { reply } => {
            respond(reply, handle_list_history(history), "list_history");
        }
        AppEvent::ClearHistory { reply } => {
            handle_clear_history(history).await;
            respond(reply, (), "clear_history");
        }
        AppEvent::GetSettings { reply } => {
            respond(reply, handle_get_settings(settings), "get_settings");
        }
        AppEvent::SaveSettings {
            settings: updated,
            reply,
        } => {
            let saved = handle_save_settings(settings, updated).await;
            respond(reply, saved, "save_settings");
        }
        AppEvent::ToggleSetting { toggle, reply } => {
            let saved = handle_toggle_setting(settings, toggle).await;
            respond(reply, saved, "toggle_setting");
        }
    }
}

fn respond<T>(reply: yomu_core::types::Reply<T>, value: T, event: &str) {
    if reply.send(value).is_err() {
        tracing::debug!("Caller went away before the {} response", event);
    }
}
