use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use yomu_core::types::AppEvent;
use yomu_lang_japanese::JapaneseProcessor;

use crate::client::LookupClient;
use crate::events::event_loop;
use crate::state::AppState;

/// Application controller for task spawning and lifecycle
pub struct AppController {
    requests: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, channel_capacity: usize) -> Self {
        Self {
            requests: kanal::bounded_async(channel_capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, processor: Arc<JapaneseProcessor>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Single writer for history and settings
        tasks.spawn(event_loop(
            self.state.clone(),
            self.requests.1.clone(),
            processor,
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn client(&self) -> LookupClient {
        LookupClient::new(self.requests.0.clone())
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
