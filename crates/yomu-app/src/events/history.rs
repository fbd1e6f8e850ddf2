use yomu_core::HistoryStore;
use yomu_types::HistoryEntry;

pub fn handle_list_history(history: &HistoryStore) -> Vec<HistoryEntry> {
    history.list().to_vec()
}

pub async fn handle_clear_history(history: &mut HistoryStore) {
    let removed = history.len();
    history.clear().await;
    tracing::info!("Cleared {} history entries", removed);
}
