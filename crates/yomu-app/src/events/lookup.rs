use yomu_core::HistoryStore;
use yomu_core::language::LanguageProcessor;
use yomu_lang_japanese::JapaneseProcessor;
use yomu_types::{LookupRequest, LookupResult};

pub async fn handle_lookup(
    processor: &JapaneseProcessor,
    history: &mut HistoryStore,
    request: LookupRequest,
) -> LookupResult {
    let result = processor.lookup(&request.text);
    tracing::debug!(
        "Lookup '{}': {} records",
        request.text,
        result.character_records.len()
    );

    // Text with nothing Japanese in it is answered but not remembered
    if !result.is_empty() {
        let entry = history.record(result.clone()).await;
        tracing::debug!("Recorded history entry {}", entry.id);
    }

    result
}
