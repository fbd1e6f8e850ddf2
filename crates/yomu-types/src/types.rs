use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Script a single character belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Kanji,
    Hiragana,
    Katakana,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Kanji => "kanji",
            Category::Hiragana => "hiragana",
            Category::Katakana => "katakana",
            Category::Other => "other",
        }
    }
}

/// Lookup output for one input character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub character: char,
    pub category: Category,
    pub in_dictionary: bool,
    pub readings: Vec<String>,
    pub meanings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// Input exactly as received
    pub original_text: String,
    pub character_records: Vec<CharacterRecord>,
    pub timestamp: DateTime<Utc>,
}

impl LookupResult {
    pub fn is_empty(&self) -> bool {
        self.character_records.is_empty()
    }
}

/// A lookup kept in history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    #[serde(flatten)]
    pub result: LookupResult,
}

/// Request shape delivered by the messaging layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    pub text: String,
}

impl LookupRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_entry_wire_shape() {
        let entry = HistoryEntry {
            id: Uuid::nil(),
            result: LookupResult {
                original_text: "水".to_string(),
                character_records: vec![CharacterRecord {
                    character: '水',
                    category: Category::Kanji,
                    in_dictionary: true,
                    readings: vec!["スイ".to_string(), "みず".to_string()],
                    meanings: vec!["water".to_string()],
                }],
                timestamp: DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
                    .unwrap()
                    .with_timezone(&Utc),
            },
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["originalText"], "水");
        assert_eq!(json["characterRecords"][0]["category"], "kanji");
        assert_eq!(json["characterRecords"][0]["inDictionary"], true);
        assert_eq!(json["timestamp"], "2024-01-02T03:04:05Z");

        let back: HistoryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_lookup_request_from_json() {
        let req: LookupRequest = serde_json::from_str(r#"{"text":"日本語"}"#).unwrap();
        assert_eq!(req, LookupRequest::new("日本語"));
    }
}
