use chrono::Utc;
use yomu_core::dictionary::Dictionary;
use yomu_core::language::LanguageProcessor;
use yomu_types::{Category, CharacterRecord, LookupResult};

use crate::classifier;
use crate::dictionary::KanjiDictionary;

pub const KANJI_NOT_IN_DICTIONARY: &str = "Kanji character (not in dictionary)";
pub const HIRAGANA_CHARACTER: &str = "Hiragana character";
pub const KATAKANA_CHARACTER: &str = "Katakana character";

/// Japanese language processor
pub struct JapaneseProcessor {
    dictionary: KanjiDictionary,
}

impl JapaneseProcessor {
    /// Create a processor over the embedded kanji table
    pub fn new() -> Self {
        let dictionary = KanjiDictionary::embedded();
        tracing::info!(
            "Loaded {} embedded kanji entries",
            dictionary.metadata().entry_count
        );
        Self { dictionary }
    }

    pub fn dictionary_size(&self) -> usize {
        self.dictionary.entry_count()
    }

    /// Per-character records for `text`, without the timestamp.
    ///
    /// Iterates by code point. Whitespace and characters outside the three
    /// Japanese scripts produce no record.
    pub fn records(&self, text: &str) -> Vec<CharacterRecord> {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .filter_map(|c| self.record(c))
            .collect()
    }

    fn record(&self, character: char) -> Option<CharacterRecord> {
        let category = classifier::classify(character);

        let placeholder = match category {
            Category::Kanji => {
                if let Some(entry) = self.dictionary.lookup_exact(character) {
                    return Some(CharacterRecord {
                        character,
                        category,
                        in_dictionary: true,
                        readings: entry.readings(),
                        meanings: entry.meanings(),
                    });
                }
                KANJI_NOT_IN_DICTIONARY
            }
            Category::Hiragana => HIRAGANA_CHARACTER,
            Category::Katakana => KATAKANA_CHARACTER,
            Category::Other => return None,
        };

        Some(CharacterRecord {
            character,
            category,
            in_dictionary: false,
            readings: vec![],
            meanings: vec![placeholder.to_string()],
        })
    }
}

impl Default for JapaneseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for JapaneseProcessor {
    fn language_code(&self) -> &str {
        "ja"
    }

    fn classify(&self, character: char) -> Category {
        classifier::classify(character)
    }

    fn lookup(&self, text: &str) -> LookupResult {
        let character_records = self.records(text);
        tracing::debug!(
            "Looked up {} chars -> {} records",
            text.chars().count(),
            character_records.len()
        );

        LookupResult {
            original_text: text.to_string(),
            character_records,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(result: &LookupResult) -> String {
        result.character_records.iter().map(|r| r.character).collect()
    }

    #[test]
    fn test_empty_input() {
        let result = JapaneseProcessor::new().lookup("");
        assert_eq!(result.original_text, "");
        assert!(result.character_records.is_empty());
    }

    #[test]
    fn test_nihongo() {
        let result = JapaneseProcessor::new().lookup("日本語");
        assert_eq!(chars(&result), "日本語");

        let records = &result.character_records;
        assert!(
            records
                .iter()
                .all(|r| r.category == Category::Kanji && r.in_dictionary)
        );
        assert!(records[0].readings.iter().any(|r| r == "ニチ"));
        assert!(records[0].readings.iter().any(|r| r == "ひ"));
        assert!(records[2].meanings.iter().any(|m| m == "language"));
    }

    #[test]
    fn test_whitespace_skipped() {
        let result = JapaneseProcessor::new().lookup("水 火");
        assert_eq!(result.original_text, "水 火");
        assert_eq!(chars(&result), "水火");
        assert!(result.character_records.iter().all(|r| r.in_dictionary));

        let result = JapaneseProcessor::new().lookup("\t水\u{3000}\n火 ");
        assert_eq!(result.character_records.len(), 2);
    }

    #[test]
    fn test_kanji_not_in_table() {
        let processor = JapaneseProcessor::new();
        for c in ['鬱', '\u{4E01}', '\u{9FAF}'] {
            let result = processor.lookup(&c.to_string());
            assert_eq!(result.character_records.len(), 1, "{c}");
            let record = &result.character_records[0];
            assert_eq!(record.category, Category::Kanji);
            assert!(!record.in_dictionary);
            assert!(record.readings.is_empty());
            assert_eq!(record.meanings, [KANJI_NOT_IN_DICTIONARY]);
        }
    }

    #[test]
    fn test_kana_placeholders() {
        let result = JapaneseProcessor::new().lookup("かタ");
        let records = &result.character_records;
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].category, Category::Hiragana);
        assert!(!records[0].in_dictionary);
        assert_eq!(records[0].meanings, [HIRAGANA_CHARACTER]);

        assert_eq!(records[1].category, Category::Katakana);
        assert!(!records[1].in_dictionary);
        assert_eq!(records[1].meanings, [KATAKANA_CHARACTER]);
    }

    #[test]
    fn test_other_characters_excluded() {
        let processor = JapaneseProcessor::new();
        assert!(processor.lookup("hello, world!").character_records.is_empty());

        let result = processor.lookup("「水」です。abc");
        assert_eq!(chars(&result), "水です");
    }

    #[test]
    fn test_supplementary_plane_code_point() {
        // One code point, two UTF-16 units: classified once, as other
        let result = JapaneseProcessor::new().lookup("\u{20B9F}水");
        assert_eq!(chars(&result), "水");
    }

    #[test]
    fn test_deterministic_records() {
        let processor = JapaneseProcessor::new();
        let text = "今日は、カタカナと漢字!";
        assert_eq!(processor.records(text), processor.records(text));
        assert_eq!(
            processor.lookup(text).character_records,
            processor.records(text)
        );
    }

    #[test]
    fn test_trait_surface() {
        let processor = JapaneseProcessor::new();
        assert_eq!(processor.language_code(), "ja");
        assert_eq!(processor.classify('語'), Category::Kanji);
        assert!(processor.dictionary_size() > 0);
    }
}
