use yomu_config::{SettingToggle, Settings};
use yomu_types::{HistoryEntry, LookupResult};

pub const NOTHING_FOUND: &str = "No Japanese characters found.";

/// Result panel text, or `None` when the panel stays hidden
pub fn render_lookup(result: &LookupResult, settings: &Settings) -> Option<String> {
    if result.is_empty() {
        return (!settings.auto_hide).then(|| format!("{NOTHING_FOUND}\n"));
    }

    let mut out = String::new();
    for record in &result.character_records {
        let mut line = format!("{}  {:<8}", record.character, record.category.as_str());

        if settings.show_readings && !record.readings.is_empty() {
            line.push_str("  ");
            line.push_str(&record.readings.join("、"));
        }
        if settings.show_meanings && !record.meanings.is_empty() {
            line.push_str("  ");
            line.push_str(&record.meanings.join(", "));
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }

    Some(out)
}

pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "History is empty.\n".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            format!(
                "{}  {}  ({} chars)\n",
                entry.result.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.result.original_text,
                entry.result.character_records.len()
            )
        })
        .collect()
}

pub fn render_settings(settings: &Settings) -> String {
    SettingToggle::ALL
        .iter()
        .map(|toggle| format!("{}: {}\n", toggle.as_str(), settings.get(*toggle)))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;
    use yomu_types::{Category, CharacterRecord};

    use super::*;

    fn sample() -> LookupResult {
        LookupResult {
            original_text: "水あ".to_string(),
            character_records: vec![
                CharacterRecord {
                    character: '水',
                    category: Category::Kanji,
                    in_dictionary: true,
                    readings: vec!["スイ".to_string(), "みず".to_string()],
                    meanings: vec!["water".to_string()],
                },
                CharacterRecord {
                    character: 'あ',
                    category: Category::Hiragana,
                    in_dictionary: false,
                    readings: vec![],
                    meanings: vec!["Hiragana character".to_string()],
                },
            ],
            timestamp: Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap(),
        }
    }

    fn empty() -> LookupResult {
        LookupResult {
            original_text: "abc".to_string(),
            character_records: vec![],
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_render_all_columns() {
        let text = render_lookup(&sample(), &Settings::default()).unwrap();
        assert_eq!(
            text,
            "水  kanji     スイ、みず  water\nあ  hiragana  Hiragana character\n"
        );
    }

    #[test]
    fn test_render_respects_column_toggles() {
        let settings = Settings {
            auto_hide: true,
            show_readings: false,
            show_meanings: false,
        };
        let text = render_lookup(&sample(), &settings).unwrap();
        assert_eq!(text, "水  kanji\nあ  hiragana\n");
    }

    #[test]
    fn test_auto_hide_empty_result() {
        assert_eq!(render_lookup(&empty(), &Settings::default()), None);

        let settings = Settings {
            auto_hide: false,
            ..Settings::default()
        };
        assert_eq!(
            render_lookup(&empty(), &settings).as_deref(),
            Some("No Japanese characters found.\n")
        );
    }

    #[test]
    fn test_render_history() {
        assert_eq!(render_history(&[]), "History is empty.\n");

        let entries = [HistoryEntry {
            id: Uuid::nil(),
            result: sample(),
        }];
        assert_eq!(render_history(&entries), "2024-05-06 07:08:09  水あ  (2 chars)\n");
    }

    #[test]
    fn test_render_settings() {
        assert_eq!(
            render_settings(&Settings::default()),
            "autoHide: true\nshowReadings: true\nshowMeanings: true\n"
        );
    }
}
