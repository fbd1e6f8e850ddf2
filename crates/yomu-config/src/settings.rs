use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// User preferences persisted under the settings key.
///
/// Every field carries its own default, so a partially persisted record
/// deserializes with the missing keys filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Hide the result panel when a lookup finds nothing
    #[serde(default = "default_enabled")]
    pub auto_hide: bool,
    #[serde(default = "default_enabled")]
    pub show_readings: bool,
    #[serde(default = "default_enabled")]
    pub show_meanings: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_hide: default_enabled(),
            show_readings: default_enabled(),
            show_meanings: default_enabled(),
        }
    }
}

impl Settings {
    pub fn get(&self, toggle: SettingToggle) -> bool {
        match toggle {
            SettingToggle::AutoHide => self.auto_hide,
            SettingToggle::ShowReadings => self.show_readings,
            SettingToggle::ShowMeanings => self.show_meanings,
        }
    }

    pub fn set(&mut self, toggle: SettingToggle, value: bool) {
        match toggle {
            SettingToggle::AutoHide => self.auto_hide = value,
            SettingToggle::ShowReadings => self.show_readings = value,
            SettingToggle::ShowMeanings => self.show_meanings = value,
        }
    }
}

/// One user-facing switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingToggle {
    AutoHide,
    ShowReadings,
    ShowMeanings,
}

impl SettingToggle {
    pub const ALL: [SettingToggle; 3] = [
        SettingToggle::AutoHide,
        SettingToggle::ShowReadings,
        SettingToggle::ShowMeanings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingToggle::AutoHide => "autoHide",
            SettingToggle::ShowReadings => "showReadings",
            SettingToggle::ShowMeanings => "showMeanings",
        }
    }

    /// Accepts `autoHide`, `auto-hide`, `auto_hide` and the short `readings` / `meanings`
    pub fn parse(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "autohide" => Some(SettingToggle::AutoHide),
            "showreadings" | "readings" => Some(SettingToggle::ShowReadings),
            "showmeanings" | "meanings" => Some(SettingToggle::ShowMeanings),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_all_enabled() {
        let s = Settings::default();
        assert!(s.auto_hide && s.show_readings && s.show_meanings);
    }

    #[test]
    fn test_partial_record_keeps_defaults() {
        let s: Settings = serde_json::from_str(r#"{"showMeanings":false}"#).unwrap();
        assert!(s.auto_hide);
        assert!(s.show_readings);
        assert!(!s.show_meanings);
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"autoHide": true, "showReadings": true, "showMeanings": true})
        );
    }

    #[test]
    fn test_parse_toggle_names() {
        assert_eq!(SettingToggle::parse("autoHide"), Some(SettingToggle::AutoHide));
        assert_eq!(SettingToggle::parse("auto-hide"), Some(SettingToggle::AutoHide));
        assert_eq!(SettingToggle::parse("show_readings"), Some(SettingToggle::ShowReadings));
        assert_eq!(SettingToggle::parse("Meanings"), Some(SettingToggle::ShowMeanings));
        assert_eq!(SettingToggle::parse("volume"), None);

        for toggle in SettingToggle::ALL {
            assert_eq!(SettingToggle::parse(toggle.as_str()), Some(toggle));
        }
    }

    #[test]
    fn test_get_set_toggle() {
        let mut s = Settings::default();
        for toggle in SettingToggle::ALL {
            s.set(toggle, false);
            assert!(!s.get(toggle), "{} should be off", toggle.as_str());
        }
        assert_eq!(
            s,
            Settings {
                auto_hide: false,
                show_readings: false,
                show_meanings: false
            }
        );
    }
}
