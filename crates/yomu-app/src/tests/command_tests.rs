use yomu_config::Settings;

use crate::apply_overrides;

#[test]
fn test_overrides_only_touch_given_fields() {
    let base = Settings::default();

    assert_eq!(apply_overrides(base, None, None, None), base);
    assert_eq!(
        apply_overrides(base, Some(false), None, Some(false)),
        Settings {
            auto_hide: false,
            show_readings: true,
            show_meanings: false,
        }
    );
}
