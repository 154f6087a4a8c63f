use std::fs;

use choice_picker_core::{ConfigError, EasingKind, PickerConfig};

#[test]
fn loads_toml_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("choice-picker.toml");
    fs::write(
        &path,
        r#"
[elastic]
length = 48.0
strength = 0.01

[swipe]
change_index_fraction = 0.3

[snap]
duration_ms = 180
easing = "ease_out"
"#,
    )
    .expect("write config");

    let cfg = PickerConfig::load_from_file(&path).expect("valid config");
    assert_eq!(cfg.elastic.length, 48.0);
    assert_eq!(cfg.elastic.strength, 0.01);
    assert_eq!(cfg.swipe.change_index_fraction, 0.3);
    assert_eq!(cfg.swipe.velocity_threshold, 0.5);
    assert_eq!(cfg.snap.duration_ms, 180);
    assert_eq!(cfg.snap.easing, EasingKind::EaseOut);
}

#[test]
fn loads_json_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("picker.json");
    fs::write(&path, r#"{"swipe": {"velocity_threshold": 0.9}}"#)
        .expect("write config");

    let cfg = PickerConfig::load_from_file(&path).expect("valid config");
    assert_eq!(cfg.swipe.velocity_threshold, 0.9);
    assert_eq!(cfg.elastic.length, 60.0);
}

#[test]
fn unknown_extension_tries_both_formats() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("picker.conf");
    fs::write(&path, "[snap]\nduration_ms = 120\n").expect("write config");
    let cfg = PickerConfig::load_from_file(&path).expect("toml content");
    assert_eq!(cfg.snap.duration_ms, 120);
}

#[test]
fn reports_missing_and_invalid_files() {
    let dir = tempfile::tempdir().expect("tempdir");

    let missing = dir.path().join("absent.toml");
    assert!(matches!(
        PickerConfig::load_from_file(&missing),
        Err(ConfigError::Read { .. })
    ));

    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[elastic\nlength = ").expect("write config");
    assert!(matches!(
        PickerConfig::load_from_file(&bad),
        Err(ConfigError::Toml { .. })
    ));

    let out_of_range = dir.path().join("range.json");
    fs::write(&out_of_range, r#"{"elastic": {"strength": -1.0}}"#)
        .expect("write config");
    let err = PickerConfig::load_from_file(&out_of_range)
        .expect_err("negative strength");
    assert!(err.to_string().contains("elastic.strength"));
}
