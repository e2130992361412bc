use std::path::PathBuf;

use giveaway_picker::config::{Config, ConfigError, MAX_EXPORT_SCALE};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.picker.shuffle_interval_ms, 100);
    assert_eq!(config.picker.shuffle_duration_ms, 3000);
    assert_eq!(config.export.scale, 2);
    assert_eq!(config.export.output_dir, None);
    assert_eq!(config.export.font_path, None);
    assert_eq!(config.export.footer, None);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("giveaway-picker/config.toml"));
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"
[picker]
shuffle_interval_ms = 50
shuffle_duration_ms = 1000

[export]
output_dir = "/tmp/cards"
font_path = "/tmp/font.ttf"
scale = 3
footer = "Giveaway night"

[logging]
level = "debug"
file = "/tmp/picker.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.picker.shuffle_interval_ms, 50);
    assert_eq!(config.picker.shuffle_duration_ms, 1000);
    assert_eq!(config.export.output_dir, Some(PathBuf::from("/tmp/cards")));
    assert_eq!(config.export.font_path, Some(PathBuf::from("/tmp/font.ttf")));
    assert_eq!(config.export.scale, 3);
    assert_eq!(config.export.footer.as_deref(), Some("Giveaway night"));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.resolved_file(), PathBuf::from("/tmp/picker.log"));
    assert_eq!(config.export.resolved_output_dir(), PathBuf::from("/tmp/cards"));
}

#[test]
fn partial_sections_keep_defaults() {
    let (_dir, path) = write_config("[picker]\nshuffle_duration_ms = 500\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.picker.shuffle_interval_ms, 100);
    assert_eq!(config.picker.shuffle_duration_ms, 500);
    assert_eq!(config.export.scale, 2);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[picker\nshuffle_interval_ms = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn zero_duration_fails_validation() {
    let (_dir, path) = write_config("[picker]\nshuffle_duration_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("shuffle_duration_ms"));
}

#[test]
fn scale_out_of_range_fails_validation() {
    let mut config = Config::default();
    config.export.scale = 0;
    assert!(config.validate().is_err());
    config.export.scale = MAX_EXPORT_SCALE + 1;
    assert!(config.validate().is_err());
    config.export.scale = MAX_EXPORT_SCALE;
    assert!(config.validate().is_ok());
}
