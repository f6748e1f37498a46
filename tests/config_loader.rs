use prime_counter::config::{Config, ConfigError, LoggingConfig, UiConfig};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("prime-counter/config.toml"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_empty_file_uses_defaults() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).expect("parse"), Config::default());
}

#[test]
fn test_full_config_parses() {
    let (_dir, path) = write_config(
        r#"
[ui]
tick_rate_ms = 100

[logging]
level = "prime_counter=debug"
file = "/tmp/prime-counter.log"
"#,
    );

    let config = Config::load_from(&path).expect("parse");
    assert_eq!(
        config,
        Config {
            ui: UiConfig { tick_rate_ms: 100 },
            logging: LoggingConfig {
                level: "prime_counter=debug".to_string(),
                file: Some(PathBuf::from("/tmp/prime-counter.log")),
            },
        }
    );
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let (_dir, path) = write_config("[logging]\nlevel = \"warn\"\n");
    let config = Config::load_from(&path).expect("parse");
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[ui\ntick_rate_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = \"fast\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_blank_log_level_fails_validation() {
    let mut config = Config::default();
    config.logging.level = "  ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_directory_path_is_read_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = Config::load_from(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}
