//! Unit tests for TOML configuration parsing.

use rotary_indexer::config::units::Microsteps;
use rotary_indexer::config::{load_config, parse_config, FixtureConfig};
use rotary_indexer::error::{ConfigError, Error};

/// A fully specified fixture.
const FULL_CONFIG: &str = r#"
[motor]
base_steps_per_revolution = 400
microsteps = 16
invert_direction = true
enable_active_low = false
step_pulse_us = 20
direction_setup_us = 5
move_step_interval_ms = 2

[encoder]
pulses_per_detent = 2
debounce_ms = 30
button_active_low = false

[relay]
active_low = false
on_ms = 750
settle_ms = 1500

[ui]
visible_menu_items = 4
tick_ms = 5
notice_ms = 1000
splash_ms = 500
"#;

/// Test parsing every section and field.
#[test]
fn test_parse_full_config() {
    let config = parse_config(FULL_CONFIG).expect("Failed to parse TOML");

    assert_eq!(config.motor.base_steps_per_revolution, 400);
    assert_eq!(config.motor.microsteps, Microsteps::SIXTEENTH);
    assert!(config.motor.invert_direction);
    assert!(!config.motor.enable_active_low);
    assert_eq!(config.motor.step_pulse_us, 20);
    assert_eq!(config.motor.direction_setup_us, 5);
    assert_eq!(config.motor.move_step_interval_ms, 2);

    assert_eq!(config.encoder.pulses_per_detent, 2);
    assert_eq!(config.encoder.debounce_ms, 30);
    assert!(!config.encoder.button_active_low);

    assert!(!config.relay.active_low);
    assert_eq!(config.timing().relay_on_ms, 750);
    assert_eq!(config.timing().settle_ms, 1500);

    assert_eq!(config.ui.visible_menu_items, 4);
    assert_eq!(config.ui.tick_ms, 5);
    assert_eq!(config.ui.notice_ms, 1000);
    assert_eq!(config.ui.splash_ms, 500);

    assert_eq!(config.steps_per_revolution(), 6400);
}

/// Test that missing sections fall back to the stock fixture.
#[test]
fn test_defaults_match_stock_fixture() {
    let config = FixtureConfig::default();

    assert_eq!(config.steps_per_revolution(), 200);
    assert_eq!(config.motor.microsteps, Microsteps::FULL);
    assert!(config.motor.enable_active_low);
    assert_eq!(config.encoder.pulses_per_detent, 4);
    assert_eq!(config.encoder.debounce_ms, 50);
    assert!(config.relay.active_low);
    assert_eq!(config.ui.visible_menu_items, 3);
    assert_eq!(config.ui.tick_ms, 10);
}

/// Test that malformed TOML is reported as a parse error.
#[test]
fn test_malformed_toml() {
    let result = parse_config("[motor\nmicrosteps = 4");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test that a wrong value type is a parse error.
#[test]
fn test_wrong_type() {
    let result = parse_config("[relay]\non_ms = \"fast\"\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("rotary_indexer_load_test.toml");
    std::fs::write(&path, "[motor]\nmicrosteps = 2\n").expect("write temp config");

    let config = load_config(&path).expect("Failed to load config");
    assert_eq!(config.steps_per_revolution(), 400);

    let _ = std::fs::remove_file(&path);
}

/// Test that a missing file is an I/O error.
#[test]
fn test_load_missing_file() {
    let result = load_config("/nonexistent/rotary_indexer.toml");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::IoError(_)))
    ));
}
