//! Unit tests for configuration validation.

use rotary_indexer::config::{parse_config, validate_config, FixtureConfig, TimingConfig};
use rotary_indexer::error::{ConfigError, Error};

/// Test that the defaults pass validation.
#[test]
fn test_default_is_valid() {
    assert!(validate_config(&FixtureConfig::default()).is_ok());
}

/// Test each rejected zero value.
#[test]
fn test_zero_values_rejected() {
    let cases = [
        ("[motor]\nbase_steps_per_revolution = 0", ConfigError::InvalidBaseSteps(0)),
        ("[motor]\nstep_pulse_us = 0", ConfigError::InvalidStepPulse(0)),
        ("[encoder]\npulses_per_detent = 0", ConfigError::InvalidPulsesPerDetent(0)),
        ("[ui]\nvisible_menu_items = 0", ConfigError::InvalidVisibleItems(0)),
    ];

    for (toml, expected) in cases {
        assert_eq!(parse_config(toml).unwrap_err(), Error::Config(expected));
    }
}

/// Test the relay timing range edges.
#[test]
fn test_relay_timing_range() {
    let mut config = FixtureConfig::default();

    config.relay.on_ms = TimingConfig::MIN_MS;
    config.relay.settle_ms = TimingConfig::MAX_MS;
    assert!(validate_config(&config).is_ok());

    config.relay.settle_ms = TimingConfig::MAX_MS + 1;
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::SettleOutOfRange(5001)))
    );

    config.relay.settle_ms = 1000;
    config.relay.on_ms = TimingConfig::MIN_MS - 1;
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::RelayOnOutOfRange(49)))
    );
}

/// Test that microstep values outside the driver table are rejected at parse time.
#[test]
fn test_invalid_microsteps_rejected() {
    for value in [0, 3, 32] {
        let toml = format!("[motor]\nmicrosteps = {}\n", value);
        assert!(parse_config(&toml).is_err(), "microsteps {} should fail", value);
    }
}
