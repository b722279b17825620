//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::timing::TimingConfig;
use super::FixtureConfig;

/// Validate a fixture configuration.
///
/// Checks:
/// - Motor has a non-zero base resolution and pulse width
/// - Encoder detents span at least one pulse
/// - At least one menu row is visible
/// - Relay timings lie in the adjustable range
pub fn validate_config(config: &FixtureConfig) -> Result<()> {
    validate_motor(&config.motor)?;

    if config.encoder.pulses_per_detent == 0 {
        return Err(Error::Config(ConfigError::InvalidPulsesPerDetent(
            config.encoder.pulses_per_detent,
        )));
    }

    if config.ui.visible_menu_items == 0 {
        return Err(Error::Config(ConfigError::InvalidVisibleItems(
            config.ui.visible_menu_items,
        )));
    }

    validate_relay(&config.relay)
}

fn validate_motor(config: &super::MotorConfig) -> Result<()> {
    if config.base_steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidBaseSteps(
            config.base_steps_per_revolution,
        )));
    }

    if config.step_pulse_us == 0 {
        return Err(Error::Config(ConfigError::InvalidStepPulse(
            config.step_pulse_us,
        )));
    }

    Ok(())
}

fn validate_relay(config: &super::RelayConfig) -> Result<()> {
    if !TimingConfig::in_range(config.on_ms) {
        return Err(Error::Config(ConfigError::RelayOnOutOfRange(config.on_ms)));
    }

    if !TimingConfig::in_range(config.settle_ms) {
        return Err(Error::Config(ConfigError::SettleOutOfRange(
            config.settle_ms,
        )));
    }

    Ok(())
}
