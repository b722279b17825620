//! Fixture configuration - root configuration structure.

use serde::Deserialize;

use super::input::EncoderConfig;
use super::motor::MotorConfig;
use super::timing::{RelayConfig, TimingConfig};
use super::ui::UiConfig;

/// Root configuration structure from TOML.
///
/// Every section is optional; an empty document yields the stock fixture
/// (200-step motor at full step, 4-pulse detents, 1 s relay and settle).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Motor and driver wiring.
    pub motor: MotorConfig,

    /// Rotary encoder decoding.
    pub encoder: EncoderConfig,

    /// Relay polarity and initial cycle timing.
    pub relay: RelayConfig,

    /// Menu layout and scheduler pacing.
    pub ui: UiConfig,
}

impl FixtureConfig {
    /// Initial cycle timing.
    pub fn timing(&self) -> TimingConfig {
        self.relay.timing()
    }

    /// Steps per revolution at the configured microstep setting.
    pub fn steps_per_revolution(&self) -> u32 {
        self.motor.total_steps_per_revolution()
    }
}
