//! Motor and driver configuration from TOML.

use serde::Deserialize;

use super::units::Microsteps;

/// Stepper motor and driver wiring configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MotorConfig {
    /// Base steps per revolution (200 for 1.8° motors).
    pub base_steps_per_revolution: u16,

    /// Microstep setting applied at startup (1, 2, 4, 8, 16).
    pub microsteps: Microsteps,

    /// Invert direction pin logic.
    ///
    /// With `false` DIR is driven high for clockwise. Boards wired so that
    /// DIR low turns the platform clockwise need `true`.
    pub invert_direction: bool,

    /// ENABLE line is asserted low (most step/dir drivers).
    pub enable_active_low: bool,

    /// STEP high time and low time in microseconds.
    pub step_pulse_us: u32,

    /// Wait after a direction change before the next pulse, in microseconds.
    pub direction_setup_us: u32,

    /// Pause between consecutive pulses of a direct positioning move.
    pub move_step_interval_ms: u32,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            base_steps_per_revolution: 200,
            microsteps: Microsteps::FULL,
            invert_direction: false,
            enable_active_low: true,
            step_pulse_us: 500,
            direction_setup_us: 10,
            move_step_interval_ms: 5,
        }
    }
}

impl MotorConfig {
    /// Steps per revolution with the configured microstep setting.
    pub fn total_steps_per_revolution(&self) -> u32 {
        self.base_steps_per_revolution as u32 * self.microsteps.value() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_steps() {
        let config = MotorConfig {
            microsteps: Microsteps::SIXTEENTH,
            ..MotorConfig::default()
        };

        // 200 * 16 = 3200
        assert_eq!(config.total_steps_per_revolution(), 3200);
    }
}
