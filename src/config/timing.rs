//! Relay timing configuration and its adjustable range.

use serde::Deserialize;

/// Relay actuation and post-step settle durations used by the full cycle.
///
/// Both values live in `[MIN_MS, MAX_MS]` and move in `STEP_MS` increments
/// from the setup screens. Process-lifetime state; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// How long the relay stays active before each step.
    pub relay_on_ms: u32,
    /// How long to wait after each step before the next actuation.
    pub settle_ms: u32,
}

impl TimingConfig {
    /// Shortest adjustable duration.
    pub const MIN_MS: u32 = 50;
    /// Longest adjustable duration.
    pub const MAX_MS: u32 = 5000;
    /// Increment per encoder detent.
    pub const STEP_MS: u32 = 50;

    /// Create a timing configuration, clamping both values into range.
    pub fn new(relay_on_ms: u32, settle_ms: u32) -> Self {
        Self {
            relay_on_ms: Self::clamp(relay_on_ms),
            settle_ms: Self::clamp(settle_ms),
        }
    }

    /// Clamp a duration into the adjustable range.
    #[inline]
    pub fn clamp(ms: u32) -> u32 {
        ms.clamp(Self::MIN_MS, Self::MAX_MS)
    }

    /// Check if a duration is inside the adjustable range.
    #[inline]
    pub fn in_range(ms: u32) -> bool {
        (Self::MIN_MS..=Self::MAX_MS).contains(&ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            relay_on_ms: 1000,
            settle_ms: 1000,
        }
    }
}

/// Relay output configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Relay module energizes when its input is low.
    pub active_low: bool,

    /// Initial relay-on duration in milliseconds.
    pub on_ms: u32,

    /// Initial post-step settle duration in milliseconds.
    pub settle_ms: u32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        let timing = TimingConfig::default();
        Self {
            active_low: true,
            on_ms: timing.relay_on_ms,
            settle_ms: timing.settle_ms,
        }
    }
}

impl RelayConfig {
    /// Initial cycle timing described by this section.
    pub fn timing(&self) -> TimingConfig {
        TimingConfig::new(self.on_ms, self.settle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        let timing = TimingConfig::new(10, 9000);
        assert_eq!(timing.relay_on_ms, TimingConfig::MIN_MS);
        assert_eq!(timing.settle_ms, TimingConfig::MAX_MS);
    }

    #[test]
    fn test_range_edges() {
        assert!(TimingConfig::in_range(50));
        assert!(TimingConfig::in_range(5000));
        assert!(!TimingConfig::in_range(49));
        assert!(!TimingConfig::in_range(5001));
    }
}
