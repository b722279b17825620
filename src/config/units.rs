//! Unit types for time and microstep resolution.
//!
//! Provides type-safe representations of millisecond timestamps and the
//! driver's microstep divisor so the two are never confused with raw step
//! counts.

use core::ops::Add;

use serde::Deserialize;

use crate::error::ConfigError;

/// Monotonic timestamp or duration in milliseconds.
///
/// Wraps around after `u32::MAX`; use [`Millis::elapsed_since`] rather than
/// plain subtraction when comparing timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millis(pub u32);

impl Millis {
    /// Create a new Millis value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`, tolerant of counter rollover.
    #[inline]
    pub const fn elapsed_since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Check whether at least `duration_ms` have passed since `earlier`.
    #[inline]
    pub const fn has_elapsed(self, earlier: Millis, duration_ms: u32) -> bool {
        self.elapsed_since(earlier) >= duration_ms
    }
}

impl Add<u32> for Millis {
    type Output = Self;

    fn add(self, rhs: u32) -> Self::Output {
        Self(self.0.wrapping_add(rhs))
    }
}

/// Microstep divisor (1, 2, 4, 8, 16).
///
/// Validated at construction. The position in [`Microsteps::VALID_VALUES`]
/// is the index the operator scrolls through in the microstep setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Microsteps(u16);

impl Microsteps {
    /// Full step (no microstepping).
    pub const FULL: Self = Self(1);
    /// Half step.
    pub const HALF: Self = Self(2);
    /// Quarter step.
    pub const QUARTER: Self = Self(4);
    /// Eighth step.
    pub const EIGHTH: Self = Self(8);
    /// Sixteenth step (maximum resolution).
    pub const SIXTEENTH: Self = Self(16);

    /// Valid microstep values, in selection order.
    pub const VALID_VALUES: [u16; 5] = [1, 2, 4, 8, 16];

    /// Number of selectable settings.
    pub const COUNT: usize = Self::VALID_VALUES.len();

    /// Create a new Microsteps value with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMicrosteps` if the value is not one of 1, 2, 4, 8, 16.
    pub fn new(value: u16) -> Result<Self, ConfigError> {
        if Self::VALID_VALUES.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidMicrosteps(value))
        }
    }

    /// Get the raw divisor value (the steps-per-revolution multiplier).
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Position of this setting in the selection order.
    pub fn index(self) -> usize {
        Self::VALID_VALUES
            .iter()
            .position(|&v| v == self.0)
            .unwrap_or(0)
    }

    /// Setting at `index`, wrapping around the selection order.
    pub fn from_index(index: usize) -> Self {
        Self(Self::VALID_VALUES[index % Self::COUNT])
    }

    /// Levels for the A4988 MS1/MS2/MS3 select lines (`true` = high).
    pub const fn select_levels(self) -> [bool; 3] {
        match self.0 {
            2 => [true, false, false],
            4 => [false, true, false],
            8 => [true, true, false],
            16 => [true, true, true],
            _ => [false, false, false],
        }
    }

    /// Short label for screens.
    pub const fn label(self) -> &'static str {
        match self.0 {
            2 => "1/2 step",
            4 => "1/4 step",
            8 => "1/8 step",
            16 => "1/16 step",
            _ => "Full step",
        }
    }

    /// Check if a value is valid.
    #[inline]
    pub fn is_valid(value: u16) -> bool {
        Self::VALID_VALUES.contains(&value)
    }
}

impl Default for Microsteps {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<u16> for Microsteps {
    type Error = ConfigError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Microsteps {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u16::deserialize(deserializer)?;
        Microsteps::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
