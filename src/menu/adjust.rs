//! Local value edited on a setup screen before it is committed.

/// Domain of an adjustable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Saturate at `min` and `max` (inclusive).
    Clamp {
        /// Smallest value.
        min: i32,
        /// Largest value.
        max: i32,
    },
    /// Cyclic domain `[0, modulus)`.
    Wrap {
        /// Number of values in the cycle.
        modulus: i32,
    },
}

/// A value moved by `delta × step` per encoder input, kept inside its
/// [`Bounds`]. Out-of-range input is absorbed here, never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    value: i32,
    step: i32,
    bounds: Bounds,
}

impl Adjustment {
    /// Clamped value starting at `value`.
    pub fn clamped(value: i32, step: i32, min: i32, max: i32) -> Self {
        let bounds = Bounds::Clamp { min, max };
        Self {
            value: bounds.fit(value as i64),
            step,
            bounds,
        }
    }

    /// Wrapping value in `[0, modulus)` starting at `value`.
    pub fn wrapping(value: i32, step: i32, modulus: i32) -> Self {
        let bounds = Bounds::Wrap {
            modulus: modulus.max(1),
        };
        Self {
            value: bounds.fit(value as i64),
            step,
            bounds,
        }
    }

    /// Move by `delta` increments. Returns `true` if the value changed.
    pub fn apply(&mut self, delta: i32) -> bool {
        if delta == 0 {
            return false;
        }

        let previous = self.value;
        let moved = self.value as i64 + delta as i64 * self.step as i64;
        self.value = self.bounds.fit(moved);
        self.value != previous
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Domain of the value.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl Bounds {
    fn fit(self, value: i64) -> i32 {
        match self {
            Bounds::Clamp { min, max } => value.clamp(min as i64, max as i64) as i32,
            Bounds::Wrap { modulus } => value.rem_euclid(modulus as i64) as i32,
        }
    }
}
