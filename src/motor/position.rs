//! Position tracking on a circular platform.
//!
//! Positions are step indices modulo the active steps per revolution.

use crate::config::units::Microsteps;

/// Signed shortest rotation from `current` to `target` on a circle of
/// `steps_per_revolution` steps.
///
/// The result satisfies `|delta| <= steps_per_revolution / 2` and
/// `(current + delta) mod steps_per_revolution == target`. At exactly half a
/// revolution the counter-clockwise (negative) delta is chosen.
pub fn shortest_delta(target: u32, current: u32, steps_per_revolution: u32) -> i32 {
    let n = steps_per_revolution as i64;
    if n == 0 {
        return 0;
    }

    let mut raw = (target as i64 % n) - (current as i64 % n);
    if 2 * raw >= n {
        raw -= n;
    } else if 2 * raw < -n {
        raw += n;
    }
    raw as i32
}

/// Current and target step index of the platform.
///
/// `current` is always reduced modulo the active steps per revolution. A
/// resolution change zeroes it: the physical reference does not survive.
#[derive(Debug, Clone, Copy)]
pub struct PositionModel {
    /// Current position in steps, in `[0, steps_per_revolution)`.
    current: u32,
    /// Target of a pending direct move.
    target: Option<u32>,
    /// Full-step resolution of the motor.
    base_steps: u16,
    /// Active microstep multiplier.
    microsteps: Microsteps,
}

impl PositionModel {
    /// Create a position model at step 0.
    pub fn new(base_steps: u16, microsteps: Microsteps) -> Self {
        Self {
            current: 0,
            target: None,
            base_steps: base_steps.max(1),
            microsteps,
        }
    }

    /// Steps in one revolution at the active resolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.base_steps as u32 * self.microsteps.value() as u32
    }

    /// Get current position in steps.
    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Active microstep multiplier.
    #[inline]
    pub fn microsteps(&self) -> Microsteps {
        self.microsteps
    }

    /// Pending target, if a direct move has been requested.
    #[inline]
    pub fn target(&self) -> Option<u32> {
        self.target
    }

    /// Request a direct move; the target is reduced into range.
    pub fn set_target(&mut self, target: u32) {
        self.target = Some(target % self.steps_per_revolution());
    }

    /// Remove and return the pending target.
    pub fn take_target(&mut self) -> Option<u32> {
        self.target.take()
    }

    /// Move by one step clockwise.
    #[inline]
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.steps_per_revolution();
    }

    /// Move by a signed number of steps.
    pub fn move_steps(&mut self, delta: i32) {
        let n = self.steps_per_revolution() as i64;
        self.current = (self.current as i64 + delta as i64).rem_euclid(n) as u32;
    }

    /// Shortest signed rotation from the current position to `target`.
    #[inline]
    pub fn delta_to(&self, target: u32) -> i32 {
        shortest_delta(target, self.current, self.steps_per_revolution())
    }

    /// Switch resolution. Resets the position to 0 and drops any target.
    pub fn set_microsteps(&mut self, microsteps: Microsteps) {
        self.microsteps = microsteps;
        self.current = 0;
        self.target = None;
    }
}
