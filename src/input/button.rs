//! Time-based push-button debouncing.

use crate::config::units::Millis;
use crate::fmt::debug;

/// Accepts a button level only after it has held still for the debounce
/// window, and latches one press per stable transition into the pressed level.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: u32,
    pressed_level: bool,
    last_reading: bool,
    last_change: Millis,
    stable: bool,
    press: bool,
}

impl Debouncer {
    /// Create a debouncer. The line starts out in the released level.
    pub fn new(window_ms: u32, active_low: bool) -> Self {
        let released = active_low;
        Self {
            window_ms,
            pressed_level: !active_low,
            last_reading: released,
            last_change: Millis::default(),
            stable: released,
            press: false,
        }
    }

    /// Feed one raw reading of the button line taken at `now`.
    pub fn sample(&mut self, level: bool, now: Millis) {
        if level != self.last_reading {
            self.last_change = now;
        }
        self.last_reading = level;

        if now.has_elapsed(self.last_change, self.window_ms) && level != self.stable {
            self.stable = level;
            if self.stable == self.pressed_level {
                self.press = true;
                debug!("button pressed");
            }
        }
    }

    /// Debounced state of the button.
    #[inline]
    pub fn is_held(&self) -> bool {
        self.stable == self.pressed_level
    }

    /// Return and clear the press latch.
    #[inline]
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.press)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOW: bool = false;
    const HIGH: bool = true;

    #[test]
    fn test_clean_press_after_window() {
        let mut button = Debouncer::new(50, true);

        button.sample(LOW, Millis(100));
        button.sample(LOW, Millis(149));
        assert!(!button.take());

        button.sample(LOW, Millis(150));
        assert!(button.take());
        assert!(button.is_held());

        // Still held: no second press.
        button.sample(LOW, Millis(400));
        assert!(!button.take());
    }

    #[test]
    fn test_bounce_restarts_window() {
        let mut button = Debouncer::new(50, true);

        for (i, level) in [LOW, HIGH, LOW, HIGH, LOW].iter().enumerate() {
            button.sample(*level, Millis(10 * i as u32));
        }
        // Last edge at 40 ms; 60 ms is only 20 ms later.
        button.sample(LOW, Millis(60));
        assert!(!button.take());

        button.sample(LOW, Millis(90));
        assert!(button.take());
    }

    #[test]
    fn test_release_does_not_press() {
        let mut button = Debouncer::new(50, true);
        button.sample(LOW, Millis(0));
        button.sample(LOW, Millis(50));
        assert!(button.take());

        button.sample(HIGH, Millis(60));
        button.sample(HIGH, Millis(200));
        assert!(!button.take());
        assert!(!button.is_held());
    }

    #[test]
    fn test_active_high_button() {
        let mut button = Debouncer::new(50, false);
        button.sample(HIGH, Millis(0));
        button.sample(HIGH, Millis(50));
        assert!(button.take());
    }
}
