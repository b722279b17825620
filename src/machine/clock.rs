//! Millisecond time source for the scheduler.

use crate::config::units::Millis;

/// Monotonic millisecond counter. May wrap; consumers compare with
/// [`Millis::elapsed_since`].
pub trait Clock {
    /// Current time.
    fn now(&mut self) -> Millis;
}

/// Clock backed by [`std::time::Instant`], counting from its creation.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Start counting from now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now(&mut self) -> Millis {
        // Truncation wraps the same way a hardware counter does.
        Millis(self.origin.elapsed().as_millis() as u32)
    }
}
