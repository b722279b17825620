//! Relay output.

use embedded_hal::digital::OutputPin;

use crate::error::{HardwareError, Result};

/// A single on/off actuator with no internal state.
pub trait Relay {
    /// Energize (`true`) or release (`false`) the relay.
    fn set_active(&mut self, active: bool) -> Result<()>;
}

/// Relay driven from one `embedded-hal` output pin.
pub struct RelayPin<P: OutputPin> {
    pin: P,
    active_low: bool,
}

impl<P: OutputPin> RelayPin<P> {
    /// Wrap a pin. Most relay modules energize when their input is pulled low.
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Release the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Relay for RelayPin<P> {
    fn set_active(&mut self, active: bool) -> Result<()> {
        if active != self.active_low {
            self.pin.set_high().map_err(|_| HardwareError::RelayPin)?;
        } else {
            self.pin.set_low().map_err(|_| HardwareError::RelayPin)?;
        }
        Ok(())
    }
}
