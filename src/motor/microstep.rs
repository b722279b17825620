//! Microstep select lines.

use embedded_hal::digital::OutputPin;

use crate::config::units::Microsteps;
use crate::error::{HardwareError, Result};

/// Lines that select the driver's microstep resolution.
pub trait MicrostepPins {
    /// Drive the lines for `microsteps`.
    fn select(&mut self, microsteps: Microsteps) -> Result<()>;
}

/// Driver whose resolution is strapped in hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMicrostepPins;

impl MicrostepPins for NoMicrostepPins {
    fn select(&mut self, _microsteps: Microsteps) -> Result<()> {
        Ok(())
    }
}

/// A4988 MS1/MS2/MS3 select lines.
pub struct A4988Pins<MS1, MS2, MS3>
where
    MS1: OutputPin,
    MS2: OutputPin,
    MS3: OutputPin,
{
    ms1: MS1,
    ms2: MS2,
    ms3: MS3,
}

impl<MS1, MS2, MS3> A4988Pins<MS1, MS2, MS3>
where
    MS1: OutputPin,
    MS2: OutputPin,
    MS3: OutputPin,
{
    /// Wrap the three select pins.
    pub fn new(ms1: MS1, ms2: MS2, ms3: MS3) -> Self {
        Self { ms1, ms2, ms3 }
    }
}

fn drive<P: OutputPin>(pin: &mut P, high: bool) -> Result<()> {
    if high {
        pin.set_high().map_err(|_| HardwareError::MicrostepPin)?;
    } else {
        pin.set_low().map_err(|_| HardwareError::MicrostepPin)?;
    }
    Ok(())
}

impl<MS1, MS2, MS3> MicrostepPins for A4988Pins<MS1, MS2, MS3>
where
    MS1: OutputPin,
    MS2: OutputPin,
    MS3: OutputPin,
{
    fn select(&mut self, microsteps: Microsteps) -> Result<()> {
        let [ms1, ms2, ms3] = microsteps.select_levels();
        drive(&mut self.ms1, ms1)?;
        drive(&mut self.ms2, ms2)?;
        drive(&mut self.ms3, ms3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn test_eighth_step_levels() {
        let mut ms1 = PinMock::new(&[Transaction::set(State::High)]);
        let mut ms2 = PinMock::new(&[Transaction::set(State::High)]);
        let mut ms3 = PinMock::new(&[Transaction::set(State::Low)]);

        let mut pins = A4988Pins::new(ms1.clone(), ms2.clone(), ms3.clone());
        pins.select(Microsteps::EIGHTH).unwrap();

        ms1.done();
        ms2.done();
        ms3.done();
    }
}
