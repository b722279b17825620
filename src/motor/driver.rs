//! Step/direction driver.
//!
//! Generic over embedded-hal 1.0 pin types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::Microsteps;
use crate::config::MotorConfig;
use crate::error::{HardwareError, Result};

use super::microstep::{MicrostepPins, NoMicrostepPins};

/// The physical step/direction driver.
///
/// Pulse timing is a fixed hardware contract owned by the implementation.
pub trait StepperDriver {
    /// Energize (`true`) or release (`false`) the motor coils.
    fn set_enabled(&mut self, enabled: bool) -> Result<()>;

    /// Select the rotation direction for subsequent pulses.
    fn set_direction(&mut self, clockwise: bool) -> Result<()>;

    /// Emit one step edge with the driver's minimum assert/deassert width.
    fn pulse_step(&mut self) -> Result<()>;

    /// Wait the fixed inter-step settle time of a multi-step move.
    fn pause_between_steps(&mut self);

    /// Drive the microstep select lines, if the driver has any.
    fn set_microsteps(&mut self, microsteps: Microsteps) -> Result<()> {
        let _ = microsteps;
        Ok(())
    }
}

/// Step/direction driver on `embedded-hal` output pins.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `EN`: ENABLE pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
/// - `MS`: Microstep select lines (defaults to none)
pub struct PinDriver<STEP, DIR, EN, DELAY, MS = NoMicrostepPins>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
    MS: MicrostepPins,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = CW, low = CCW, or inverted).
    dir_pin: DIR,

    /// ENABLE pin.
    enable_pin: EN,

    /// Delay provider for pulse timing.
    delay: DELAY,

    /// Microstep select lines.
    microstep_pins: MS,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// ENABLE is asserted by driving it low.
    enable_active_low: bool,

    /// STEP high time and low time.
    step_pulse_us: u32,

    /// Wait after rewriting DIR.
    direction_setup_us: u32,

    /// Pause between pulses of a multi-step move.
    step_interval_ms: u32,
}

impl<STEP, DIR, EN, DELAY> PinDriver<STEP, DIR, EN, DELAY, NoMicrostepPins>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a driver without microstep select lines.
    pub fn new(step_pin: STEP, dir_pin: DIR, enable_pin: EN, delay: DELAY, config: &MotorConfig) -> Self {
        Self::with_microstep_pins(step_pin, dir_pin, enable_pin, delay, NoMicrostepPins, config)
    }
}

impl<STEP, DIR, EN, DELAY, MS> PinDriver<STEP, DIR, EN, DELAY, MS>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
    MS: MicrostepPins,
{
    /// Create a driver that also controls the microstep select lines.
    pub fn with_microstep_pins(
        step_pin: STEP,
        dir_pin: DIR,
        enable_pin: EN,
        delay: DELAY,
        microstep_pins: MS,
        config: &MotorConfig,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            enable_pin,
            delay,
            microstep_pins,
            invert_direction: config.invert_direction,
            enable_active_low: config.enable_active_low,
            step_pulse_us: config.step_pulse_us,
            direction_setup_us: config.direction_setup_us,
            step_interval_ms: config.move_step_interval_ms,
        }
    }

    /// Release the pins and delay provider.
    pub fn release(self) -> (STEP, DIR, EN, DELAY, MS) {
        (
            self.step_pin,
            self.dir_pin,
            self.enable_pin,
            self.delay,
            self.microstep_pins,
        )
    }
}

impl<STEP, DIR, EN, DELAY, MS> StepperDriver for PinDriver<STEP, DIR, EN, DELAY, MS>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
    MS: MicrostepPins,
{
    fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        let pin_high = enabled != self.enable_active_low;
        if pin_high {
            self.enable_pin.set_high().map_err(|_| HardwareError::EnablePin)?;
        } else {
            self.enable_pin.set_low().map_err(|_| HardwareError::EnablePin)?;
        }
        Ok(())
    }

    fn set_direction(&mut self, clockwise: bool) -> Result<()> {
        let pin_high = clockwise != self.invert_direction;
        if pin_high {
            self.dir_pin.set_high().map_err(|_| HardwareError::DirectionPin)?;
        } else {
            self.dir_pin.set_low().map_err(|_| HardwareError::DirectionPin)?;
        }
        self.delay.delay_us(self.direction_setup_us);
        Ok(())
    }

    fn pulse_step(&mut self) -> Result<()> {
        self.step_pin.set_high().map_err(|_| HardwareError::StepPin)?;
        self.delay.delay_us(self.step_pulse_us);
        self.step_pin.set_low().map_err(|_| HardwareError::StepPin)?;
        self.delay.delay_us(self.step_pulse_us);
        Ok(())
    }

    fn pause_between_steps(&mut self) {
        self.delay.delay_ms(self.step_interval_ms);
    }

    fn set_microsteps(&mut self, microsteps: Microsteps) -> Result<()> {
        self.microstep_pins.select(microsteps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn test_enable_is_active_low_by_default() {
        let mut step = PinMock::new(&[]);
        let mut dir = PinMock::new(&[]);
        let mut enable = PinMock::new(&[Transaction::set(State::Low), Transaction::set(State::High)]);

        let mut driver = PinDriver::new(
            step.clone(),
            dir.clone(),
            enable.clone(),
            NoopDelay::new(),
            &MotorConfig::default(),
        );

        driver.set_enabled(true).unwrap();
        driver.set_enabled(false).unwrap();

        step.done();
        dir.done();
        enable.done();
    }

    #[test]
    fn test_clockwise_drives_dir_high_by_default() {
        let mut step = PinMock::new(&[]);
        let mut dir = PinMock::new(&[Transaction::set(State::High), Transaction::set(State::Low)]);
        let mut enable = PinMock::new(&[]);

        let mut driver = PinDriver::new(
            step.clone(),
            dir.clone(),
            enable.clone(),
            NoopDelay::new(),
            &MotorConfig::default(),
        );

        driver.set_direction(true).unwrap();
        driver.set_direction(false).unwrap();

        step.done();
        dir.done();
        enable.done();
    }

    #[test]
    fn test_pulse_and_direction() {
        let mut step = PinMock::new(&[Transaction::set(State::High), Transaction::set(State::Low)]);
        let mut dir = PinMock::new(&[Transaction::set(State::Low), Transaction::set(State::High)]);
        let mut enable = PinMock::new(&[]);

        let config = MotorConfig {
            invert_direction: true,
            ..MotorConfig::default()
        };
        let mut driver = PinDriver::new(step.clone(), dir.clone(), enable.clone(), NoopDelay::new(), &config);

        driver.set_direction(true).unwrap();
        driver.set_direction(false).unwrap();
        driver.pulse_step().unwrap();

        step.done();
        dir.done();
        enable.done();
    }
}
