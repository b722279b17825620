//! Motion actuator: enable state and step requests on top of a driver.

use crate::config::units::Microsteps;
use crate::error::Result;
use crate::fmt::{debug, info, warn};

use super::driver::StepperDriver;

/// Whether the coils are energized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorState {
    /// Coils released; step requests are ignored.
    #[default]
    Disabled,
    /// Coils energized and holding.
    Enabled,
}

/// Direction of rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise (positive step count).
    Clockwise,
    /// Counter-clockwise (negative step count).
    CounterClockwise,
}

impl Direction {
    /// Get direction from signed step count.
    #[inline]
    pub fn from_steps(steps: i32) -> Self {
        if steps >= 0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    #[inline]
    fn is_clockwise(self) -> bool {
        self == Direction::Clockwise
    }
}

/// Issues enable/disable and discrete step pulses to a [`StepperDriver`].
///
/// Starts `Disabled`. The last direction written is cached so the DIR line is
/// only touched on a change.
pub struct MotionActuator<D: StepperDriver> {
    driver: D,
    state: ActuatorState,
    direction: Option<Direction>,
}

impl<D: StepperDriver> MotionActuator<D> {
    /// Wrap a driver. No pin is touched until [`MotionActuator::init`].
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            state: ActuatorState::Disabled,
            direction: None,
        }
    }

    /// Put the driver in its idle state: coils released, resolution selected.
    pub fn init(&mut self, microsteps: Microsteps) -> Result<()> {
        self.driver.set_microsteps(microsteps)?;
        self.disable()
    }

    /// Energize the coils.
    pub fn enable(&mut self) -> Result<()> {
        self.driver.set_enabled(true)?;
        if self.state != ActuatorState::Enabled {
            info!("stepper enabled");
        }
        self.state = ActuatorState::Enabled;
        Ok(())
    }

    /// Release the coils. Safe to call in any mode and when already disabled.
    pub fn disable(&mut self) -> Result<()> {
        self.driver.set_enabled(false)?;
        if self.state != ActuatorState::Disabled {
            info!("stepper disabled");
        }
        self.state = ActuatorState::Disabled;
        Ok(())
    }

    /// Current enable state.
    #[inline]
    pub fn state(&self) -> ActuatorState {
        self.state
    }

    /// Check whether the coils are energized.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.state == ActuatorState::Enabled
    }

    /// Direction of the last step, if any step was issued.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Change the driver's microstep resolution.
    pub fn select_microsteps(&mut self, microsteps: Microsteps) -> Result<()> {
        self.driver.set_microsteps(microsteps)
    }

    /// Issue one step. Returns `false` without touching the driver when disabled.
    pub fn step_once(&mut self, direction: Direction) -> Result<bool> {
        if !self.is_enabled() {
            warn!("step ignored: motor disabled");
            return Ok(false);
        }

        self.set_direction(direction)?;
        self.driver.pulse_step()?;
        Ok(true)
    }

    /// Issue `|steps|` pulses in the sign's direction, pausing between pulses.
    ///
    /// Blocks for the whole move. Returns the number of pulses issued, which is
    /// zero when disabled.
    pub fn step_many(&mut self, steps: i32) -> Result<u32> {
        if steps == 0 {
            return Ok(0);
        }
        if !self.is_enabled() {
            warn!("move of {} steps ignored: motor disabled", steps);
            return Ok(0);
        }

        let direction = Direction::from_steps(steps);
        let count = steps.unsigned_abs();
        debug!("moving {} steps, sign {}", count, direction.sign());

        self.set_direction(direction)?;
        for i in 0..count {
            self.driver.pulse_step()?;
            if i + 1 < count {
                self.driver.pause_between_steps();
            }
        }
        Ok(count)
    }

    /// Access the underlying driver.
    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the underlying driver.
    #[inline]
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.direction == Some(direction) {
            return Ok(());
        }

        self.driver.set_direction(direction.is_clockwise())?;
        self.direction = Some(direction);
        Ok(())
    }
}
