//! Motor module for rotary-indexer.
//!
//! Step/direction driver, motion actuator and circular position tracking.

mod actuator;
mod driver;
mod microstep;
mod position;

pub use actuator::{ActuatorState, Direction, MotionActuator};
pub use driver::{PinDriver, StepperDriver};
pub use microstep::{A4988Pins, MicrostepPins, NoMicrostepPins};
pub use position::{shortest_delta, PositionModel};
