//! # rotary-indexer
//!
//! Controller for a motorized rotary fixture: a stepper turns a platform one
//! step at a time in lockstep with a relay, operated from a rotary encoder and
//! a small screen. Written against embedded-hal 1.0.
//!
//! ## Features
//!
//! - **Non-blocking cycle**: relay-on, step and settle phases are timed by
//!   timestamp comparison, so a press cancels on the next tick
//! - **Shortest-path positioning**: direct moves take the shorter way around
//! - **Scrolling menu**: the window shifts only as far as the cursor needs
//! - **embedded-hal 1.0**: `OutputPin` for STEP/DIR/ENABLE/relay, `InputPin`
//!   for the encoder, `DelayNs` for pulse widths and the tick delay
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rotary_indexer::{ControllerBuilder, EncoderPins, PinDriver, RelayPin};
//!
//! let config = rotary_indexer::load_config("fixture.toml")?;
//!
//! let mut controller = ControllerBuilder::new()
//!     .driver(PinDriver::new(step, dir, enable, delay, &config.motor))
//!     .relay(RelayPin::new(relay_pin, config.relay.active_low))
//!     .input(EncoderPins::new(clk, dt, sw))
//!     .display(screen)
//!     .config(config)
//!     .build()?;
//!
//! controller.run(&mut clock, &mut tick_delay)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and a wall clock
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

mod fmt;

// Core modules
pub mod config;
pub mod cycle;
pub mod display;
pub mod error;
pub mod input;
pub mod machine;
pub mod menu;
pub mod motor;
pub mod relay;

// Re-exports for ergonomic API
pub use config::{validate_config, FixtureConfig, TimingConfig};
pub use cycle::{CycleEngine, CyclePhase, CycleStatus};
pub use display::{DisplaySurface, TextScreen};
pub use error::{Error, Result};
pub use input::{EncoderPins, InputDecoder, InputEvent, RawInput};
pub use machine::{Clock, Controller, ControllerBuilder, SystemMode};
pub use menu::{Adjustment, MenuItem, Navigator};
pub use motor::{
    shortest_delta, A4988Pins, Direction, MotionActuator, PinDriver, PositionModel, StepperDriver,
};
pub use relay::{Relay, RelayPin};

#[cfg(feature = "std")]
pub use machine::StdClock;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Microsteps, Millis};
