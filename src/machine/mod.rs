//! Machine module for rotary-indexer.
//!
//! The top-level mode dispatcher and its cooperative scheduler loop.

mod builder;
mod clock;
mod controller;
mod mode;

pub use builder::ControllerBuilder;
pub use clock::Clock;
#[cfg(feature = "std")]
pub use clock::StdClock;
pub use controller::Controller;
pub use mode::SystemMode;
