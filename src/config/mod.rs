//! Configuration module for rotary-indexer.
//!
//! Provides types for loading and validating the fixture configuration
//! from TOML files (with `std` feature) or built in code.

mod input;
mod motor;
mod system;
mod timing;
mod ui;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use input::EncoderConfig;
pub use motor::MotorConfig;
pub use system::FixtureConfig;
pub use timing::{RelayConfig, TimingConfig};
pub use ui::UiConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Microsteps, Millis};
