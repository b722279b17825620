//! Builder pattern for Controller.

use crate::config::{validate_config, FixtureConfig};
use crate::display::DisplaySurface;
use crate::error::{ConfigError, Error, Result};
use crate::input::RawInput;
use crate::motor::StepperDriver;
use crate::relay::Relay;

use super::controller::Controller;

/// Builder for creating [`Controller`] instances.
pub struct ControllerBuilder<D, R, I, S>
where
    D: StepperDriver,
    R: Relay,
    I: RawInput,
    S: DisplaySurface,
{
    driver: Option<D>,
    relay: Option<R>,
    input: Option<I>,
    display: Option<S>,
    config: Option<FixtureConfig>,
}

impl<D, R, I, S> Default for ControllerBuilder<D, R, I, S>
where
    D: StepperDriver,
    R: Relay,
    I: RawInput,
    S: DisplaySurface,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D, R, I, S> ControllerBuilder<D, R, I, S>
where
    D: StepperDriver,
    R: Relay,
    I: RawInput,
    S: DisplaySurface,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            driver: None,
            relay: None,
            input: None,
            display: None,
            config: None,
        }
    }

    /// Set the motor driver.
    pub fn driver(mut self, driver: D) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Set the relay output.
    pub fn relay(mut self, relay: R) -> Self {
        self.relay = Some(relay);
        self
    }

    /// Set the raw encoder input.
    pub fn input(mut self, input: I) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the display surface.
    pub fn display(mut self, display: S) -> Self {
        self.display = Some(display);
        self
    }

    /// Use a fixture configuration instead of the defaults.
    pub fn config(mut self, config: FixtureConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the Controller.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingPart`] if a collaborator was not set, or
    /// the validation error of an invalid configuration.
    pub fn build(self) -> Result<Controller<D, R, I, S>> {
        let driver = self.driver.ok_or(Error::Config(ConfigError::MissingPart("driver")))?;
        let relay = self.relay.ok_or(Error::Config(ConfigError::MissingPart("relay")))?;
        let input = self.input.ok_or(Error::Config(ConfigError::MissingPart("input")))?;
        let display = self
            .display
            .ok_or(Error::Config(ConfigError::MissingPart("display")))?;

        let config = self.config.unwrap_or_default();
        validate_config(&config)?;

        Ok(Controller::new(driver, relay, input, display, &config))
    }
}
