//! Top-level modes.

/// Exactly one mode is active at a time; it decides which handler runs on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemMode {
    /// Scrolling main menu, also hosts the splash and notice holds.
    #[default]
    MainMenu,
    /// Full-revolution relay/step cycle in progress.
    RunningCycle,
    /// Choosing a target step index.
    PositioningSetup,
    /// Moving to the chosen target; completes within the tick that enters it.
    Positioning,
    /// Coils released until the next press.
    MotorDisabled,
    /// Choosing the microstep resolution.
    MicrostepSetup,
    /// Adjusting the relay-on duration.
    RelayOnTimeSetup,
    /// Adjusting the settle duration.
    RelayOffTimeSetup,
}

impl SystemMode {
    /// Get mode name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            SystemMode::MainMenu => "MainMenu",
            SystemMode::RunningCycle => "RunningCycle",
            SystemMode::PositioningSetup => "PositioningSetup",
            SystemMode::Positioning => "Positioning",
            SystemMode::MotorDisabled => "MotorDisabled",
            SystemMode::MicrostepSetup => "MicrostepSetup",
            SystemMode::RelayOnTimeSetup => "RelayOnTimeSetup",
            SystemMode::RelayOffTimeSetup => "RelayOffTimeSetup",
        }
    }
}
