//! Error types for rotary-indexer.
//!
//! Out-of-range operator input is never an error: it is clamped or wrapped at
//! the model boundary. What remains is configuration, pin I/O and the fatal
//! startup failures.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all rotary-indexer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// GPIO operation failed on a named line
    Hardware(HardwareError),
    /// Display or driver failed to come up; not retried
    Init(InitError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid microstep value (must be 1, 2, 4, 8 or 16)
    InvalidMicrosteps(u16),
    /// Base steps per revolution must be non-zero
    InvalidBaseSteps(u16),
    /// Encoder pulses per detent must be non-zero
    InvalidPulsesPerDetent(u8),
    /// At least one menu item must be visible
    InvalidVisibleItems(u8),
    /// Step pulse width must be non-zero
    InvalidStepPulse(u32),
    /// Relay-on duration outside the adjustable range
    RelayOnOutOfRange(u32),
    /// Settle duration outside the adjustable range
    SettleOutOfRange(u32),
    /// A required collaborator was not supplied to a builder
    MissingPart(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// The output or input line on which a pin operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareError {
    /// STEP line
    StepPin,
    /// DIR line
    DirectionPin,
    /// ENABLE line
    EnablePin,
    /// One of the MS1/MS2/MS3 microstep select lines
    MicrostepPin,
    /// Relay output
    RelayPin,
    /// Encoder CLK or DT line
    EncoderPin,
    /// Encoder push button line
    ButtonPin,
}

/// Startup failures. There is no degraded mode without display or motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// The display did not respond to initialization
    Display,
    /// The motor driver lines could not be put in their idle state
    Driver,
    /// The relay could not be driven inactive
    Relay,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Hardware(e) => write!(f, "Hardware error: {}", e),
            Error::Init(e) => write!(f, "Initialization failed: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidMicrosteps(v) => {
                write!(f, "Invalid microsteps: {}. Valid values: 1, 2, 4, 8, 16", v)
            }
            ConfigError::InvalidBaseSteps(v) => {
                write!(f, "Invalid base steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidPulsesPerDetent(v) => {
                write!(f, "Invalid pulses per detent: {}. Must be > 0", v)
            }
            ConfigError::InvalidVisibleItems(v) => {
                write!(f, "Invalid visible menu items: {}. Must be > 0", v)
            }
            ConfigError::InvalidStepPulse(v) => {
                write!(f, "Invalid step pulse width: {} us. Must be > 0", v)
            }
            ConfigError::RelayOnOutOfRange(v) => {
                write!(f, "Relay on time {} ms outside 50-5000 ms", v)
            }
            ConfigError::SettleOutOfRange(v) => {
                write!(f, "Settle time {} ms outside 50-5000 ms", v)
            }
            ConfigError::MissingPart(part) => write!(f, "{} is required", part),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = match self {
            HardwareError::StepPin => "STEP",
            HardwareError::DirectionPin => "DIR",
            HardwareError::EnablePin => "ENABLE",
            HardwareError::MicrostepPin => "microstep select",
            HardwareError::RelayPin => "relay",
            HardwareError::EncoderPin => "encoder",
            HardwareError::ButtonPin => "button",
        };
        write!(f, "{} pin operation failed", line)
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Display => write!(f, "display"),
            InitError::Driver => write!(f, "motor driver"),
            InitError::Relay => write!(f, "relay output"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Error::Hardware(e)
    }
}

impl From<InitError> for Error {
    fn from(e: InitError) -> Self {
        Error::Init(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for HardwareError {}

#[cfg(feature = "std")]
impl std::error::Error for InitError {}
