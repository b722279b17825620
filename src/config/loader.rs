//! Configuration loading from files (std only).

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::FixtureConfig;

const MESSAGE_CAPACITY: usize = 128;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use rotary_indexer::load_config;
///
/// let config = load_config("fixture.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FixtureConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        let msg = bounded_message(format_args!("{}: {}", path.display(), e));
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<FixtureConfig> {
    let config: FixtureConfig = toml::from_str(content).map_err(|e| {
        let msg = match e.span() {
            Some(span) => bounded_message(format_args!("{} (at byte {})", e.message(), span.start)),
            None => bounded_message(format_args!("{}", e.message())),
        };
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

/// Render into an error payload, keeping as many whole characters as fit.
fn bounded_message(args: fmt::Arguments<'_>) -> heapless::String<MESSAGE_CAPACITY> {
    struct Bounded(heapless::String<MESSAGE_CAPACITY>);

    impl fmt::Write for Bounded {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            for c in s.chars() {
                if self.0.push(c).is_err() {
                    break;
                }
            }
            Ok(())
        }
    }

    let mut out = Bounded(heapless::String::new());
    let _ = fmt::write(&mut out, args);
    out.0
}
