//! Configuration loading from files (std only).

use core::fmt::Write;
use std::fs;
use std::path::Path;

use heapless::String;

use crate::error::{ConfigError, Error, Result};

use super::MachineConfig;

/// Load and validate a machine description from a TOML file.
///
/// # Errors
///
/// - `IoError` naming the path if the file cannot be read
/// - `ParseError` with the line number if the TOML is malformed
/// - any validation error from [`validate_config`](super::validate_config)
///
/// # Example
///
/// ```rust,ignore
/// use stepper_ramp::load_config;
///
/// let config = load_config("machine.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MachineConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        let msg = bounded_message(format_args!("{}: {}", path.display(), e));
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse and validate a machine description from a TOML string.
///
/// # Errors
///
/// Returns `ParseError` (prefixed with the line number when known) if the
/// TOML is malformed, or the first validation error.
pub fn parse_config(content: &str) -> Result<MachineConfig> {
    let config: MachineConfig = toml::from_str(content).map_err(|e| {
        let msg = match e.span() {
            Some(span) => {
                let before = content.get(..span.start).unwrap_or(content);
                let line = before.matches('\n').count() + 1;
                bounded_message(format_args!("line {}: {}", line, e.message()))
            }
            None => bounded_message(format_args!("{}", e.message())),
        };
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

/// Format into a fixed-capacity message, cutting at a char boundary.
fn bounded_message(args: core::fmt::Arguments<'_>) -> String<128> {
    let full = std::fmt::format(args);
    let mut end = full.len().min(128);
    while !full.is_char_boundary(end) {
        end -= 1;
    }

    let mut msg = String::new();
    let _ = msg.write_str(&full[..end]);
    msg
}
