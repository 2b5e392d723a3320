//! Error types for stepper-ramp.
//!
//! Provides unified error handling across configuration, profile planning and pulse output.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-ramp operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Profile planning error
    Motion(MotionError),
    /// Pin output error
    Axis(AxisError),
}

/// Configuration-related errors.
///
/// Every kinematic parameter error is reported before a single pulse is emitted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Axis name not found in configuration
    AxisNotFound(heapless::String<32>),
    /// Move name not found in configuration
    MoveNotFound(heapless::String<32>),
    /// No `[circle]` section in configuration
    CircleNotConfigured,
    /// Minimum delay must be at least 1 µs
    ZeroMinDelay,
    /// Minimum delay (fastest) must be shorter than maximum delay (slowest)
    InvalidDelayRange {
        /// Minimum delay in microseconds
        min_us: u32,
        /// Maximum delay in microseconds
        max_us: u32,
    },
    /// Easing exponent must be finite and >= 1
    InvalidEasingExponent(f32),
    /// Pulley diameter must be finite and > 0
    InvalidPulleyDiameter(f32),
    /// Steps per revolution must be > 0
    InvalidStepsPerRevolution(u32),
    /// Circle speed must be > 0 RPM
    InvalidSpeed(u32),
    /// Circle radius must be finite and > 0
    InvalidRadius(f32),
    /// Axis name longer than 32 bytes
    NameTooLong(usize),
    /// A named move must set exactly one of `distance_mm` or `pulses`
    AmbiguousMoveTarget(heapless::String<32>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Profile planning errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionError {
    /// Requested distance is NaN or infinite
    InvalidDistance(f32),
    /// Circle step period is too short to split into high and low halves
    StepDelayTooShort {
        /// Steps per revolution
        steps_per_revolution: u32,
        /// Requested speed in RPM
        rpm: u32,
    },
    /// Pulse count does not fit the profile's counter
    Overflow,
}

/// Pin output errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisError {
    /// Pin operation failed
    PinError,
    /// Binding does not belong to the axis the move was planned for
    WrongAxis {
        /// Axis the move targets
        expected: heapless::String<32>,
        /// Axis the binding is named after
        found: heapless::String<32>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Axis(e) => write!(f, "Axis error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::AxisNotFound(name) => write!(f, "Axis '{}' not found", name),
            ConfigError::MoveNotFound(name) => write!(f, "Move '{}' not found", name),
            ConfigError::CircleNotConfigured => write!(f, "No circle routine configured"),
            ConfigError::ZeroMinDelay => write!(f, "Minimum delay must be at least 1 us"),
            ConfigError::InvalidDelayRange { min_us, max_us } => {
                write!(f, "Invalid delay range: min ({} us) must be < max ({} us)", min_us, max_us)
            }
            ConfigError::InvalidEasingExponent(v) => {
                write!(f, "Invalid easing exponent: {}. Must be >= 1", v)
            }
            ConfigError::InvalidPulleyDiameter(v) => {
                write!(f, "Invalid pulley diameter: {} mm. Must be > 0", v)
            }
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidSpeed(v) => write!(f, "Invalid speed: {} rpm. Must be > 0", v),
            ConfigError::InvalidRadius(v) => write!(f, "Invalid radius: {} mm. Must be > 0", v),
            ConfigError::NameTooLong(len) => {
                write!(f, "Name is {} bytes long. Must be at most 32", len)
            }
            ConfigError::AmbiguousMoveTarget(name) => {
                write!(f, "Move '{}' must set exactly one of distance_mm or pulses", name)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::InvalidDistance(d) => write!(f, "Invalid distance: {}", d),
            MotionError::StepDelayTooShort { steps_per_revolution, rpm } => write!(
                f,
                "Step period too short for {} steps/rev at {} rpm",
                steps_per_revolution, rpm
            ),
            MotionError::Overflow => write!(f, "Pulse count overflow"),
        }
    }
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisError::PinError => write!(f, "GPIO pin operation failed"),
            AxisError::WrongAxis { expected, found } => {
                write!(f, "Move targets axis '{}' but binding is '{}'", expected, found)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

impl From<AxisError> for Error {
    fn from(e: AxisError) -> Self {
        Error::Axis(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}

#[cfg(feature = "std")]
impl std::error::Error for AxisError {}
