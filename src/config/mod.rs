//! Configuration module for stepper-ramp.
//!
//! Provides types for loading and validating axis, ramp and routine configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod axis;
mod ramp;
mod routine;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::AxisConfig;
pub use ramp::RampConfig;
pub use routine::{BackAndForthConfig, CircleConfig, MoveConfig, MoveTarget};
pub use system::MachineConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Microseconds, Millimeters};
