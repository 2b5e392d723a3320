//! # stepper-ramp
//!
//! Eased trapezoidal step/direction pulse generation for stepper motors with
//! embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Pulse profiles**: acceleration, cruise and deceleration phases as per-pulse delays
//! - **Ease-out ramps**: `1 - (1 - t)^k` easing, linear at `k = 1`
//! - **Short-move handling**: ramps clamp to half the move, never overlapping
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR, `DelayNs` for timing
//! - **Synchronized pairs**: two axes pulsed on shared edges
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_ramp::{MoveRequest, PulseEmitter, AxisBinding, RampConfig};
//! use stepper_ramp::config::units::Millimeters;
//!
//! let mut x = AxisBinding::new("x", dir_pin, step_pin)?;
//! let mut emitter = PulseEmitter::new(delay);
//!
//! emitter.move_axis(
//!     &MoveRequest::Distance {
//!         distance: Millimeters(400.0),
//!         pulley_diameter: Millimeters(12.73),
//!         steps_per_revolution: 800,
//!         ramp: RampConfig::new(500, 450, 2000, 2.5),
//!     },
//!     &mut x,
//! )?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod axis;
pub mod config;
pub mod error;
pub mod motion;

// Re-exports for ergonomic API
pub use axis::{AxisBinding, MotionSystem, PulseEmitter, PulseTarget};
pub use config::{validate_config, AxisConfig, MachineConfig, RampConfig};
pub use error::{Error, Result};
pub use motion::{generate, Direction, MotionPhase, MoveRequest, PlannedMove, PulseProfile};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Microseconds, Millimeters};
