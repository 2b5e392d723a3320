//! Axis module for stepper-ramp.
//!
//! Pin bindings, the blocking pulse emitter and the configuration-driven facade.

mod binding;
mod emitter;
mod system;

pub use binding::{AxisBinding, PulseTarget};
pub use emitter::PulseEmitter;
pub use system::MotionSystem;
