//! Motion module for stepper-ramp.
//!
//! Pure computation: pulse profiles, move planning and circle steps. No I/O.

mod circle;
pub mod easing;
mod executor;
mod profile;
mod request;

pub use circle::{CirclePlan, CircleStep};
pub use executor::{Pulse, PulseExecutor};
pub use profile::{Direction, MotionPhase, PulseProfile};
pub use request::{pulses_for_distance, MoveRequest, PlannedMove};

/// Compute a pulse profile.
///
/// Shorthand for [`PulseProfile::generate`].
pub fn generate(
    total_pulses: u32,
    ramp_pulses: u32,
    min_delay_us: u32,
    max_delay_us: u32,
    easing_exponent: f32,
) -> crate::error::Result<PulseProfile> {
    PulseProfile::generate(total_pulses, ramp_pulses, min_delay_us, max_delay_us, easing_exponent)
}
