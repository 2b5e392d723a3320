//! Move requests and planning.

use crate::config::units::Millimeters;
use crate::config::RampConfig;
use crate::error::{ConfigError, MotionError, Result};

use super::profile::{Direction, PulseProfile};

/// Pulses needed to move a belt axis by `distance` (sign ignored).
///
/// `round(|distance| / (pulley_diameter * pi) * steps_per_revolution)`
///
/// # Errors
///
/// - `MotionError::InvalidDistance` for NaN or infinite distances
/// - `ConfigError::InvalidPulleyDiameter` unless the diameter is finite and positive
/// - `ConfigError::InvalidStepsPerRevolution` for 0
/// - `MotionError::Overflow` if the count does not fit in `u32`
pub fn pulses_for_distance(
    distance: Millimeters,
    pulley_diameter: Millimeters,
    steps_per_revolution: u32,
) -> Result<u32> {
    if !distance.0.is_finite() {
        return Err(MotionError::InvalidDistance(distance.0).into());
    }
    if !pulley_diameter.0.is_finite() || pulley_diameter.0 <= 0.0 {
        return Err(ConfigError::InvalidPulleyDiameter(pulley_diameter.0).into());
    }
    if steps_per_revolution == 0 {
        return Err(ConfigError::InvalidStepsPerRevolution(0).into());
    }

    let circumference = pulley_diameter.0 * core::f32::consts::PI;
    let pulses = libm::roundf(distance.abs().0 / circumference * steps_per_revolution as f32);

    if pulses >= u32::MAX as f32 {
        return Err(MotionError::Overflow.into());
    }
    Ok(pulses as u32)
}

/// A single-axis move, by raw pulse count or by linear distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveRequest {
    /// Signed pulse count; the sign selects the direction.
    PulseCount {
        /// Signed number of pulses.
        pulses: i64,
        /// Kinematic limits.
        ramp: RampConfig,
    },
    /// Signed travel on a belt axis; the sign selects the direction.
    Distance {
        /// Signed travel.
        distance: Millimeters,
        /// Pitch diameter of the drive pulley.
        pulley_diameter: Millimeters,
        /// Pulses per motor revolution.
        steps_per_revolution: u32,
        /// Kinematic limits.
        ramp: RampConfig,
    },
}

/// Direction plus delay profile, ready to emit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedMove {
    /// Direction held for the whole move.
    pub direction: Direction,
    /// Delay profile.
    pub profile: PulseProfile,
}

impl PlannedMove {
    /// The same profile travelled the other way.
    pub fn reversed(self) -> Self {
        Self {
            direction: self.direction.reversed(),
            profile: self.profile,
        }
    }
}

impl MoveRequest {
    /// Direction derived from the sign of the request.
    pub fn direction(&self) -> Direction {
        match self {
            MoveRequest::PulseCount { pulses, .. } => Direction::from_pulses(*pulses),
            MoveRequest::Distance { distance, .. } => Direction::from_distance(distance.0),
        }
    }

    /// Kinematic limits of the request.
    pub fn ramp(&self) -> &RampConfig {
        match self {
            MoveRequest::PulseCount { ramp, .. } | MoveRequest::Distance { ramp, .. } => ramp,
        }
    }

    /// Unsigned pulse count of the move.
    pub fn total_pulses(&self) -> Result<u32> {
        match *self {
            MoveRequest::PulseCount { pulses, .. } => {
                u32::try_from(pulses.unsigned_abs()).map_err(|_| MotionError::Overflow.into())
            }
            MoveRequest::Distance {
                distance,
                pulley_diameter,
                steps_per_revolution,
                ..
            } => pulses_for_distance(distance, pulley_diameter, steps_per_revolution),
        }
    }

    /// Compute direction and profile.
    ///
    /// All validation happens here, so a request that plans successfully can
    /// be emitted without further checks.
    pub fn plan(&self) -> Result<PlannedMove> {
        let total = self.total_pulses()?;
        let profile = PulseProfile::from_ramp(total, self.ramp())?;
        Ok(PlannedMove {
            direction: self.direction(),
            profile,
        })
    }
}
