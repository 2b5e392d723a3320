//! Named moves and the built-in motion routines.

use heapless::String;
use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::motion::CirclePlan;

use super::ramp::RampConfig;
use super::units::Millimeters;

/// A named single-axis move.
///
/// Exactly one of `distance` or `pulses` must be set.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveConfig {
    /// Target axis name (must match an axis in config).
    pub axis: String<32>,

    /// Signed travel in millimeters.
    #[serde(default, rename = "distance_mm")]
    pub distance: Option<Millimeters>,

    /// Signed raw pulse count.
    #[serde(default)]
    pub pulses: Option<i64>,

    /// Ramp override for this move only.
    #[serde(default)]
    pub ramp: Option<RampConfig>,
}

/// Where a named move goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveTarget {
    /// Travel in millimeters, converted through the axis mechanics.
    Distance(Millimeters),
    /// Raw signed pulse count.
    Pulses(i64),
}

impl MoveConfig {
    /// Resolve the target, rejecting moves that set both or neither field.
    pub fn target(&self, name: &str) -> Result<MoveTarget> {
        match (self.distance, self.pulses) {
            (Some(d), None) => Ok(MoveTarget::Distance(d)),
            (None, Some(p)) => Ok(MoveTarget::Pulses(p)),
            _ => Err(ConfigError::AmbiguousMoveTarget(
                String::try_from(name).unwrap_or_default(),
            )
            .into()),
        }
    }
}

/// Two axes driven together forward, then back.
#[derive(Debug, Clone, Deserialize)]
pub struct BackAndForthConfig {
    /// Pulses per leg.
    #[serde(default = "default_back_and_forth_pulses")]
    pub pulses: u32,

    /// Dwell after the forward leg (milliseconds).
    #[serde(default = "default_pause_after_forward")]
    pub pause_after_forward_ms: u32,

    /// Dwell after the reverse leg (milliseconds).
    #[serde(default = "default_pause_after_reverse")]
    pub pause_after_reverse_ms: u32,

    /// Ramp override for this routine.
    #[serde(default)]
    pub ramp: Option<RampConfig>,
}

fn default_back_and_forth_pulses() -> u32 {
    2500
}

fn default_pause_after_forward() -> u32 {
    200
}

fn default_pause_after_reverse() -> u32 {
    500
}

impl Default for BackAndForthConfig {
    fn default() -> Self {
        Self {
            pulses: default_back_and_forth_pulses(),
            pause_after_forward_ms: default_pause_after_forward(),
            pause_after_reverse_ms: default_pause_after_reverse(),
            ramp: None,
        }
    }
}

/// Constant-speed circle traced by two axes.
#[derive(Debug, Clone, Deserialize)]
pub struct CircleConfig {
    /// Circle radius.
    #[serde(rename = "radius_mm")]
    pub radius: Millimeters,

    /// Steps taken for one full turn.
    pub steps_per_revolution: u32,

    /// Rotational speed.
    pub speed_rpm: u32,
}

impl CircleConfig {
    /// Build the circle plan for these parameters.
    pub fn plan(&self) -> Result<CirclePlan> {
        CirclePlan::new(self.radius, self.steps_per_revolution, self.speed_rpm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn make_move(distance: Option<f32>, pulses: Option<i64>) -> MoveConfig {
        MoveConfig {
            axis: String::try_from("x").unwrap(),
            distance: distance.map(Millimeters),
            pulses,
            ramp: None,
        }
    }

    #[test]
    fn test_move_target() {
        assert_eq!(
            make_move(Some(400.0), None).target("feed").unwrap(),
            MoveTarget::Distance(Millimeters(400.0))
        );
        assert_eq!(
            make_move(None, Some(-2500)).target("back").unwrap(),
            MoveTarget::Pulses(-2500)
        );
    }

    #[test]
    fn test_move_target_ambiguous() {
        for mv in [make_move(Some(1.0), Some(1)), make_move(None, None)] {
            assert!(matches!(
                mv.target("bad"),
                Err(Error::Config(ConfigError::AmbiguousMoveTarget(_)))
            ));
        }
    }

    #[test]
    fn test_back_and_forth_defaults() {
        let cfg = BackAndForthConfig::default();
        assert_eq!(cfg.pulses, 2500);
        assert_eq!(cfg.pause_after_forward_ms, 200);
        assert_eq!(cfg.pause_after_reverse_ms, 500);
        assert!(cfg.ramp.is_none());
    }
}
