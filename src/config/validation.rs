//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{AxisConfig, MachineConfig, MoveConfig};

/// Validate a machine configuration.
///
/// Checks:
/// - Every ramp (global, per axis, per move, routine) has `0 < min_delay < max_delay`
///   and an easing exponent >= 1
/// - Axis mechanics are positive
/// - Moves reference existing axes and set exactly one target
/// - The circle routine, if present, yields a usable step period
pub fn validate_config(config: &MachineConfig) -> Result<()> {
    config.ramp.validate()?;

    for (_, axis) in config.axes.iter() {
        validate_axis(axis)?;
    }

    for (name, mv) in config.moves.iter() {
        validate_move(name.as_str(), mv, config)?;
    }

    if let Some(ref ramp) = config.back_and_forth.ramp {
        ramp.validate()?;
    }

    if let Some(ref circle) = config.circle {
        circle.plan()?;
    }

    Ok(())
}

fn validate_axis(axis: &AxisConfig) -> Result<()> {
    let diameter = axis.pulley_diameter.0;
    if !diameter.is_finite() || diameter <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidPulleyDiameter(diameter)));
    }

    if axis.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)));
    }

    if let Some(ref ramp) = axis.ramp {
        ramp.validate()?;
    }

    Ok(())
}

fn validate_move(name: &str, mv: &MoveConfig, config: &MachineConfig) -> Result<()> {
    if config.axis(mv.axis.as_str()).is_none() {
        return Err(Error::Config(ConfigError::AxisNotFound(mv.axis.clone())));
    }

    mv.target(name)?;

    if let Some(ref ramp) = mv.ramp {
        ramp.validate()?;
    }

    Ok(())
}
