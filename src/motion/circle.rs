//! Constant-speed circle approximation for two axes.
//!
//! Each step pulses both axes once, with each axis's direction taken from the
//! sign of its coordinate on the circle at that angle. Step magnitudes are not
//! scaled per axis, so the path is a direction-only approximation of a circle,
//! not a vector-interpolated one.

use core::f32::consts::TAU;

use libm::{cosf, sinf};

use crate::config::units::Millimeters;
use crate::error::{ConfigError, MotionError, Result};

use super::profile::Direction;

/// Microseconds per minute.
const MICROS_PER_MINUTE: u64 = 60 * 1_000_000;

/// One step around the circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CircleStep {
    /// Step number within the revolution.
    pub index: u32,
    /// X coordinate on the circle.
    pub target_x: f32,
    /// Y coordinate on the circle.
    pub target_y: f32,
    /// Direction for the X pulse.
    pub x: Direction,
    /// Direction for the Y pulse.
    pub y: Direction,
}

/// Validated circle parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePlan {
    radius: Millimeters,
    steps_per_revolution: u32,
    step_delay_us: u32,
}

impl CirclePlan {
    /// Plan a circle of `radius` traced in `steps_per_revolution` steps at `rpm`.
    ///
    /// The step period is `60_000_000 / (steps_per_revolution * rpm)` µs,
    /// split evenly between the X and Y pulses.
    ///
    /// # Errors
    ///
    /// - `InvalidRadius` unless the radius is finite and positive
    /// - `InvalidStepsPerRevolution` / `InvalidSpeed` for zero values
    /// - `StepDelayTooShort` if half the period rounds to 0 µs
    pub fn new(radius: Millimeters, steps_per_revolution: u32, rpm: u32) -> Result<Self> {
        if !radius.0.is_finite() || radius.0 <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius.0).into());
        }
        if steps_per_revolution == 0 {
            return Err(ConfigError::InvalidStepsPerRevolution(0).into());
        }
        if rpm == 0 {
            return Err(ConfigError::InvalidSpeed(0).into());
        }

        let step_delay = MICROS_PER_MINUTE / (u64::from(steps_per_revolution) * u64::from(rpm));
        if step_delay < 2 {
            return Err(MotionError::StepDelayTooShort { steps_per_revolution, rpm }.into());
        }

        Ok(Self {
            radius,
            steps_per_revolution,
            // bounded by MICROS_PER_MINUTE
            step_delay_us: step_delay as u32,
        })
    }

    /// Circle radius.
    #[inline]
    pub fn radius(&self) -> Millimeters {
        self.radius
    }

    /// Steps per revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
    }

    /// Full period of one step in microseconds.
    #[inline]
    pub fn step_delay_us(&self) -> u32 {
        self.step_delay_us
    }

    /// High (and low) hold time for each axis pulse.
    #[inline]
    pub fn half_period_us(&self) -> u32 {
        self.step_delay_us / 2
    }

    /// The step at `index`.
    pub fn step(&self, index: u32) -> CircleStep {
        let angle = index as f32 * (TAU / self.steps_per_revolution as f32);
        let target_x = self.radius.0 * cosf(angle);
        let target_y = self.radius.0 * sinf(angle);
        CircleStep {
            index,
            target_x,
            target_y,
            x: Direction::from_coordinate(target_x),
            y: Direction::from_coordinate(target_y),
        }
    }

    /// Every step of one revolution, in order.
    pub fn steps(&self) -> impl Iterator<Item = CircleStep> + '_ {
        (0..self.steps_per_revolution).map(move |i| self.step(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_step_delay() {
        // 60e6 / (800 * 30) = 2500 us
        let plan = CirclePlan::new(Millimeters(50.0), 800, 30).unwrap();
        assert_eq!(plan.step_delay_us(), 2500);
        assert_eq!(plan.half_period_us(), 1250);
        assert_eq!(plan.steps().count(), 800);
    }

    #[test]
    fn test_quadrant_directions() {
        let plan = CirclePlan::new(Millimeters(50.0), 8, 60).unwrap();

        // 45 degrees: both positive
        let s = plan.step(1);
        assert_eq!((s.x, s.y), (Direction::Forward, Direction::Forward));
        // 135 degrees: x negative, y positive
        let s = plan.step(3);
        assert_eq!((s.x, s.y), (Direction::Reverse, Direction::Forward));
        // 225 degrees
        let s = plan.step(5);
        assert_eq!((s.x, s.y), (Direction::Reverse, Direction::Reverse));
        // 315 degrees
        let s = plan.step(7);
        assert_eq!((s.x, s.y), (Direction::Forward, Direction::Reverse));
    }

    #[test]
    fn test_zero_coordinate_is_reverse() {
        let plan = CirclePlan::new(Millimeters(50.0), 8, 60).unwrap();
        let s = plan.step(0);
        assert_eq!(s.y, Direction::Reverse);
        assert!((s.target_x - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_circle() {
        assert!(matches!(
            CirclePlan::new(Millimeters(0.0), 800, 30),
            Err(Error::Config(ConfigError::InvalidRadius(_)))
        ));
        assert!(matches!(
            CirclePlan::new(Millimeters(50.0), 0, 30),
            Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
        ));
        assert!(matches!(
            CirclePlan::new(Millimeters(50.0), 800, 0),
            Err(Error::Config(ConfigError::InvalidSpeed(0)))
        ));
        assert!(matches!(
            CirclePlan::new(Millimeters(50.0), 1_000_000, 60),
            Err(Error::Motion(MotionError::StepDelayTooShort { .. }))
        ));
    }
}
