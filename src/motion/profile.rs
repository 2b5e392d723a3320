//! Pulse profile calculation.
//!
//! A profile is an ordered sequence of per-pulse delays split into three
//! contiguous phases: acceleration, cruise and deceleration. Delays are
//! computed on demand from the phase lengths, so a profile is a handful of
//! integers regardless of how many pulses it describes.

use crate::config::RampConfig;
use crate::error::Result;

use super::easing::{ease_out, lerp_us, ramp_fraction};
use super::executor::PulseExecutor;

/// Direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Positive travel (direction pin high unless inverted).
    Forward,
    /// Negative travel (direction pin low unless inverted).
    Reverse,
}

impl Direction {
    /// Get direction from signed pulse count.
    #[inline]
    pub fn from_pulses(pulses: i64) -> Self {
        if pulses >= 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Get direction from a signed distance. Zero counts as forward.
    #[inline]
    pub fn from_distance(distance: f32) -> Self {
        if distance >= 0.0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Get direction from a circle coordinate. Only strictly positive is forward.
    #[inline]
    pub fn from_coordinate(coordinate: f32) -> Self {
        if coordinate > 0.0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Direction pin level, taking inversion into account.
    #[inline]
    pub fn pin_high(self, invert: bool) -> bool {
        match self {
            Direction::Forward => !invert,
            Direction::Reverse => invert,
        }
    }
}

/// Phase a pulse belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Delays shrinking from `max_delay` toward `min_delay`.
    Accelerating,
    /// Constant delay.
    Cruising,
    /// Delays growing from `min_delay` toward `max_delay`.
    Decelerating,
    /// Past the last pulse.
    Complete,
}

/// Computed delay profile for one move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseProfile {
    /// Total pulses in the move.
    pub total_pulses: u32,

    /// Pulses in the acceleration phase (effective ramp length).
    pub accel_pulses: u32,

    /// Pulses in the cruise phase.
    pub cruise_pulses: u32,

    /// Pulses in the deceleration phase (always equal to `accel_pulses`).
    pub decel_pulses: u32,

    /// Fastest delay in microseconds.
    pub min_delay_us: u32,

    /// Slowest delay in microseconds.
    pub max_delay_us: u32,

    /// Delay used for every cruise pulse.
    pub cruise_delay_us: u32,

    /// Ease-out exponent applied to both ramps.
    pub easing_exponent: f32,
}

impl PulseProfile {
    /// Compute the profile for a move of `total_pulses`.
    ///
    /// Ramps longer than half the move are clamped to `total_pulses / 2`; an
    /// odd leftover pulse cruises. The cruise phase runs at the speed the
    /// acceleration phase ended at: `min_delay` normally, or `max_delay` when a
    /// requested ramp collapsed to nothing (a single-pulse move never leaves
    /// its starting speed).
    ///
    /// # Errors
    ///
    /// Rejects `min_delay == 0`, `min_delay >= max_delay` and easing exponents
    /// that are not finite or below 1, even for an empty move.
    pub fn generate(
        total_pulses: u32,
        ramp_pulses: u32,
        min_delay_us: u32,
        max_delay_us: u32,
        easing_exponent: f32,
    ) -> Result<Self> {
        RampConfig::new(ramp_pulses, min_delay_us, max_delay_us, easing_exponent).validate()?;

        let ramp = if u64::from(total_pulses) < 2 * u64::from(ramp_pulses) {
            total_pulses / 2
        } else {
            ramp_pulses
        };
        let cruise_pulses = total_pulses - 2 * ramp;

        let cruise_delay_us = if ramp == 0 && ramp_pulses > 0 {
            max_delay_us
        } else {
            min_delay_us
        };

        Ok(Self {
            total_pulses,
            accel_pulses: ramp,
            cruise_pulses,
            decel_pulses: ramp,
            min_delay_us,
            max_delay_us,
            cruise_delay_us,
            easing_exponent,
        })
    }

    /// Compute the profile using ramp parameters from configuration.
    pub fn from_ramp(total_pulses: u32, ramp: &RampConfig) -> Result<Self> {
        Self::generate(
            total_pulses,
            ramp.ramp_pulses,
            ramp.min_delay.0,
            ramp.max_delay.0,
            ramp.easing_exponent,
        )
    }

    /// Create a zero-length profile (no motion).
    pub fn empty() -> Self {
        Self {
            total_pulses: 0,
            accel_pulses: 0,
            cruise_pulses: 0,
            decel_pulses: 0,
            min_delay_us: 0,
            max_delay_us: 0,
            cruise_delay_us: 0,
            easing_exponent: 1.0,
        }
    }

    /// Number of pulses.
    #[inline]
    pub fn len(&self) -> u32 {
        self.total_pulses
    }

    /// Check if this is a zero-length profile.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_pulses == 0
    }

    /// Get the phase at a given pulse index.
    pub fn phase_at(&self, index: u32) -> MotionPhase {
        if index >= self.total_pulses {
            MotionPhase::Complete
        } else if index < self.accel_pulses {
            MotionPhase::Accelerating
        } else if index < self.accel_pulses + self.cruise_pulses {
            MotionPhase::Cruising
        } else {
            MotionPhase::Decelerating
        }
    }

    /// Delay for the pulse at `index`, or `None` past the end.
    pub fn delay_at(&self, index: u32) -> Option<u32> {
        match self.phase_at(index) {
            MotionPhase::Complete => None,
            MotionPhase::Accelerating => Some(self.accel_delay(index)),
            MotionPhase::Cruising => Some(self.cruise_delay_us),
            MotionPhase::Decelerating => {
                Some(self.decel_delay(index - self.accel_pulses - self.cruise_pulses))
            }
        }
    }

    fn accel_delay(&self, i: u32) -> u32 {
        let t = ease_out(ramp_fraction(i, self.accel_pulses), self.easing_exponent);
        lerp_us(self.max_delay_us, self.min_delay_us, t)
    }

    fn decel_delay(&self, i: u32) -> u32 {
        let t = ease_out(ramp_fraction(i, self.decel_pulses), self.easing_exponent);
        lerp_us(self.min_delay_us, self.max_delay_us, t)
    }

    /// Delays of the acceleration phase.
    pub fn acceleration(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.accel_pulses).map(move |i| self.accel_delay(i))
    }

    /// Delays of the cruise phase.
    pub fn cruise(&self) -> impl Iterator<Item = u32> {
        core::iter::repeat(self.cruise_delay_us).take(self.cruise_pulses as usize)
    }

    /// Delays of the deceleration phase.
    pub fn deceleration(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.decel_pulses).map(move |i| self.decel_delay(i))
    }

    /// All delays in emission order.
    pub fn delays(&self) -> impl Iterator<Item = u32> + '_ {
        self.acceleration().chain(self.cruise()).chain(self.deceleration())
    }

    /// Walk the profile pulse by pulse.
    pub fn iter(&self) -> PulseExecutor {
        PulseExecutor::new(*self)
    }

    /// Total wall time of the move in microseconds.
    ///
    /// Each pulse holds high and low for its delay, so a pulse lasts `2 * delay`.
    /// Saturates at `u64::MAX`.
    pub fn estimated_duration_us(&self) -> u64 {
        let cruise = 2 * u64::from(self.cruise_delay_us);
        let cruise = cruise.saturating_mul(u64::from(self.cruise_pulses));

        self.acceleration()
            .chain(self.deceleration())
            .fold(cruise, |acc, d| acc.saturating_add(2 * u64::from(d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_trapezoid_linear() {
        let profile = PulseProfile::generate(2500, 500, 450, 2000, 1.0).unwrap();

        assert_eq!(profile.accel_pulses, 500);
        assert_eq!(profile.cruise_pulses, 1500);
        assert_eq!(profile.decel_pulses, 500);

        let accel: Vec<u32> = profile.acceleration().collect();
        assert_eq!(accel[0], 2000);
        assert_eq!(accel[499], 450);
        assert!(profile.cruise().all(|d| d == 450));

        let decel: Vec<u32> = profile.deceleration().collect();
        assert_eq!(decel[0], 450);
        assert_eq!(decel[499], 2000);
    }

    #[test]
    fn test_short_move_clamps_ramp() {
        for total in [0u32, 1, 2, 3, 4, 7, 10] {
            let profile = PulseProfile::generate(total, 100, 450, 2000, 2.5).unwrap();
            assert_eq!(profile.accel_pulses, total / 2);
            assert_eq!(profile.decel_pulses, total / 2);
            assert_eq!(profile.cruise_pulses, total % 2);
            assert_eq!(profile.delays().count() as u32, total);
        }
    }

    #[test]
    fn test_empty_move() {
        let profile = PulseProfile::generate(0, 100, 450, 2000, 2.5).unwrap();
        assert!(profile.is_empty());
        assert_eq!(profile.delays().count(), 0);
        assert_eq!(profile.delay_at(0), None);
        assert_eq!(profile.estimated_duration_us(), 0);
    }

    #[test]
    fn test_single_pulse_move_stays_slow() {
        let profile = PulseProfile::generate(1, 100, 450, 2000, 2.5).unwrap();
        let delays: Vec<u32> = profile.delays().collect();
        assert_eq!(delays, [2000]);
        assert_eq!(profile.phase_at(0), MotionPhase::Cruising);
    }

    #[test]
    fn test_single_pulse_ramps_reach_target() {
        // total 3, ramp 1 each side: accel jumps to min, decel jumps to max
        let profile = PulseProfile::generate(3, 100, 450, 2000, 1.0).unwrap();
        let delays: Vec<u32> = profile.delays().collect();
        assert_eq!(delays, [450, 450, 2000]);
    }

    #[test]
    fn test_zero_ramp_is_pure_cruise() {
        let profile = PulseProfile::generate(5, 0, 450, 2000, 1.0).unwrap();
        let delays: Vec<u32> = profile.delays().collect();
        assert_eq!(delays, [450; 5]);
    }

    #[test]
    fn test_eased_ramp_front_loads_change() {
        let linear = PulseProfile::generate(200, 100, 450, 2000, 1.0).unwrap();
        let eased = PulseProfile::generate(200, 100, 450, 2000, 3.0).unwrap();

        // ease-out: at the ramp midpoint the eased move is already faster
        assert!(eased.delay_at(50).unwrap() < linear.delay_at(50).unwrap());
        assert_eq!(eased.delay_at(0), Some(2000));
        assert_eq!(eased.delay_at(99), Some(450));
    }

    #[test]
    fn test_phase_at() {
        let profile = PulseProfile::generate(10, 3, 450, 2000, 1.0).unwrap();
        assert_eq!(profile.phase_at(0), MotionPhase::Accelerating);
        assert_eq!(profile.phase_at(3), MotionPhase::Cruising);
        assert_eq!(profile.phase_at(7), MotionPhase::Decelerating);
        assert_eq!(profile.phase_at(10), MotionPhase::Complete);
    }

    #[test]
    fn test_estimated_duration() {
        let profile = PulseProfile::generate(5, 0, 450, 2000, 1.0).unwrap();
        assert_eq!(profile.estimated_duration_us(), 5 * 2 * 450);

        let ramped = PulseProfile::generate(3, 100, 450, 2000, 1.0).unwrap();
        assert_eq!(ramped.estimated_duration_us(), 2 * (450 + 450 + 2000));
    }

    #[test]
    fn test_estimated_duration_saturates() {
        let profile = PulseProfile::generate(u32::MAX, 0, u32::MAX - 1, u32::MAX, 1.0).unwrap();
        assert_eq!(profile.estimated_duration_us(), u64::MAX);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(PulseProfile::generate(100, 10, 2000, 450, 1.0).is_err());
        assert!(PulseProfile::generate(100, 10, 450, 450, 1.0).is_err());
        assert!(PulseProfile::generate(0, 10, 0, 450, 1.0).is_err());
        assert!(PulseProfile::generate(100, 10, 450, 2000, 0.9).is_err());
    }

    #[test]
    fn test_direction_levels() {
        assert!(Direction::Forward.pin_high(false));
        assert!(!Direction::Reverse.pin_high(false));
        assert!(!Direction::Forward.pin_high(true));
        assert_eq!(Direction::from_pulses(-3), Direction::Reverse);
        assert_eq!(Direction::from_distance(0.0), Direction::Forward);
        assert_eq!(Direction::from_coordinate(0.0), Direction::Reverse);
        assert_eq!(Direction::Forward.reversed(), Direction::Reverse);
    }
}
