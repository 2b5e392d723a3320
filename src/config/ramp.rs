//! Ramp parameters shared by every profile.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

use super::units::Microseconds;

/// Kinematic limits of a move: ramp length, delay bounds and easing.
///
/// `min_delay` is the fastest (shortest) gap between edges, `max_delay` the
/// slowest. Defaults match a belt-driven axis at 1/4 microstepping.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RampConfig {
    /// Pulses spent in each of the acceleration and deceleration phases.
    #[serde(default = "default_ramp_pulses")]
    pub ramp_pulses: u32,

    /// Delay at cruise speed.
    #[serde(default = "default_min_delay", rename = "min_delay_us")]
    pub min_delay: Microseconds,

    /// Delay at the start of acceleration and the end of deceleration.
    #[serde(default = "default_max_delay", rename = "max_delay_us")]
    pub max_delay: Microseconds,

    /// Ease-out exponent (1.0 = linear).
    #[serde(default = "default_easing_exponent")]
    pub easing_exponent: f32,
}

fn default_ramp_pulses() -> u32 {
    500
}

fn default_min_delay() -> Microseconds {
    Microseconds(450)
}

fn default_max_delay() -> Microseconds {
    Microseconds(2000)
}

fn default_easing_exponent() -> f32 {
    1.0
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            ramp_pulses: default_ramp_pulses(),
            min_delay: default_min_delay(),
            max_delay: default_max_delay(),
            easing_exponent: default_easing_exponent(),
        }
    }
}

impl RampConfig {
    /// Create ramp parameters from raw values.
    pub const fn new(
        ramp_pulses: u32,
        min_delay_us: u32,
        max_delay_us: u32,
        easing_exponent: f32,
    ) -> Self {
        Self {
            ramp_pulses,
            min_delay: Microseconds(min_delay_us),
            max_delay: Microseconds(max_delay_us),
            easing_exponent,
        }
    }

    /// Same limits with a different ease-out exponent.
    pub fn with_easing(mut self, easing_exponent: f32) -> Self {
        self.easing_exponent = easing_exponent;
        self
    }

    /// Check the kinematic preconditions.
    ///
    /// # Errors
    ///
    /// - `ZeroMinDelay` if `min_delay` is 0
    /// - `InvalidDelayRange` unless `min_delay < max_delay`
    /// - `InvalidEasingExponent` if the exponent is not finite or below 1
    pub fn validate(&self) -> Result<()> {
        if self.min_delay.0 == 0 {
            return Err(ConfigError::ZeroMinDelay.into());
        }

        if self.min_delay >= self.max_delay {
            return Err(ConfigError::InvalidDelayRange {
                min_us: self.min_delay.0,
                max_us: self.max_delay.0,
            }
            .into());
        }

        if !self.easing_exponent.is_finite() || self.easing_exponent < 1.0 {
            return Err(ConfigError::InvalidEasingExponent(self.easing_exponent).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults_are_valid() {
        let ramp = RampConfig::default();
        assert_eq!(ramp.ramp_pulses, 500);
        assert_eq!(ramp.min_delay, Microseconds(450));
        assert_eq!(ramp.max_delay, Microseconds(2000));
        assert!(ramp.validate().is_ok());
    }

    #[test]
    fn test_inverted_delays_rejected() {
        let ramp = RampConfig::new(100, 2000, 450, 1.0);
        assert!(matches!(
            ramp.validate(),
            Err(Error::Config(ConfigError::InvalidDelayRange { min_us: 2000, max_us: 450 }))
        ));

        let equal = RampConfig::new(100, 450, 450, 1.0);
        assert!(equal.validate().is_err());
    }

    #[test]
    fn test_easing_below_one_rejected() {
        let ramp = RampConfig::default().with_easing(0.5);
        assert!(matches!(
            ramp.validate(),
            Err(Error::Config(ConfigError::InvalidEasingExponent(_)))
        ));

        let nan = RampConfig::default().with_easing(f32::NAN);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_zero_min_delay_rejected() {
        let ramp = RampConfig::new(10, 0, 100, 1.0);
        assert_eq!(ramp.validate(), Err(Error::Config(ConfigError::ZeroMinDelay)));
    }
}
