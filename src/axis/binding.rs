//! Axis pin bindings.

use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::config::AxisConfig;
use crate::error::{AxisError, ConfigError, Result};
use crate::motion::Direction;

/// Something that can be pulsed: one axis, or several axes driven together.
///
/// Multi-axis targets apply each operation to every axis in order, so pulse
/// edges of a pair share the same delay.
pub trait PulseTarget {
    /// Drive the direction pin(s) for `direction`.
    fn set_direction(&mut self, direction: Direction) -> Result<()>;

    /// Raise the step pin(s).
    fn pulse_high(&mut self) -> Result<()>;

    /// Lower the step pin(s).
    fn pulse_low(&mut self) -> Result<()>;
}

/// A logical axis bound to its DIR and STEP output pins.
///
/// Generic over:
/// - `DIR`: direction pin type (must implement `OutputPin`)
/// - `STEP`: step pin type (must implement `OutputPin`)
pub struct AxisBinding<DIR, STEP>
where
    DIR: OutputPin,
    STEP: OutputPin,
{
    /// Axis name, matching its key in the machine configuration.
    name: String<32>,

    /// DIR pin (high = forward unless inverted).
    dir_pin: DIR,

    /// STEP pin (one rising + falling edge per step).
    step_pin: STEP,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,
}

impl<DIR, STEP> AxisBinding<DIR, STEP>
where
    DIR: OutputPin,
    STEP: OutputPin,
{
    /// Bind an axis to its pins.
    ///
    /// # Errors
    ///
    /// Returns `NameTooLong` if `name` exceeds 32 bytes. The pins are dropped.
    pub fn new(name: &str, dir_pin: DIR, step_pin: STEP) -> Result<Self> {
        let name = String::try_from(name).map_err(|_| ConfigError::NameTooLong(name.len()))?;
        Ok(Self {
            name,
            dir_pin,
            step_pin,
            invert_direction: false,
        })
    }

    /// Bind an axis using the direction inversion from its configuration.
    pub fn from_config(
        name: &str,
        config: &AxisConfig,
        dir_pin: DIR,
        step_pin: STEP,
    ) -> Result<Self> {
        Ok(Self::new(name, dir_pin, step_pin)?.invert_direction(config.invert_direction))
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Get the axis name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether the direction pin is inverted.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.invert_direction
    }

    /// Give the pins back.
    pub fn release(self) -> (DIR, STEP) {
        (self.dir_pin, self.step_pin)
    }
}

impl<DIR, STEP> PulseTarget for AxisBinding<DIR, STEP>
where
    DIR: OutputPin,
    STEP: OutputPin,
{
    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if direction.pin_high(self.invert_direction) {
            self.dir_pin.set_high().map_err(|_| AxisError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| AxisError::PinError)?;
        }
        Ok(())
    }

    fn pulse_high(&mut self) -> Result<()> {
        self.step_pin.set_high().map_err(|_| AxisError::PinError)?;
        Ok(())
    }

    fn pulse_low(&mut self) -> Result<()> {
        self.step_pin.set_low().map_err(|_| AxisError::PinError)?;
        Ok(())
    }
}

impl<T: PulseTarget + ?Sized> PulseTarget for &mut T {
    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        (**self).set_direction(direction)
    }

    fn pulse_high(&mut self) -> Result<()> {
        (**self).pulse_high()
    }

    fn pulse_low(&mut self) -> Result<()> {
        (**self).pulse_low()
    }
}

impl<A: PulseTarget, B: PulseTarget> PulseTarget for (A, B) {
    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        self.0.set_direction(direction)?;
        self.1.set_direction(direction)
    }

    fn pulse_high(&mut self) -> Result<()> {
        self.0.pulse_high()?;
        self.1.pulse_high()
    }

    fn pulse_low(&mut self) -> Result<()> {
        self.0.pulse_low()?;
        self.1.pulse_low()
    }
}
