//! Motion system facade for configuration-driven machines.
//!
//! Provides the high-level operations (distance moves, named moves, the
//! back-and-forth and circle routines) on top of a [`PulseEmitter`].

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::config::units::Millimeters;
use crate::config::{AxisConfig, MachineConfig, MoveTarget, RampConfig};
use crate::error::{AxisError, ConfigError, Error, Result};
use crate::motion::{Direction, MoveRequest, PlannedMove};

use super::binding::{AxisBinding, PulseTarget};
use super::emitter::PulseEmitter;

/// A machine described by a [`MachineConfig`], driving caller-owned axes.
///
/// Pins are generic per axis, so bindings stay with the caller and are passed
/// into each operation.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_ramp::{MotionSystem, config::units::Millimeters};
///
/// let config = stepper_ramp::load_config("machine.toml")?;
/// let mut system = MotionSystem::from_config(config, delay);
///
/// let mut x = system.bind("x", x_dir, x_step)?;
/// system.move_axis(Millimeters(400.0), &mut x)?;
/// ```
pub struct MotionSystem<DELAY>
where
    DELAY: DelayNs,
{
    /// The machine configuration.
    config: MachineConfig,
    /// Emitter owning the delay provider.
    emitter: PulseEmitter<DELAY>,
}

impl<DELAY> MotionSystem<DELAY>
where
    DELAY: DelayNs,
{
    /// Create a motion system from configuration and a delay provider.
    pub fn from_config(config: MachineConfig, delay: DELAY) -> Self {
        Self {
            config,
            emitter: PulseEmitter::new(delay),
        }
    }

    /// Get the machine configuration.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Access the underlying emitter for raw profile output.
    pub fn emitter(&mut self) -> &mut PulseEmitter<DELAY> {
        &mut self.emitter
    }

    /// Give back the configuration and the delay provider.
    pub fn release(self) -> (MachineConfig, DELAY) {
        (self.config, self.emitter.release())
    }

    fn axis_config(&self, name: &str) -> Result<&AxisConfig> {
        self.config.axis(name).ok_or_else(|| {
            Error::Config(ConfigError::AxisNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })
    }

    /// Ramp used for an axis: its override, or the machine-wide ramp.
    ///
    /// Returns `None` if no axis with that name exists.
    pub fn ramp_for(&self, axis: &str) -> Option<RampConfig> {
        self.config
            .axis(axis)
            .map(|a| a.effective_ramp(&self.config.ramp))
    }

    /// Bind pins to a configured axis, applying its direction inversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis name doesn't exist in the configuration.
    pub fn bind<DIR, STEP>(
        &self,
        axis: &str,
        dir_pin: DIR,
        step_pin: STEP,
    ) -> Result<AxisBinding<DIR, STEP>>
    where
        DIR: OutputPin,
        STEP: OutputPin,
    {
        let config = self.axis_config(axis)?;
        AxisBinding::from_config(axis, config, dir_pin, step_pin)
    }

    /// Plan a distance move on a configured axis.
    pub fn plan_distance(&self, axis: &str, distance: Millimeters) -> Result<PlannedMove> {
        let config = self.axis_config(axis)?;
        MoveRequest::Distance {
            distance,
            pulley_diameter: config.pulley_diameter,
            steps_per_revolution: config.steps_per_revolution,
            ramp: config.effective_ramp(&self.config.ramp),
        }
        .plan()
    }

    /// Plan a named move.
    ///
    /// The ramp is the move's override, else the axis override, else the
    /// machine-wide ramp.
    pub fn plan_named(&self, name: &str) -> Result<PlannedMove> {
        let mv = self.config.named_move(name).ok_or_else(|| {
            Error::Config(ConfigError::MoveNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })?;
        let axis = self.axis_config(mv.axis.as_str())?;
        let ramp = mv
            .ramp
            .unwrap_or_else(|| axis.effective_ramp(&self.config.ramp));

        let request = match mv.target(name)? {
            MoveTarget::Distance(distance) => MoveRequest::Distance {
                distance,
                pulley_diameter: axis.pulley_diameter,
                steps_per_revolution: axis.steps_per_revolution,
                ramp,
            },
            MoveTarget::Pulses(pulses) => MoveRequest::PulseCount { pulses, ramp },
        };
        request.plan()
    }

    /// Move a bound axis by `distance`.
    ///
    /// The binding's name selects the axis configuration.
    pub fn move_axis<DIR, STEP>(
        &mut self,
        distance: Millimeters,
        axis: &mut AxisBinding<DIR, STEP>,
    ) -> Result<()>
    where
        DIR: OutputPin,
        STEP: OutputPin,
    {
        let planned = self.plan_distance(axis.name(), distance)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: move {} mm", axis.name(), distance.0);

        self.emitter.emit_planned(&planned, axis)
    }

    /// Execute a named move on its axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the move is unknown, invalid, or targets a
    /// different axis than `axis`.
    pub fn execute<DIR, STEP>(
        &mut self,
        move_name: &str,
        axis: &mut AxisBinding<DIR, STEP>,
    ) -> Result<()>
    where
        DIR: OutputPin,
        STEP: OutputPin,
    {
        let planned = self.plan_named(move_name)?;

        if let Some(mv) = self.config.named_move(move_name) {
            if mv.axis.as_str() != axis.name() {
                return Err(Error::Axis(AxisError::WrongAxis {
                    expected: mv.axis.clone(),
                    found: String::try_from(axis.name()).unwrap_or_default(),
                }));
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: execute '{}'", axis.name(), move_name);

        self.emitter.emit_planned(&planned, axis)
    }

    /// Drive two axes together forward, pause, back, pause.
    ///
    /// Both legs use the same profile; only the direction flips.
    pub fn move_two_axes_back_and_forth<A, B>(&mut self, a: &mut A, b: &mut B) -> Result<()>
    where
        A: PulseTarget,
        B: PulseTarget,
    {
        let routine = &self.config.back_and_forth;
        let ramp = routine.ramp.unwrap_or(self.config.ramp);
        let planned = MoveRequest::PulseCount {
            pulses: i64::from(routine.pulses),
            ramp,
        }
        .plan()?;
        let pause_forward = routine.pause_after_forward_ms;
        let pause_reverse = routine.pause_after_reverse_ms;

        #[cfg(feature = "defmt")]
        defmt::debug!("back and forth: {} pulses per leg", planned.profile.total_pulses);

        self.emitter.emit_pair(&planned.profile, Direction::Forward, a, b)?;
        self.emitter.pause_ms(pause_forward);

        self.emitter.emit_pair(&planned.profile, Direction::Reverse, a, b)?;
        self.emitter.pause_ms(pause_reverse);

        Ok(())
    }

    /// Trace the configured circle.
    ///
    /// # Errors
    ///
    /// Returns `CircleNotConfigured` if the configuration has no `[circle]`.
    pub fn move_in_circle<X, Y>(&mut self, x: &mut X, y: &mut Y) -> Result<()>
    where
        X: PulseTarget,
        Y: PulseTarget,
    {
        let plan = self
            .config
            .circle
            .as_ref()
            .ok_or(Error::Config(ConfigError::CircleNotConfigured))?
            .plan()?;
        self.emitter.emit_circle(&plan, x, y)
    }

    /// Trace a circle with explicit parameters.
    pub fn move_in_circle_with<X, Y>(
        &mut self,
        radius: Millimeters,
        steps_per_revolution: u32,
        speed_rpm: u32,
        x: &mut X,
        y: &mut Y,
    ) -> Result<()>
    where
        X: PulseTarget,
        Y: PulseTarget,
    {
        self.emitter
            .move_in_circle(radius, steps_per_revolution, speed_rpm, x, y)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    fn test_config() -> MachineConfig {
        let toml = r#"
[ramp]
ramp_pulses = 100
min_delay_us = 450
max_delay_us = 2000

[axes.x]
name = "X Axis"
pulley_diameter_mm = 12.732395
steps_per_revolution = 800

[axes.y]
name = "Y Axis"
pulley_diameter_mm = 12.732395
steps_per_revolution = 800

[axes.y.ramp]
ramp_pulses = 20
min_delay_us = 300
max_delay_us = 1500
easing_exponent = 2.0

[moves.x_feed]
axis = "x"
distance_mm = 400.0

[moves.y_jog]
axis = "y"
pulses = -30

[moves.x_gentle]
axis = "x"
pulses = 1000

[moves.x_gentle.ramp]
ramp_pulses = 400
min_delay_us = 600
max_delay_us = 3000
"#;
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_ramp_for() {
        let system = MotionSystem::from_config(test_config(), NoopDelay::new());

        assert_eq!(system.ramp_for("x").unwrap().ramp_pulses, 100);
        assert_eq!(system.ramp_for("y").unwrap().ramp_pulses, 20);
        assert!(system.ramp_for("z").is_none());
    }

    #[test]
    fn test_plan_distance() {
        let system = MotionSystem::from_config(test_config(), NoopDelay::new());

        let planned = system.plan_distance("x", Millimeters(-400.0)).unwrap();
        assert_eq!(planned.direction, Direction::Reverse);
        assert_eq!(planned.profile.total_pulses, 8000);
        assert_eq!(planned.profile.accel_pulses, 100);

        assert!(matches!(
            system.plan_distance("z", Millimeters(1.0)),
            Err(Error::Config(ConfigError::AxisNotFound(_)))
        ));
    }

    #[test]
    fn test_plan_named_ramp_precedence() {
        let system = MotionSystem::from_config(test_config(), NoopDelay::new());

        // axis override
        let jog = system.plan_named("y_jog").unwrap();
        assert_eq!(jog.direction, Direction::Reverse);
        assert_eq!(jog.profile.accel_pulses, 15);
        assert_eq!(jog.profile.min_delay_us, 300);

        // move override beats the machine ramp
        let gentle = system.plan_named("x_gentle").unwrap();
        assert_eq!(gentle.profile.accel_pulses, 400);
        assert_eq!(gentle.profile.max_delay_us, 3000);

        assert!(matches!(
            system.plan_named("missing"),
            Err(Error::Config(ConfigError::MoveNotFound(_)))
        ));
    }

    #[test]
    fn test_circle_not_configured() {
        let mut system = MotionSystem::from_config(test_config(), NoopDelay::new());

        let result = system.move_in_circle(&mut NoTarget, &mut NoTarget);
        assert_eq!(result, Err(Error::Config(ConfigError::CircleNotConfigured)));
    }

    #[test]
    fn test_raw_profile_through_emitter() {
        let mut system = MotionSystem::from_config(test_config(), NoopDelay::new());

        let planned = system.plan_distance("x", Millimeters(0.0)).unwrap();
        assert!(planned.profile.is_empty());
        system
            .emitter()
            .emit(&planned.profile, planned.direction, &mut NoTarget)
            .unwrap();
    }

    /// Target that fails the test if touched.
    struct NoTarget;

    impl PulseTarget for NoTarget {
        fn set_direction(&mut self, _: Direction) -> Result<()> {
            panic!("pin touched");
        }

        fn pulse_high(&mut self) -> Result<()> {
            panic!("pin touched");
        }

        fn pulse_low(&mut self) -> Result<()> {
            panic!("pin touched");
        }
    }
}
