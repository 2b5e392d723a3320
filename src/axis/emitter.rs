//! Timed pulse output.
//!
//! Walks a profile in order and drives the pins with blocking delays. Each
//! pulse is: STEP high, hold `delay`, STEP low, hold `delay`.

use embedded_hal::delay::DelayNs;

use crate::config::units::Millimeters;
use crate::error::Result;
use crate::motion::{CirclePlan, Direction, MoveRequest, PlannedMove, PulseProfile};

use super::binding::PulseTarget;

/// Blocking pulse emitter.
///
/// Generic over the `DelayNs` provider that realises every hold time.
pub struct PulseEmitter<DELAY>
where
    DELAY: DelayNs,
{
    delay: DELAY,
}

impl<DELAY> PulseEmitter<DELAY>
where
    DELAY: DelayNs,
{
    /// Create an emitter around a delay provider.
    pub fn new(delay: DELAY) -> Self {
        Self { delay }
    }

    /// Give the delay provider back.
    pub fn release(self) -> DELAY {
        self.delay
    }

    /// Emit `profile` on `target` travelling in `direction`.
    ///
    /// The direction pin(s) are set once before the first pulse. An empty
    /// profile touches no pins.
    pub fn emit<T>(
        &mut self,
        profile: &PulseProfile,
        direction: Direction,
        target: &mut T,
    ) -> Result<()>
    where
        T: PulseTarget + ?Sized,
    {
        if profile.is_empty() {
            return Ok(());
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "emit {} pulses {}: accel={} cruise={} decel={}",
            profile.total_pulses,
            direction,
            profile.accel_pulses,
            profile.cruise_pulses,
            profile.decel_pulses
        );

        target.set_direction(direction)?;

        for pulse in profile.iter() {
            target.pulse_high()?;
            self.delay.delay_us(pulse.delay_us);
            target.pulse_low()?;
            self.delay.delay_us(pulse.delay_us);
        }

        Ok(())
    }

    /// Emit a planned move.
    pub fn emit_planned<T>(&mut self, planned: &PlannedMove, target: &mut T) -> Result<()>
    where
        T: PulseTarget + ?Sized,
    {
        self.emit(&planned.profile, planned.direction, target)
    }

    /// Emit the same profile on two axes with shared edges.
    ///
    /// Both axes get the same direction and the same delay per pulse. Use
    /// separate [`emit`](Self::emit) calls when the axes need different
    /// distances or speeds.
    pub fn emit_pair<A, B>(
        &mut self,
        profile: &PulseProfile,
        direction: Direction,
        a: &mut A,
        b: &mut B,
    ) -> Result<()>
    where
        A: PulseTarget,
        B: PulseTarget,
    {
        self.emit(profile, direction, &mut (a, b))
    }

    /// Plan and emit a single-axis move.
    ///
    /// Planning happens before any pin is touched, so an invalid request
    /// produces no motion.
    pub fn move_axis<T>(&mut self, request: &MoveRequest, target: &mut T) -> Result<()>
    where
        T: PulseTarget + ?Sized,
    {
        let planned = request.plan()?;
        self.emit_planned(&planned, target)
    }

    /// Trace a circle: per step, set and pulse X, then set and pulse Y.
    ///
    /// Each axis pulse holds high and low for half the step period.
    pub fn emit_circle<X, Y>(&mut self, plan: &CirclePlan, x: &mut X, y: &mut Y) -> Result<()>
    where
        X: PulseTarget,
        Y: PulseTarget,
    {
        let half = plan.half_period_us();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "circle: {} steps, {} us per step",
            plan.steps_per_revolution(),
            plan.step_delay_us()
        );

        for step in plan.steps() {
            #[cfg(feature = "defmt")]
            defmt::trace!("circle step {}: x={} y={}", step.index, step.x, step.y);

            x.set_direction(step.x)?;
            x.pulse_high()?;
            self.delay.delay_us(half);
            x.pulse_low()?;
            self.delay.delay_us(half);

            y.set_direction(step.y)?;
            y.pulse_high()?;
            self.delay.delay_us(half);
            y.pulse_low()?;
            self.delay.delay_us(half);
        }

        Ok(())
    }

    /// Plan and trace a circle.
    pub fn move_in_circle<X, Y>(
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
        let plan = CirclePlan::new(radius, steps_per_revolution, speed_rpm)?;
        self.emit_circle(&plan, x, y)
    }

    /// Block for `ms` milliseconds.
    pub fn pause_ms(&mut self, ms: u32) {
        if ms > 0 {
            self.delay.delay_ms(ms);
        }
    }
}
