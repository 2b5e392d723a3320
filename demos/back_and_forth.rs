//! Configuration-driven two-axis demo.
//!
//! Loads a machine description, prints the planned profiles, then runs the
//! back-and-forth routine and the circle on counting mock pins.
//!
//! Run with: `cargo run --example back_and_forth`

use stepper_ramp::{
    config::units::Millimeters, error::Result, parse_config, MotionPhase, MotionSystem,
};

/// Mock output pin that counts rising edges.
struct CountingPin {
    state: bool,
    rising_edges: u32,
}

impl CountingPin {
    fn new() -> Self {
        Self {
            state: false,
            rising_edges: 0,
        }
    }
}

impl embedded_hal::digital::ErrorType for CountingPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for CountingPin {
    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        if !self.state {
            self.rising_edges += 1;
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

/// Mock delay that adds up requested time instead of sleeping.
#[derive(Default)]
struct ClockDelay {
    elapsed_ns: u64,
}

impl embedded_hal::delay::DelayNs for ClockDelay {
    fn delay_ns(&mut self, ns: u32) {
        // In real code, this would block on a hardware timer
        self.elapsed_ns += u64::from(ns);
    }
}

fn main() -> Result<()> {
    println!("=== Back and Forth Example ===\n");

    let config = parse_config(include_str!("machine.toml"))?;

    println!("Axes:");
    for name in config.axis_names() {
        if let Some(axis) = config.axis(name) {
            println!(
                "  {} ({}): {:.2} mm/rev, {} steps/rev{}",
                name,
                axis.name,
                axis.travel_per_revolution().0,
                axis.steps_per_revolution,
                if axis.invert_direction { ", inverted" } else { "" }
            );
        }
    }
    println!();

    let mut system = MotionSystem::from_config(config, ClockDelay::default());

    println!("Named moves:");
    let names: Vec<String> = system.config().move_names().map(String::from).collect();
    for name in &names {
        let planned = system.plan_named(name)?;
        let profile = &planned.profile;
        println!(
            "  {} -> {} pulses {:?} (accel {}, cruise {}, decel {}), ~{:.3}s",
            name,
            profile.total_pulses,
            planned.direction,
            profile.accel_pulses,
            profile.cruise_pulses,
            profile.decel_pulses,
            profile.estimated_duration_us() as f64 / 1e6
        );
    }
    println!();

    // Sample a short profile phase by phase
    let planned = system.plan_distance("x", Millimeters(2.0))?;
    print!("2 mm on X:");
    let mut last = None;
    for pulse in planned.profile.iter() {
        if last != Some(pulse.phase) {
            print!("\n  {:?}:", pulse.phase);
            last = Some(pulse.phase);
        }
        if pulse.phase != MotionPhase::Cruising || pulse.index % 8 == 0 {
            print!(" {}", pulse.delay_us);
        }
    }
    println!("\n");

    let mut x = system.bind("x", CountingPin::new(), CountingPin::new())?;
    let mut y = system.bind("y", CountingPin::new(), CountingPin::new())?;

    system.move_two_axes_back_and_forth(&mut x, &mut y)?;
    system.move_in_circle(&mut x, &mut y)?;

    let (_, x_step) = x.release();
    let (_, y_step) = y.release();
    let (_, delay) = system.release();

    println!("Routines complete:");
    println!("  X step pulses: {}", x_step.rising_edges);
    println!("  Y step pulses: {}", y_step.rising_edges);
    println!("  Simulated time: {:.3}s", delay.elapsed_ns as f64 / 1e9);

    println!("\n=== Example Complete ===");

    Ok(())
}
