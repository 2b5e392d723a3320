//! Axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::error::Result;
use crate::motion::pulses_for_distance;

use super::ramp::RampConfig;
use super::units::Millimeters;

/// Mechanical description of one belt-driven linear axis.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Pitch diameter of the drive pulley.
    #[serde(rename = "pulley_diameter_mm")]
    pub pulley_diameter: Millimeters,

    /// Pulses per motor revolution, microstepping included.
    pub steps_per_revolution: u32,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// Ramp override for this axis. Falls back to the global ramp.
    #[serde(default)]
    pub ramp: Option<RampConfig>,
}

impl AxisConfig {
    /// Linear travel per motor revolution.
    pub fn travel_per_revolution(&self) -> Millimeters {
        Millimeters(self.pulley_diameter.0 * core::f32::consts::PI)
    }

    /// Pulses needed to travel `distance` (sign ignored).
    pub fn pulses_for(&self, distance: Millimeters) -> Result<u32> {
        pulses_for_distance(distance, self.pulley_diameter, self.steps_per_revolution)
    }

    /// Ramp for this axis given the machine-wide default.
    pub fn effective_ramp(&self, global: &RampConfig) -> RampConfig {
        self.ramp.unwrap_or(*global)
    }
}
