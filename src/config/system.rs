//! Machine configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::axis::AxisConfig;
use super::ramp::RampConfig;
use super::routine::{BackAndForthConfig, CircleConfig, MoveConfig};

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MachineConfig {
    /// Machine-wide ramp, used wherever no override is given.
    #[serde(default)]
    pub ramp: RampConfig,

    /// Named axis configurations.
    #[serde(default)]
    pub axes: FnvIndexMap<String<32>, AxisConfig, 8>,

    /// Named single-axis moves.
    #[serde(default)]
    pub moves: FnvIndexMap<String<32>, MoveConfig, 32>,

    /// Synchronized two-axis back-and-forth routine.
    #[serde(default)]
    pub back_and_forth: BackAndForthConfig,

    /// Circle routine, if the machine has one.
    #[serde(default)]
    pub circle: Option<CircleConfig>,
}

impl MachineConfig {
    /// Get an axis configuration by name.
    pub fn axis(&self, name: &str) -> Option<&AxisConfig> {
        self.axes
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a named move by name.
    pub fn named_move(&self, name: &str) -> Option<&MoveConfig> {
        self.moves
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all axis names.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(|s| s.as_str())
    }

    /// List all move names.
    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves.keys().map(|s| s.as_str())
    }

    /// Moves that target the given axis.
    pub fn moves_for_axis<'a>(&'a self, axis: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.moves
            .iter()
            .filter(move |(_, mv)| mv.axis.as_str() == axis)
            .map(|(name, _)| name.as_str())
    }
}
