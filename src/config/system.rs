//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::axis::AxisConfig;
use super::moves::{MoveConfig, WaypointSequence};
use crate::error::{ConfigError, Error, Result, TrajectoryError};

/// Maximum number of axes in a configuration.
pub const MAX_AXES: usize = 8;

/// Maximum number of named moves in a configuration.
pub const MAX_MOVES: usize = 64;

/// Maximum number of named sequences in a configuration.
pub const MAX_SEQUENCES: usize = 16;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named axis configurations.
    pub axes: FnvIndexMap<String<32>, AxisConfig, MAX_AXES>,

    /// Named point-to-point moves.
    #[serde(default)]
    pub moves: FnvIndexMap<String<32>, MoveConfig, MAX_MOVES>,

    /// Named waypoint sequences.
    #[serde(default)]
    pub sequences: FnvIndexMap<String<32>, WaypointSequence, MAX_SEQUENCES>,
}

impl SystemConfig {
    /// Get an axis configuration by name.
    pub fn axis(&self, name: &str) -> Option<&AxisConfig> {
        self.axes
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a move configuration by name.
    pub fn move_config(&self, name: &str) -> Option<&MoveConfig> {
        self.moves
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a waypoint sequence by name.
    pub fn sequence(&self, name: &str) -> Option<&WaypointSequence> {
        self.sequences
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Resolve the axis a move or sequence named `owner` refers to.
    pub(crate) fn resolve_axis(&self, owner: &str, axis: &str) -> Result<&AxisConfig> {
        self.axis(axis).ok_or_else(|| {
            Error::Trajectory(TrajectoryError::AxisNotFound {
                trajectory: String::try_from(owner).unwrap_or_default(),
                axis: String::try_from(axis).unwrap_or_default(),
            })
        })
    }

    /// Look up a move together with the axis it runs on.
    ///
    /// # Errors
    ///
    /// `ConfigError::MoveNotFound` for an unknown move,
    /// `TrajectoryError::AxisNotFound` if its axis is missing.
    pub fn axis_for_move(&self, name: &str) -> Result<(&MoveConfig, &AxisConfig)> {
        let mv = self.move_config(name).ok_or_else(|| {
            Error::Config(ConfigError::MoveNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })?;
        Ok((mv, self.resolve_axis(name, mv.axis.as_str())?))
    }

    /// Look up a sequence together with the axis it runs on.
    pub fn axis_for_sequence(&self, name: &str) -> Result<(&WaypointSequence, &AxisConfig)> {
        let seq = self.sequence(name).ok_or_else(|| {
            Error::Config(ConfigError::SequenceNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })?;
        Ok((seq, self.resolve_axis(name, seq.axis.as_str())?))
    }

    /// List all axis names.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(|s| s.as_str())
    }

    /// List all move names.
    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves.keys().map(|s| s.as_str())
    }

    /// List all sequence names.
    pub fn sequence_names(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            axes: FnvIndexMap::new(),
            moves: FnvIndexMap::new(),
            sequences: FnvIndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lift_config() -> SystemConfig {
        let mut config = SystemConfig::default();
        config
            .axes
            .insert(String::try_from("lift").unwrap(), AxisConfig::new("Lift", 2.0, 1.0))
            .unwrap();
        config
    }

    fn move_on(axis: &str, target: f64) -> MoveConfig {
        MoveConfig {
            axis: String::try_from(axis).unwrap(),
            target_position: target,
            target_velocity: 0.0,
            velocity_percent: 100,
            acceleration_percent: 100,
        }
    }

    #[test]
    fn test_axis_for_move() {
        let mut config = lift_config();
        config
            .moves
            .insert(String::try_from("raise").unwrap(), move_on("lift", 10.0))
            .unwrap();

        let (mv, axis) = config.axis_for_move("raise").unwrap();
        assert_eq!(mv.target_position, 10.0);
        assert_eq!(axis.name.as_str(), "Lift");
    }

    #[test]
    fn test_axis_for_move_unknown_names() {
        let mut config = lift_config();
        config
            .moves
            .insert(String::try_from("drift").unwrap(), move_on("tilt", 1.0))
            .unwrap();

        assert!(matches!(
            config.axis_for_move("missing"),
            Err(Error::Config(ConfigError::MoveNotFound(_)))
        ));
        match config.axis_for_move("drift") {
            Err(Error::Trajectory(TrajectoryError::AxisNotFound { trajectory, axis })) => {
                assert_eq!(trajectory.as_str(), "drift");
                assert_eq!(axis.as_str(), "tilt");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_axis_for_sequence_missing() {
        assert!(matches!(
            lift_config().axis_for_sequence("scan"),
            Err(Error::Config(ConfigError::SequenceNotFound(_)))
        ));
    }
}
