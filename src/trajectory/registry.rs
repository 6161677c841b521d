//! Registry for named move lookup.

use heapless::{FnvIndexMap, String};

use crate::config::{AxisConfig, MoveConfig, MAX_MOVES};
use crate::error::{ConfigError, Error, Result, TrajectoryError};
use crate::motion::{MotionProfile, MotionState};

use super::planner::plan_move;

/// Maximum number of moves in the registry; a full configuration always fits.
pub const MAX_TRAJECTORIES: usize = MAX_MOVES;

/// Registry for named moves.
#[derive(Debug)]
pub struct TrajectoryRegistry {
    moves: FnvIndexMap<String<32>, MoveConfig, MAX_TRAJECTORIES>,
}

impl Default for TrajectoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(reason: &str) -> Error {
    Error::Trajectory(TrajectoryError::InvalidName(
        String::try_from(reason).unwrap_or_default(),
    ))
}

impl TrajectoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            moves: FnvIndexMap::new(),
        }
    }

    /// Register a move with a name, replacing any move with the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is too long or the registry is full.
    pub fn register(&mut self, name: &str, mv: MoveConfig) -> Result<()> {
        let key = String::try_from(name).map_err(|_| invalid("name too long"))?;

        self.moves
            .insert(key, mv)
            .map_err(|_| invalid("registry full"))?;

        Ok(())
    }

    /// Get a move by name.
    pub fn get(&self, name: &str) -> Option<&MoveConfig> {
        let key = String::try_from(name).ok()?;
        self.moves.get(&key)
    }

    /// Check if a move exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a move by name.
    pub fn remove(&mut self, name: &str) -> Option<MoveConfig> {
        let key = String::try_from(name).ok()?;
        self.moves.remove(&key)
    }

    /// Get the number of registered moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Get an iterator over move names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.moves.keys().map(|s| s.as_str())
    }

    /// Get an iterator over moves.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MoveConfig)> {
        self.moves.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Clear all moves.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Plan a registered move on `axis` starting from `initial`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MoveNotFound` for unknown names, otherwise any
    /// planning error.
    pub fn plan(&self, name: &str, axis: &AxisConfig, initial: MotionState) -> Result<MotionProfile> {
        let mv = self.get(name).ok_or_else(|| {
            Error::Config(ConfigError::MoveNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })?;
        plan_move(mv, axis, initial)
    }
}

#[cfg(feature = "std")]
impl TrajectoryRegistry {
    /// Load moves from a SystemConfig.
    ///
    /// # Errors
    ///
    /// Returns an error if a move cannot be registered.
    pub fn from_config(config: &crate::config::SystemConfig) -> Result<Self> {
        let mut registry = Self::new();
        for (name, mv) in &config.moves {
            registry.register(name.as_str(), mv.clone())?;
        }
        Ok(registry)
    }
}
