//! Move and sequence configuration from TOML.

use heapless::{String, Vec};
use serde::Deserialize;

use super::axis::AxisConfig;
use super::constraints::MotionConstraints;
use crate::error::{ConfigError, Error, MotionError, Result, TrajectoryError};
use crate::motion::ProfileTarget;

/// Maximum number of waypoints in a sequence.
pub const MAX_WAYPOINTS: usize = 32;

/// A named point-to-point move from configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveConfig {
    /// Axis name (must match an axis in config).
    pub axis: String<32>,

    /// Target position (absolute).
    pub target_position: f64,

    /// Velocity at arrival.
    #[serde(default)]
    pub target_velocity: f64,

    /// Velocity limit as percentage of the axis max (1-200).
    #[serde(default = "default_percent")]
    pub velocity_percent: u8,

    /// Acceleration limit as percentage of the axis max (1-200).
    #[serde(default = "default_percent")]
    pub acceleration_percent: u8,
}

fn default_percent() -> u8 {
    100
}

fn percent_in_range(percent: u8) -> bool {
    (1..=200).contains(&percent)
}

impl MoveConfig {
    /// Profile target of this move.
    #[inline]
    pub fn target(&self) -> ProfileTarget {
        ProfileTarget::new(self.target_position, self.target_velocity)
    }

    /// Axis limits scaled by this move's percentages.
    pub fn effective_constraints(&self, axis: &AxisConfig) -> Result<MotionConstraints> {
        let constraints = MotionConstraints::from_axis(axis)?
            .scaled(self.velocity_percent, self.acceleration_percent);
        constraints.validate()?;
        Ok(constraints)
    }

    /// Check if this move can be planned on the given axis.
    ///
    /// # Checks performed:
    /// - Velocity percent is valid (1-200)
    /// - Acceleration percent is valid (1-200)
    /// - Target position and velocity are finite
    /// - Target position is within soft limits, unless the policy clamps
    /// - Scaled constraints are strictly positive
    pub fn check_feasibility(&self, axis: &AxisConfig) -> Result<()> {
        if !percent_in_range(self.velocity_percent) {
            return Err(Error::Config(ConfigError::InvalidVelocityPercent(
                self.velocity_percent,
            )));
        }

        if !percent_in_range(self.acceleration_percent) {
            return Err(Error::Config(ConfigError::InvalidAccelerationPercent(
                self.acceleration_percent,
            )));
        }

        if !self.target().is_finite() {
            return Err(MotionError::NonFiniteInput.into());
        }

        if let Some(ref limits) = axis.limits {
            if limits.apply(self.target_position).is_none() {
                return Err(Error::Trajectory(TrajectoryError::TargetExceedsLimits {
                    target: self.target_position,
                    min: limits.min,
                    max: limits.max,
                }));
            }
        }

        self.effective_constraints(axis)?;
        Ok(())
    }
}

/// A named sequence of stop-to-stop moves through waypoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WaypointSequence {
    /// Axis name.
    pub axis: String<32>,

    /// Ordered list of waypoint positions (max 32).
    pub waypoints: Vec<f64, MAX_WAYPOINTS>,

    /// Dwell time at each waypoint (milliseconds).
    #[serde(default)]
    pub dwell_ms: u32,

    /// Velocity percent for all moves.
    #[serde(default = "default_percent")]
    pub velocity_percent: u8,
}

impl WaypointSequence {
    /// Dwell time at each waypoint in seconds.
    #[inline]
    pub fn dwell_secs(&self) -> f64 {
        self.dwell_ms as f64 / 1000.0
    }

    /// Check if this sequence can be planned on the given axis.
    pub fn check_feasibility(&self, axis: &AxisConfig) -> Result<()> {
        if self.waypoints.is_empty() {
            return Err(Error::Trajectory(TrajectoryError::EmptyWaypoints));
        }

        if !percent_in_range(self.velocity_percent) {
            return Err(Error::Config(ConfigError::InvalidVelocityPercent(
                self.velocity_percent,
            )));
        }

        if self.waypoints.iter().any(|w| !w.is_finite()) {
            return Err(MotionError::NonFiniteInput.into());
        }

        if let Some(ref limits) = axis.limits {
            if let Some(&outside) = self.waypoints.iter().find(|&&w| limits.apply(w).is_none()) {
                return Err(Error::Trajectory(TrajectoryError::TargetExceedsLimits {
                    target: outside,
                    min: limits.min,
                    max: limits.max,
                }));
            }
        }

        Ok(())
    }
}
