//! Builders for programmatic move and sequence creation.

use heapless::{String, Vec};

use crate::config::{MoveConfig, WaypointSequence, MAX_WAYPOINTS};
use crate::error::{Error, Result, TrajectoryError};

fn invalid(reason: &str) -> Error {
    Error::Trajectory(TrajectoryError::InvalidName(
        String::try_from(reason).unwrap_or_default(),
    ))
}

/// Builder for creating point-to-point moves.
#[derive(Debug, Clone)]
pub struct MoveBuilder {
    axis: Option<String<32>>,
    target_position: Option<f64>,
    target_velocity: f64,
    velocity_percent: u8,
    acceleration_percent: u8,
}

impl Default for MoveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveBuilder {
    /// Create a new move builder.
    pub fn new() -> Self {
        Self {
            axis: None,
            target_position: None,
            target_velocity: 0.0,
            velocity_percent: 100,
            acceleration_percent: 100,
        }
    }

    /// Set the axis name.
    pub fn axis(mut self, name: &str) -> Self {
        self.axis = String::try_from(name).ok();
        self
    }

    /// Set the target position.
    pub fn target(mut self, position: f64) -> Self {
        self.target_position = Some(position);
        self
    }

    /// Set the velocity at arrival.
    pub fn arrival_velocity(mut self, velocity: f64) -> Self {
        self.target_velocity = velocity;
        self
    }

    /// Set velocity limit as percentage of the axis max (1-200).
    pub fn velocity_percent(mut self, percent: u8) -> Self {
        self.velocity_percent = percent.clamp(1, 200);
        self
    }

    /// Set acceleration limit as percentage of the axis max (1-200).
    pub fn acceleration_percent(mut self, percent: u8) -> Self {
        self.acceleration_percent = percent.clamp(1, 200);
        self
    }

    /// Build the move configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis or target is missing.
    pub fn build(self) -> Result<MoveConfig> {
        let axis = self.axis.ok_or_else(|| invalid("axis not specified"))?;
        let target_position = self
            .target_position
            .ok_or_else(|| invalid("target not specified"))?;

        Ok(MoveConfig {
            axis,
            target_position,
            target_velocity: self.target_velocity,
            velocity_percent: self.velocity_percent,
            acceleration_percent: self.acceleration_percent,
        })
    }
}

/// Builder for creating waypoint sequences.
#[derive(Debug, Clone)]
pub struct SequenceBuilder {
    axis: Option<String<32>>,
    waypoints: Vec<f64, MAX_WAYPOINTS>,
    overflowed: bool,
    velocity_percent: u8,
    dwell_ms: u32,
}

impl Default for SequenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceBuilder {
    /// Create a new sequence builder.
    pub fn new() -> Self {
        Self {
            axis: None,
            waypoints: Vec::new(),
            overflowed: false,
            velocity_percent: 100,
            dwell_ms: 0,
        }
    }

    /// Set the axis name.
    pub fn axis(mut self, name: &str) -> Self {
        self.axis = String::try_from(name).ok();
        self
    }

    /// Add a waypoint at the given position.
    pub fn waypoint(mut self, position: f64) -> Self {
        if self.waypoints.push(position).is_err() {
            self.overflowed = true;
        }
        self
    }

    /// Add multiple waypoints.
    pub fn waypoints(self, positions: &[f64]) -> Self {
        positions.iter().fold(self, |b, &p| b.waypoint(p))
    }

    /// Set velocity as percentage of the axis max (1-200).
    pub fn velocity_percent(mut self, percent: u8) -> Self {
        self.velocity_percent = percent.clamp(1, 200);
        self
    }

    /// Set dwell time at each waypoint in milliseconds.
    pub fn dwell(mut self, dwell_ms: u32) -> Self {
        self.dwell_ms = dwell_ms;
        self
    }

    /// Build the waypoint sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is missing, no waypoints were added, or
    /// more than [`MAX_WAYPOINTS`] were added.
    pub fn build(self) -> Result<WaypointSequence> {
        let axis = self.axis.ok_or_else(|| invalid("axis not specified"))?;

        if self.overflowed {
            return Err(Error::Trajectory(TrajectoryError::TooManyWaypoints));
        }
        if self.waypoints.is_empty() {
            return Err(Error::Trajectory(TrajectoryError::EmptyWaypoints));
        }

        Ok(WaypointSequence {
            axis,
            waypoints: self.waypoints,
            dwell_ms: self.dwell_ms,
            velocity_percent: self.velocity_percent,
        })
    }
}
