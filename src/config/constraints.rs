//! Velocity and acceleration limits used for profile generation.

use super::axis::AxisConfig;
use crate::error::{MotionError, Result};

/// Symmetric velocity and acceleration limits for one axis.
///
/// Both limits apply as magnitudes in either direction of travel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionConstraints {
    /// Maximum velocity magnitude (> 0).
    pub max_velocity: f64,

    /// Maximum acceleration magnitude (> 0).
    pub max_acceleration: f64,
}

impl MotionConstraints {
    /// Create validated constraints.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::InvalidConstraints` unless both limits are finite
    /// and strictly positive.
    pub fn new(max_velocity: f64, max_acceleration: f64) -> Result<Self> {
        let constraints = Self {
            max_velocity,
            max_acceleration,
        };
        constraints.validate()?;
        Ok(constraints)
    }

    /// Constraints taken from an axis configuration.
    pub fn from_axis(axis: &AxisConfig) -> Result<Self> {
        Self::new(axis.max_velocity, axis.max_acceleration)
    }

    /// Check that both limits are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let valid = self.max_velocity.is_finite()
            && self.max_acceleration.is_finite()
            && self.max_velocity > 0.0
            && self.max_acceleration > 0.0;

        if valid {
            Ok(())
        } else {
            Err(MotionError::InvalidConstraints {
                max_velocity: self.max_velocity,
                max_acceleration: self.max_acceleration,
            }
            .into())
        }
    }

    /// Constraints scaled by percentages of these limits.
    pub fn scaled(&self, velocity_percent: u8, acceleration_percent: u8) -> Self {
        Self {
            max_velocity: self.max_velocity * (velocity_percent as f64 / 100.0),
            max_acceleration: self.max_acceleration * (acceleration_percent as f64 / 100.0),
        }
    }
}
