//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{AxisConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Axis limits are positive and soft limits are ordered
/// - Moves and sequences reference existing axes
/// - Velocity/acceleration percentages are in range
/// - Targets respect soft limits with the `reject` policy
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, axis) in config.axes.iter() {
        validate_axis(axis)?;
    }

    for (name, mv) in config.moves.iter() {
        let axis = config.resolve_axis(name.as_str(), mv.axis.as_str())?;
        mv.check_feasibility(axis)?;
    }

    for (name, seq) in config.sequences.iter() {
        let axis = config.resolve_axis(name.as_str(), seq.axis.as_str())?;
        seq.check_feasibility(axis)?;
    }

    Ok(())
}

fn validate_axis(axis: &AxisConfig) -> Result<()> {
    if !is_positive(axis.max_velocity) {
        return Err(Error::Config(ConfigError::InvalidMaxVelocity(axis.max_velocity)));
    }

    if !is_positive(axis.max_acceleration) {
        return Err(Error::Config(ConfigError::InvalidMaxAcceleration(
            axis.max_acceleration,
        )));
    }

    if let Some(ref limits) = axis.limits {
        if !limits.is_valid() {
            return Err(Error::Config(ConfigError::InvalidSoftLimits {
                min: limits.min,
                max: limits.max,
            }));
        }
    }

    Ok(())
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
