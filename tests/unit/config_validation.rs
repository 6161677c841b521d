//! Unit tests for configuration validation.

use trapezoid_motion::config::{validate_config, SystemConfig};
use trapezoid_motion::error::{ConfigError, Error, TrajectoryError};

fn parse(toml_str: &str) -> SystemConfig {
    toml::from_str(toml_str).expect("Failed to parse TOML")
}

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let config = parse(
        r#"
[axes.lift]
name = "main_lift"
max_velocity = 2.0
max_acceleration = 1.0

[moves.raise]
axis = "lift"
target_position = 10.0
"#,
    );

    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for move referencing non-existent axis.
#[test]
fn test_move_invalid_axis_reference() {
    let config = parse(
        r#"
[axes.lift]
name = "main_lift"
max_velocity = 2.0
max_acceleration = 1.0

[moves.bad_ref]
axis = "nonexistent_axis"
target_position = 1.0
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Trajectory(TrajectoryError::AxisNotFound { .. }))
    ));
}

/// Test validation fails for zero max acceleration.
#[test]
fn test_zero_max_acceleration() {
    let config = parse(
        r#"
[axes.lift]
name = "main_lift"
max_velocity = 2.0
max_acceleration = 0.0
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidMaxAcceleration(_)))
    ));
}

/// Test validation fails for invalid velocity percent.
#[test]
fn test_invalid_velocity_percent() {
    let config = parse(
        r#"
[axes.lift]
name = "main_lift"
max_velocity = 2.0
max_acceleration = 1.0

[moves.too_fast]
axis = "lift"
target_position = 1.0
velocity_percent = 250
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidVelocityPercent(250)))
    ));
}

/// Test validation fails for invalid soft limits (min >= max).
#[test]
fn test_invalid_soft_limits() {
    let config = parse(
        r#"
[axes.lift]
name = "bad_limits"
max_velocity = 2.0
max_acceleration = 1.0

[axes.lift.limits]
min_position = 90.0
max_position = -90.0
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidSoftLimits { .. }))
    ));
}

/// Test validation fails for a rejected target outside the soft limits.
#[test]
fn test_target_outside_reject_limits() {
    let config = parse(
        r#"
[axes.lift]
name = "limited"
max_velocity = 2.0
max_acceleration = 1.0

[axes.lift.limits]
min_position = 0.0
max_position = 5.0
policy = "reject"

[sequences.scan]
axis = "lift"
waypoints = [1.0, 6.0]
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Trajectory(TrajectoryError::TargetExceedsLimits { .. }))
    ));
}

/// Test that empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(validate_config(&config).is_ok());
}
