//! Unit tests for TOML configuration parsing.

use trapezoid_motion::config::{LimitPolicy, SystemConfig};

/// Test parsing a valid axis configuration from TOML.
#[test]
fn test_parse_axis_config() {
    let toml_str = r#"
[axes.lift]
name = "main_lift"
max_velocity = 2.5
max_acceleration = 1.25
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let axis = config.axis("lift").expect("Axis not found");

    assert_eq!(axis.name.as_str(), "main_lift");
    assert_eq!(axis.max_velocity, 2.5);
    assert_eq!(axis.max_acceleration, 1.25);
    assert!(axis.limits.is_none());
}

/// Test parsing a move with arrival velocity and scaled limits.
#[test]
fn test_parse_move_config() {
    let toml_str = r#"
[axes.lift]
name = "main_lift"
max_velocity = 2.0
max_acceleration = 1.0

[moves.handoff]
axis = "lift"
target_position = -4.0
target_velocity = -0.5
velocity_percent = 50
acceleration_percent = 150
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let mv = config.move_config("handoff").expect("Move not found");

    assert_eq!(mv.axis.as_str(), "lift");
    assert_eq!(mv.target_position, -4.0);
    assert_eq!(mv.target_velocity, -0.5);
    assert_eq!(mv.velocity_percent, 50);
    assert_eq!(mv.acceleration_percent, 150);
}

/// Test parsing axis with soft limits.
#[test]
fn test_parse_axis_with_limits() {
    let toml_str = r#"
[axes.lift]
name = "limited"
max_velocity = 2.0
max_acceleration = 1.0

[axes.lift.limits]
min_position = -90.0
max_position = 90.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let axis = config.axis("lift").expect("Axis not found");

    let limits = axis.limits.as_ref().expect("Limits not found");
    assert_eq!(limits.min, -90.0);
    assert_eq!(limits.max, 90.0);
    assert_eq!(limits.policy, LimitPolicy::Reject);
}

/// Test parsing waypoint sequence.
#[test]
fn test_parse_waypoint_sequence() {
    let toml_str = r#"
[axes.lift]
name = "main_lift"
max_velocity = 2.0
max_acceleration = 1.0

[sequences.scan]
axis = "lift"
waypoints = [0.0, 4.5, 9.0, 13.5, 18.0]
velocity_percent = 75
dwell_ms = 100
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let sequence = config.sequence("scan").expect("Sequence not found");

    assert_eq!(sequence.axis.as_str(), "lift");
    assert_eq!(sequence.waypoints.len(), 5);
    assert_eq!(sequence.velocity_percent, 75);
    assert_eq!(sequence.dwell_ms, 100);
}

/// Test that an unknown limit policy is rejected during parsing.
#[test]
fn test_invalid_policy_rejected() {
    let toml_str = r#"
[axes.lift]
name = "bad_config"
max_velocity = 2.0
max_acceleration = 1.0

[axes.lift.limits]
min_position = 0.0
max_position = 1.0
policy = "wrap"
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject unknown limit policy");
}
