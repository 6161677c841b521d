//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
///
/// ```rust,ignore
/// use trapezoid_motion::load_config;
///
/// let config = load_config("motion.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[axes.lift]
name = "Lift"
max_velocity = 2.0
max_acceleration = 1.0
"#;

        let config = parse_config(toml).unwrap();
        assert!(config.axis("lift").is_some());
    }

    #[test]
    fn test_parse_with_move() {
        let toml = r#"
[axes.lift]
name = "Lift"
max_velocity = 2.0
max_acceleration = 1.0

[moves.raise]
axis = "lift"
target_position = 10.0
velocity_percent = 50
"#;

        let config = parse_config(toml).unwrap();
        let mv = config.move_config("raise").unwrap();
        assert_eq!(mv.target_velocity, 0.0);
        assert_eq!(mv.acceleration_percent, 100);
    }

    #[test]
    fn test_parse_rejects_unknown_axis() {
        let toml = r#"
[axes.lift]
name = "Lift"
max_velocity = 2.0
max_acceleration = 1.0

[moves.raise]
axis = "tilt"
target_position = 10.0
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Trajectory(crate::error::TrajectoryError::AxisNotFound { .. }))
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_config("[axes.lift\nname ="),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/motion.toml"),
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }
}
