//! Axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::limits::SoftLimits;

/// Configuration of one controlled degree of freedom.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Maximum velocity magnitude in position units per second.
    pub max_velocity: f64,

    /// Maximum acceleration magnitude in position units per second squared.
    pub max_acceleration: f64,

    /// Optional soft limits.
    #[serde(default)]
    pub limits: Option<SoftLimits>,
}

impl AxisConfig {
    /// Create an axis without soft limits.
    pub fn new(name: &str, max_velocity: f64, max_acceleration: f64) -> Self {
        Self {
            name: String::try_from(name).unwrap_or_default(),
            max_velocity,
            max_acceleration,
            limits: None,
        }
    }

    /// Attach soft limits.
    pub fn with_limits(mut self, limits: SoftLimits) -> Self {
        self.limits = Some(limits);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LimitPolicy;

    #[test]
    fn test_with_limits() {
        let axis = AxisConfig::new("lift", 2.0, 1.0)
            .with_limits(SoftLimits::new(0.0, 50.0, LimitPolicy::Clamp));

        assert_eq!(axis.name.as_str(), "lift");
        assert!(axis.limits.is_some());
    }

    #[test]
    fn test_name_too_long_is_empty() {
        let axis = AxisConfig::new("an axis name that is far longer than thirty-two bytes", 1.0, 1.0);
        assert!(axis.name.is_empty());
    }
}
