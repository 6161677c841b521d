//! Configuration module for trapezoid-motion.
//!
//! Provides motion constraints and the types for loading and validating axis,
//! move, and sequence configurations from TOML files (with `std` feature) or
//! pre-parsed data.

mod axis;
mod constraints;
mod limits;
mod moves;
mod system;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::AxisConfig;
pub use constraints::MotionConstraints;
pub use limits::{LimitPolicy, SoftLimits};
pub use moves::{MoveConfig, WaypointSequence, MAX_WAYPOINTS};
pub use system::{SystemConfig, MAX_AXES, MAX_MOVES, MAX_SEQUENCES};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
