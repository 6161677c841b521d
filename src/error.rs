//! Error types for trapezoid-motion.
//!
//! Provides unified error handling across configuration, profile generation,
//! and trajectory planning.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all trapezoid-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motion profile generation or sampling error
    Motion(MotionError),
    /// Trajectory lookup or planning error
    Trajectory(TrajectoryError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Move name not found in configuration
    MoveNotFound(heapless::String<32>),
    /// Sequence name not found in configuration
    SequenceNotFound(heapless::String<32>),
    /// Invalid velocity percent (must be 1-200)
    InvalidVelocityPercent(u8),
    /// Invalid acceleration percent (must be 1-200)
    InvalidAccelerationPercent(u8),
    /// Invalid max velocity (must be > 0)
    InvalidMaxVelocity(f64),
    /// Invalid max acceleration (must be > 0)
    InvalidMaxAcceleration(f64),
    /// Invalid soft limits (min must be < max)
    InvalidSoftLimits {
        /// Minimum limit value
        min: f64,
        /// Maximum limit value
        max: f64,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motion profile generation and sampling errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Constraints are not strictly positive and finite
    InvalidConstraints {
        /// Maximum velocity supplied
        max_velocity: f64,
        /// Maximum acceleration supplied
        max_acceleration: f64,
    },
    /// Initial state or target contains NaN or infinity
    NonFiniteInput,
    /// A cruise phase was required but the velocity cannot cover it
    DegenerateCruise {
        /// Distance left to cruise
        distance: f64,
        /// Velocity at the start of the cruise
        velocity: f64,
    },
    /// Segment does not start where the profile ends
    Discontinuous {
        /// Start time of the rejected segment
        time: f64,
        /// Start position of the rejected segment
        position: f64,
        /// Start velocity of the rejected segment
        velocity: f64,
    },
    /// Sample period must be positive and finite
    InvalidSamplePeriod(f64),
    /// Profile segment capacity exceeded
    Overflow,
}

/// Trajectory-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    /// Move or sequence references non-existent axis
    AxisNotFound {
        /// Move or sequence name
        trajectory: heapless::String<32>,
        /// Referenced axis name
        axis: heapless::String<32>,
    },
    /// Target exceeds the axis soft limits
    TargetExceedsLimits {
        /// Target position
        target: f64,
        /// Axis min limit
        min: f64,
        /// Axis max limit
        max: f64,
    },
    /// Waypoint list is empty
    EmptyWaypoints,
    /// Too many waypoints
    TooManyWaypoints,
    /// Invalid trajectory name or configuration
    InvalidName(heapless::String<64>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Trajectory(e) => write!(f, "Trajectory error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MoveNotFound(name) => write!(f, "Move '{}' not found", name),
            ConfigError::SequenceNotFound(name) => write!(f, "Sequence '{}' not found", name),
            ConfigError::InvalidVelocityPercent(v) => write!(f, "Invalid velocity percent: {}. Must be 1-200", v),
            ConfigError::InvalidAccelerationPercent(v) => write!(f, "Invalid acceleration percent: {}. Must be 1-200", v),
            ConfigError::InvalidMaxVelocity(v) => write!(f, "Invalid max velocity: {}. Must be > 0", v),
            ConfigError::InvalidMaxAcceleration(v) => write!(f, "Invalid max acceleration: {}. Must be > 0", v),
            ConfigError::InvalidSoftLimits { min, max } => {
                write!(f, "Invalid soft limits: min ({}) must be < max ({})", min, max)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::InvalidConstraints { max_velocity, max_acceleration } => {
                write!(
                    f,
                    "Invalid constraints: max velocity {} and max acceleration {} must be > 0",
                    max_velocity, max_acceleration
                )
            }
            MotionError::NonFiniteInput => write!(f, "Initial state or target is not finite"),
            MotionError::DegenerateCruise { distance, velocity } => {
                write!(f, "Cannot cruise {} at velocity {}", distance, velocity)
            }
            MotionError::Discontinuous { time, position, velocity } => {
                write!(
                    f,
                    "Segment at t={} (position {}, velocity {}) does not continue the profile",
                    time, position, velocity
                )
            }
            MotionError::InvalidSamplePeriod(p) => write!(f, "Invalid sample period: {}. Must be > 0", p),
            MotionError::Overflow => write!(f, "Motion profile segment capacity exceeded"),
        }
    }
}

impl fmt::Display for TrajectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrajectoryError::AxisNotFound { trajectory, axis } => {
                write!(f, "Trajectory '{}' references unknown axis '{}'", trajectory, axis)
            }
            TrajectoryError::TargetExceedsLimits { target, min, max } => {
                write!(f, "Target position {} exceeds limits [{}, {}]", target, min, max)
            }
            TrajectoryError::EmptyWaypoints => write!(f, "Waypoint list is empty"),
            TrajectoryError::TooManyWaypoints => {
                write!(f, "Too many waypoints (max 32)")
            }
            TrajectoryError::InvalidName(name) => {
                write!(f, "Invalid trajectory name or configuration: {}", name)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

impl From<TrajectoryError> for Error {
    fn from(e: TrajectoryError) -> Self {
        Error::Trajectory(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}

#[cfg(feature = "std")]
impl std::error::Error for TrajectoryError {}
