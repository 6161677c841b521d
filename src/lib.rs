//! # trapezoid-motion
//!
//! Trapezoidal motion profile generation for a single degree of freedom.
//!
//! ## Features
//!
//! - **Trapezoidal profiles**: accelerate, cruise, decelerate under symmetric
//!   velocity and acceleration limits
//! - **Any start state**: moving starts, non-zero arrival velocity, moves in
//!   either direction
//! - **Continuous output**: segments share boundary time, position and velocity
//! - **Configuration-driven**: define axes, moves and waypoint sequences in TOML
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trapezoid_motion::{generate_profile, MotionConstraints, MotionState, ProfileTarget};
//!
//! let constraints = MotionConstraints::new(2.0, 1.0)?;
//! let profile = generate_profile(
//!     MotionState::at_rest(0.0, 0.0),
//!     ProfileTarget::stop_at(10.0),
//!     constraints,
//! )?;
//!
//! // Reference state 3.5 s into the move
//! let reference = profile.sample(3.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging and `defmt::Format` for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod trajectory;

// Re-exports for ergonomic API
pub use config::{validate_config, AxisConfig, MotionConstraints, MoveConfig, SystemConfig};
pub use error::{Error, Result};
pub use motion::{
    generate_profile, MotionPhase, MotionProfile, MotionSegment, MotionState, ProfileSampler,
    ProfileTarget,
};
pub use trajectory::TrajectoryRegistry;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
