//! Motion module for trapezoid-motion.
//!
//! Provides kinematic states, constant-acceleration segments, motion profiles,
//! the trapezoidal profile generator, and fixed-period sampling.

mod generator;
mod profile;
mod sampler;
mod segment;
mod state;

pub use generator::{generate_profile, inverted_target, ProfileTarget};
pub use profile::{MotionProfile, CONTINUITY_EPSILON, MAX_SEGMENTS};
pub use sampler::ProfileSampler;
pub use segment::{MotionPhase, MotionSegment};
pub use state::MotionState;
