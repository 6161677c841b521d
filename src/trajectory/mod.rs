//! Trajectory module for trapezoid-motion.
//!
//! Provides named move storage, builders, and planning of configured moves
//! and waypoint sequences into motion profiles.

mod builder;
mod planner;
mod registry;

pub use builder::{MoveBuilder, SequenceBuilder};
pub use planner::{plan_move, plan_named_move, plan_named_sequence, plan_sequence, SequencePlan};
pub use registry::{TrajectoryRegistry, MAX_TRAJECTORIES};
