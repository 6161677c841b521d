//! Planning configured moves and sequences into motion profiles.

use heapless::Vec;

use crate::config::{
    AxisConfig, MotionConstraints, MoveConfig, SystemConfig, WaypointSequence, MAX_WAYPOINTS,
};
use crate::error::{Error, Result, TrajectoryError};
use crate::motion::{generate_profile, MotionProfile, MotionState, ProfileTarget};

/// One profile per waypoint, in order.
pub type SequencePlan = Vec<MotionProfile, MAX_WAYPOINTS>;

/// Apply the axis soft limits to a target position.
fn resolve_position(axis: &AxisConfig, position: f64) -> Result<f64> {
    match axis.limits {
        None => Ok(position),
        Some(ref limits) => limits.apply(position).ok_or(Error::Trajectory(
            TrajectoryError::TargetExceedsLimits {
                target: position,
                min: limits.min,
                max: limits.max,
            },
        )),
    }
}

/// Plan a single move on an axis starting from `initial`.
///
/// # Errors
///
/// Returns an error if the move is infeasible on the axis or generation fails.
pub fn plan_move(mv: &MoveConfig, axis: &AxisConfig, initial: MotionState) -> Result<MotionProfile> {
    mv.check_feasibility(axis)?;
    let constraints = mv.effective_constraints(axis)?;
    let target = ProfileTarget::new(
        resolve_position(axis, mv.target_position)?,
        mv.target_velocity,
    );

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "planning move to {=f64} (vmax {=f64}, amax {=f64})",
        target.position,
        constraints.max_velocity,
        constraints.max_acceleration
    );

    generate_profile(initial, target, constraints)
}

/// Plan a waypoint sequence on an axis starting from `initial`.
///
/// Each waypoint is a stop-to-stop move that begins where the previous
/// profile ended, delayed by the sequence dwell time.
///
/// # Errors
///
/// Returns an error if the sequence is infeasible on the axis or any
/// generation fails.
pub fn plan_sequence(
    seq: &WaypointSequence,
    axis: &AxisConfig,
    initial: MotionState,
) -> Result<SequencePlan> {
    seq.check_feasibility(axis)?;
    let constraints = MotionConstraints::from_axis(axis)?.scaled(seq.velocity_percent, 100);
    constraints.validate()?;

    let mut plan = SequencePlan::new();
    let mut state = initial;

    for &waypoint in seq.waypoints.iter() {
        let target = ProfileTarget::stop_at(resolve_position(axis, waypoint)?);

        #[cfg(feature = "defmt")]
        defmt::debug!("planning waypoint {=f64}", target.position);

        let profile = generate_profile(state, target, constraints)?;
        let end = *profile.final_state();
        state = MotionState::new(end.position, end.velocity, 0.0, end.time + seq.dwell_secs());

        plan.push(profile)
            .map_err(|_| Error::Trajectory(TrajectoryError::TooManyWaypoints))?;
    }

    Ok(plan)
}

/// Plan a move by name from a system configuration.
pub fn plan_named_move(
    config: &SystemConfig,
    name: &str,
    initial: MotionState,
) -> Result<MotionProfile> {
    let (mv, axis) = config.axis_for_move(name)?;
    plan_move(mv, axis, initial)
}

/// Plan a waypoint sequence by name from a system configuration.
pub fn plan_named_sequence(
    config: &SystemConfig,
    name: &str,
    initial: MotionState,
) -> Result<SequencePlan> {
    let (seq, axis) = config.axis_for_sequence(name)?;
    plan_sequence(seq, axis, initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LimitPolicy, SoftLimits};
    use crate::error::MotionError;
    use crate::trajectory::{MoveBuilder, SequenceBuilder};

    fn axis() -> AxisConfig {
        AxisConfig::new("lift", 2.0, 1.0)
    }

    #[test]
    fn test_plan_move() {
        let mv = MoveBuilder::new().axis("lift").target(10.0).build().unwrap();
        let profile = plan_move(&mv, &axis(), MotionState::at_rest(0.0, 0.0)).unwrap();

        assert_eq!(profile.len(), 3);
        assert_eq!(profile.final_state().position, 10.0);
        assert_eq!(profile.duration(), 7.0);
    }

    #[test]
    fn test_plan_move_scaled_velocity() {
        let mv = MoveBuilder::new()
            .axis("lift")
            .target(10.0)
            .velocity_percent(50)
            .build()
            .unwrap();
        let profile = plan_move(&mv, &axis(), MotionState::at_rest(0.0, 0.0)).unwrap();

        assert_eq!(profile.peak_velocity(), 1.0);
        assert_eq!(profile.final_state().position, 10.0);
    }

    #[test]
    fn test_plan_move_clamped_target() {
        let axis = axis().with_limits(SoftLimits::new(0.0, 4.0, LimitPolicy::Clamp));
        let mv = MoveBuilder::new().axis("lift").target(10.0).build().unwrap();
        let profile = plan_move(&mv, &axis, MotionState::at_rest(0.0, 0.0)).unwrap();

        assert_eq!(profile.final_state().position, 4.0);
    }

    #[test]
    fn test_plan_move_rejected_target() {
        let axis = axis().with_limits(SoftLimits::new(0.0, 4.0, LimitPolicy::Reject));
        let mv = MoveBuilder::new().axis("lift").target(10.0).build().unwrap();

        assert!(matches!(
            plan_move(&mv, &axis, MotionState::at_rest(0.0, 0.0)),
            Err(Error::Trajectory(TrajectoryError::TargetExceedsLimits { .. }))
        ));
    }

    #[test]
    fn test_plan_move_nan_target_under_clamp() {
        let axis = axis().with_limits(SoftLimits::new(0.0, 4.0, LimitPolicy::Clamp));
        let mv = MoveBuilder::new().axis("lift").target(f64::NAN).build().unwrap();

        assert!(matches!(
            plan_move(&mv, &axis, MotionState::at_rest(0.0, 0.0)),
            Err(Error::Motion(MotionError::NonFiniteInput))
        ));
    }

    #[test]
    fn test_plan_sequence_with_dwell() {
        let seq = SequenceBuilder::new()
            .axis("lift")
            .waypoints(&[10.0, 0.0])
            .dwell(500)
            .build()
            .unwrap();
        let plan = plan_sequence(&seq, &axis(), MotionState::at_rest(0.0, 0.0)).unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].final_state().position, 10.0);
        assert_eq!(plan[1].start_time(), plan[0].end_time() + 0.5);
        assert_eq!(plan[1].final_state().position, 0.0);
        assert!(plan[1].segments().iter().all(|s| s.initial().velocity <= 0.0));
    }
}
