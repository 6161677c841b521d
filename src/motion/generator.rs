//! Trapezoidal profile generation.
//!
//! A move is planned as up to three constant-acceleration phases: accelerate
//! at the acceleration limit toward a velocity ceiling, cruise, then
//! decelerate to the target velocity. Moves toward a lower position are
//! mirrored onto the positive axis, planned forward, and mirrored back.

use libm::sqrt;

use super::profile::MotionProfile;
use super::segment::MotionSegment;
use super::state::MotionState;
use crate::config::MotionConstraints;
use crate::error::{MotionError, Result};

/// Desired position and velocity at the end of a move.
///
/// Acceleration at arrival is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileTarget {
    /// Target position.
    pub position: f64,
    /// Target velocity.
    pub velocity: f64,
}

impl ProfileTarget {
    /// Create a new target.
    #[inline]
    pub const fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Target that comes to rest at `position`.
    #[inline]
    pub const fn stop_at(position: f64) -> Self {
        Self::new(position, 0.0)
    }

    /// Check that neither field is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// Target with position and velocity negated.
#[inline]
pub fn inverted_target(target: ProfileTarget) -> ProfileTarget {
    ProfileTarget::new(-target.position, -target.velocity)
}

/// Generate a trapezoidal profile from `initial` to `target`.
///
/// The initial velocity and acceleration are capped from above at the
/// constraint limits before planning. An empty profile is returned when there
/// is nothing to do; its final state is `initial`.
///
/// # Errors
///
/// - `MotionError::InvalidConstraints` if either limit is not strictly positive
/// - `MotionError::NonFiniteInput` if the state or target contains NaN or infinity
/// - `MotionError::DegenerateCruise` if a cruise phase would run at zero velocity
pub fn generate_profile(
    initial: MotionState,
    target: ProfileTarget,
    constraints: MotionConstraints,
) -> Result<MotionProfile> {
    constraints.validate()?;
    if !initial.is_finite() || !target.is_finite() {
        return Err(MotionError::NonFiniteInput.into());
    }

    let distance = target.position - initial.position;
    if distance < 0.0 || (distance == 0.0 && initial.velocity < 0.0) {
        generate_mirrored(initial, target, &constraints)
    } else {
        generate_forward(initial, target, &constraints)
    }
}

/// Plan a backward move as its forward reflection and reflect the result.
fn generate_mirrored(
    initial: MotionState,
    target: ProfileTarget,
    constraints: &MotionConstraints,
) -> Result<MotionProfile> {
    let mut reflected = initial;
    reflected.invert();
    let reflected_target = inverted_target(target);
    debug_assert!(reflected_target.position >= reflected.position);

    #[cfg(feature = "defmt")]
    defmt::trace!(
        "mirroring move {=f64} -> {=f64}",
        initial.position,
        target.position
    );

    let profile = generate_forward(reflected, reflected_target, constraints)?;
    Ok(profile.mirrored().with_origin(initial))
}

/// Plan a move with non-negative displacement.
fn generate_forward(
    initial: MotionState,
    target: ProfileTarget,
    constraints: &MotionConstraints,
) -> Result<MotionProfile> {
    let accel = constraints.max_acceleration;
    let mut profile = MotionProfile::new(initial);

    let mut current = MotionState::new(
        initial.position,
        initial.velocity.min(constraints.max_velocity),
        initial.acceleration.min(accel),
        initial.time,
    );

    let target_vel2 = target.velocity * target.velocity;
    let total_distance = target.position - current.position;
    let calculated_max_vel = sqrt(current.vel2() + target_vel2) / 2.0 + total_distance * accel;
    let max_vel = constraints.max_velocity.min(calculated_max_vel);

    if current.velocity < max_vel {
        let accel_time = (max_vel - current.velocity) / accel;
        let segment = MotionSegment::new(
            MotionState {
                acceleration: accel,
                ..current
            },
            accel_time,
        );

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "accelerate {=f64} -> {=f64} over {=f64}s",
            current.velocity,
            max_vel,
            accel_time
        );

        profile.push(segment)?;
        current = *segment.final_state();
    }

    let decel_distance = ((current.vel2() - target_vel2) / (2.0 * accel)).max(0.0);
    let cruise_distance = (target.position - current.position - decel_distance).max(0.0);

    if cruise_distance > 0.0 {
        if current.velocity <= 0.0 {
            return Err(MotionError::DegenerateCruise {
                distance: cruise_distance,
                velocity: current.velocity,
            }
            .into());
        }

        let cruise_time = cruise_distance / current.velocity;
        let segment = MotionSegment::new(
            MotionState {
                acceleration: 0.0,
                ..current
            },
            cruise_time,
        );

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "cruise {=f64} at {=f64} over {=f64}s",
            cruise_distance,
            current.velocity,
            cruise_time
        );

        profile.push(segment)?;
        current = *segment.final_state();
    }

    if decel_distance > 0.0 {
        let decel_time = (current.velocity - target.velocity) / accel;
        let segment = MotionSegment::new(
            MotionState {
                acceleration: -accel,
                ..current
            },
            decel_time,
        );

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "decelerate {=f64} -> {=f64} over {=f64}s",
            current.velocity,
            target.velocity,
            decel_time
        );

        profile.push(segment)?;
    }

    Ok(profile)
}
