//! Motion profile: a time-contiguous sequence of motion segments.
//!
//! Profiles are append-only. Every pushed segment must begin exactly where the
//! previous one ended, so a profile can be sampled at any time within its span
//! without jumps in position or velocity.

use heapless::Vec;
use libm::fabs;

use super::segment::{MotionPhase, MotionSegment};
use super::state::MotionState;
use crate::error::{MotionError, Result};

/// Maximum number of segments in a profile (accelerate, cruise, decelerate).
pub const MAX_SEGMENTS: usize = 3;

/// Tolerance used when checking that a pushed segment continues the profile.
pub const CONTINUITY_EPSILON: f64 = 1e-9;

/// Ordered, time-contiguous sequence of constant-acceleration segments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionProfile {
    /// State the profile was planned from.
    origin: MotionState,

    /// Segments in time order.
    segments: Vec<MotionSegment, MAX_SEGMENTS>,
}

impl MotionProfile {
    /// Create an empty profile planned from `origin`.
    pub fn new(origin: MotionState) -> Self {
        Self {
            origin,
            segments: Vec::new(),
        }
    }

    /// Append a segment.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::Discontinuous` if the segment does not start at
    /// the current final time, position and velocity, and
    /// `MotionError::Overflow` if the profile is full.
    pub fn push(&mut self, segment: MotionSegment) -> Result<()> {
        if let Some(last) = self.segments.last() {
            let end = last.final_state();
            let start = segment.initial();
            if fabs(end.time - start.time) > CONTINUITY_EPSILON
                || fabs(end.position - start.position) > CONTINUITY_EPSILON
                || fabs(end.velocity - start.velocity) > CONTINUITY_EPSILON
            {
                return Err(MotionError::Discontinuous {
                    time: start.time,
                    position: start.position,
                    velocity: start.velocity,
                }
                .into());
            }
        }

        self.segments
            .push(segment)
            .map_err(|_| MotionError::Overflow.into())
    }

    /// Segments in time order.
    #[inline]
    pub fn segments(&self) -> &[MotionSegment] {
        &self.segments
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the profile has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// State the profile was planned from.
    #[inline]
    pub fn origin(&self) -> &MotionState {
        &self.origin
    }

    /// Final state of the last segment, or the origin if the profile is empty.
    pub fn final_state(&self) -> &MotionState {
        self.segments
            .last()
            .map(|s| s.final_state())
            .unwrap_or(&self.origin)
    }

    /// Time at which the profile starts.
    pub fn start_time(&self) -> f64 {
        self.segments
            .first()
            .map(|s| s.initial().time)
            .unwrap_or(self.origin.time)
    }

    /// Time at which the profile ends.
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.final_state().time
    }

    /// Total duration in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_time() - self.start_time()
    }

    /// Signed displacement from the first segment's start to the end.
    pub fn distance(&self) -> f64 {
        self.segments.iter().map(MotionSegment::distance).sum()
    }

    /// Largest velocity magnitude reached at any segment boundary.
    ///
    /// With constant acceleration the extremes always lie on a boundary.
    pub fn peak_velocity(&self) -> f64 {
        self.segments
            .iter()
            .flat_map(|s| [s.initial().velocity, s.final_state().velocity])
            .map(fabs)
            .fold(0.0, f64::max)
    }

    /// Segment covering time `t`.
    ///
    /// At a boundary shared by two segments the earlier one is returned.
    pub fn segment_at(&self, t: f64) -> Option<&MotionSegment> {
        self.segments.iter().find(|s| s.contains(t))
    }

    /// State at time `t`, or `None` outside the profile.
    pub fn sample(&self, t: f64) -> Option<MotionState> {
        self.segment_at(t).map(|s| s.sample(t))
    }

    /// Phase at time `t`.
    pub fn phase_at(&self, t: f64) -> MotionPhase {
        self.segment_at(t)
            .map(MotionSegment::phase)
            .unwrap_or(MotionPhase::Complete)
    }

    /// The profile reflected through the origin: every segment is rebuilt
    /// with position, velocity and acceleration negated, in the same order.
    pub fn mirrored(&self) -> Self {
        Self {
            origin: self.origin.mirrored(),
            segments: self.segments.iter().map(MotionSegment::mirrored).collect(),
        }
    }

    pub(crate) fn with_origin(mut self, origin: MotionState) -> Self {
        self.origin = origin;
        self
    }
}
