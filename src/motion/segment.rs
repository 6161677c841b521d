//! Constant-acceleration motion segments.

use libm::fabs;

use super::state::MotionState;

/// Phase of motion described by a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Speed is increasing.
    Accelerating,
    /// Moving at constant velocity.
    Cruising,
    /// Speed is decreasing.
    Decelerating,
    /// Outside the profile.
    Complete,
}

/// An interval of constant acceleration between two kinematic states.
///
/// The end state is always derived from the start state, so a segment can
/// never describe a jump in position or velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSegment {
    initial: MotionState,
    terminal: MotionState,
}

impl MotionSegment {
    /// Create a segment that starts at `start` and holds `start.acceleration`
    /// for `duration` seconds.
    ///
    /// Negative durations are treated as zero.
    pub fn new(start: MotionState, duration: f64) -> Self {
        let duration = duration.max(0.0);
        Self {
            initial: start,
            terminal: start.extrapolate(start.time + duration),
        }
    }

    /// State at the start of the segment.
    #[inline]
    pub fn initial(&self) -> &MotionState {
        &self.initial
    }

    /// State at the end of the segment.
    #[inline]
    pub fn final_state(&self) -> &MotionState {
        &self.terminal
    }

    /// Constant acceleration over the segment.
    #[inline]
    pub fn acceleration(&self) -> f64 {
        self.initial.acceleration
    }

    /// Duration in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.terminal.time - self.initial.time
    }

    /// Signed displacement covered by the segment.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.terminal.position - self.initial.position
    }

    /// Check whether `t` lies within `[initial.time, final.time]`.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.initial.time && t <= self.terminal.time
    }

    /// State at time `t`, with `t` clamped into the segment.
    pub fn sample(&self, t: f64) -> MotionState {
        if t >= self.terminal.time {
            self.terminal
        } else if t <= self.initial.time {
            self.initial
        } else {
            self.initial.extrapolate(t)
        }
    }

    /// Classify the segment by how its speed changes.
    pub fn phase(&self) -> MotionPhase {
        if self.acceleration() == 0.0 {
            MotionPhase::Cruising
        } else if fabs(self.terminal.velocity) > fabs(self.initial.velocity) {
            MotionPhase::Accelerating
        } else {
            MotionPhase::Decelerating
        }
    }

    /// The same segment reflected through the origin.
    ///
    /// Position, velocity and acceleration change sign at both ends; times
    /// are kept.
    pub fn mirrored(&self) -> Self {
        Self {
            initial: self.initial.mirrored(),
            terminal: self.terminal.mirrored(),
        }
    }
}
