//! Fixed-period sampling of a motion profile.

use super::profile::MotionProfile;
use super::segment::MotionPhase;
use super::state::MotionState;
use crate::error::{MotionError, Result};

/// Runtime state while walking a profile at a fixed period.
///
/// Yields the reference state at `start_time + k * period` for every `k` that
/// falls inside the profile, then exactly one state at `end_time`.
#[derive(Debug, Clone)]
pub struct ProfileSampler {
    /// The profile being sampled.
    profile: MotionProfile,

    /// Sample period in seconds.
    period: f64,

    /// Index of the next sample.
    current_step: u32,

    /// Phase of the most recent sample.
    phase: MotionPhase,

    /// Set once the final state has been emitted.
    complete: bool,
}

impl ProfileSampler {
    /// Create a new sampler for a profile.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::InvalidSamplePeriod` if `period` is not finite
    /// and strictly positive.
    pub fn new(profile: MotionProfile, period: f64) -> Result<Self> {
        if !period.is_finite() || period <= 0.0 {
            return Err(MotionError::InvalidSamplePeriod(period).into());
        }

        let complete = profile.is_empty();
        let phase = Self::initial_phase(&profile);

        Ok(Self {
            profile,
            period,
            current_step: 0,
            phase,
            complete,
        })
    }

    fn initial_phase(profile: &MotionProfile) -> MotionPhase {
        profile
            .segments()
            .first()
            .map(|s| s.phase())
            .unwrap_or(MotionPhase::Complete)
    }

    /// Check if sampling is complete.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Get the index of the next sample.
    #[inline]
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    /// Get the phase of the most recent sample.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    /// Get the sample period in seconds.
    #[inline]
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Get the motion profile.
    #[inline]
    pub fn profile(&self) -> &MotionProfile {
        &self.profile
    }

    /// Advance to the next sample.
    ///
    /// Returns `None` once the final state has been emitted.
    pub fn advance(&mut self) -> Option<MotionState> {
        if self.complete {
            return None;
        }

        let t = self.profile.start_time() + self.current_step as f64 * self.period;
        if t >= self.profile.end_time() {
            self.complete = true;
            self.phase = MotionPhase::Complete;
            return Some(*self.profile.final_state());
        }

        self.current_step += 1;
        self.phase = self.profile.phase_at(t);
        self.profile.sample(t)
    }

    /// Reset the sampler to the beginning.
    pub fn reset(&mut self) {
        self.current_step = 0;
        self.complete = self.profile.is_empty();
        self.phase = Self::initial_phase(&self.profile);
    }

    /// Get progress through the profile's duration (0.0 to 1.0).
    pub fn progress(&self) -> f64 {
        let duration = self.profile.duration();
        if self.complete || duration <= 0.0 {
            1.0
        } else {
            (self.current_step as f64 * self.period / duration).min(1.0)
        }
    }
}

impl Iterator for ProfileSampler {
    type Item = MotionState;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}
