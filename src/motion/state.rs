//! Kinematic state of a single degree of freedom.

/// A snapshot of position, velocity and acceleration at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionState {
    /// Position.
    pub position: f64,
    /// Velocity (position units per second).
    pub velocity: f64,
    /// Acceleration (position units per second²).
    pub acceleration: f64,
    /// Time in seconds.
    pub time: f64,
}

impl MotionState {
    /// Create a new state.
    #[inline]
    pub const fn new(position: f64, velocity: f64, acceleration: f64, time: f64) -> Self {
        Self {
            position,
            velocity,
            acceleration,
            time,
        }
    }

    /// Create a state at rest at the given position.
    #[inline]
    pub const fn at_rest(position: f64, time: f64) -> Self {
        Self::new(position, 0.0, 0.0, time)
    }

    /// Project this state forward to time `t` under constant acceleration.
    pub fn extrapolate(&self, t: f64) -> Self {
        let dt = t - self.time;
        Self {
            position: self.position + self.velocity * dt + 0.5 * self.acceleration * dt * dt,
            velocity: self.velocity + self.acceleration * dt,
            acceleration: self.acceleration,
            time: t,
        }
    }

    /// Negate position and velocity in place.
    ///
    /// Acceleration is left alone; use [`MotionState::mirrored`] when the
    /// state must stay consistent with a segment's acceleration.
    #[inline]
    pub fn invert(&mut self) {
        self.position = -self.position;
        self.velocity = -self.velocity;
    }

    /// Reflection of this state through the origin (position, velocity and
    /// acceleration negated, time kept).
    #[inline]
    pub fn mirrored(self) -> Self {
        Self {
            position: -self.position,
            velocity: -self.velocity,
            acceleration: -self.acceleration,
            time: self.time,
        }
    }

    /// Squared velocity.
    #[inline]
    pub fn vel2(&self) -> f64 {
        self.velocity * self.velocity
    }

    /// Check that no field is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.acceleration.is_finite()
            && self.time.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extrapolate() {
        let state = MotionState::new(1.0, 2.0, 4.0, 3.0);
        let next = state.extrapolate(4.0);

        // 1 + 2*1 + 0.5*4*1 = 5
        assert_eq!(next.position, 5.0);
        assert_eq!(next.velocity, 6.0);
        assert_eq!(next.acceleration, 4.0);
        assert_eq!(next.time, 4.0);
    }

    #[test]
    fn test_extrapolate_same_time() {
        let state = MotionState::new(-3.0, 1.5, -2.0, 7.0);
        assert_eq!(state.extrapolate(7.0), state);
    }

    #[test]
    fn test_invert_keeps_acceleration() {
        let mut state = MotionState::new(2.0, -1.0, 3.0, 0.5);
        state.invert();

        assert_eq!(state.position, -2.0);
        assert_eq!(state.velocity, 1.0);
        assert_eq!(state.acceleration, 3.0);
        assert_eq!(state.time, 0.5);
    }

    #[test]
    fn test_mirrored() {
        let state = MotionState::new(2.0, -1.0, 3.0, 0.5).mirrored();
        assert_eq!(state, MotionState::new(-2.0, 1.0, -3.0, 0.5));
    }

    #[test]
    fn test_vel2() {
        assert_eq!(MotionState::new(0.0, -3.0, 0.0, 0.0).vel2(), 9.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(MotionState::at_rest(1.0, 0.0).is_finite());
        assert!(!MotionState::new(f64::NAN, 0.0, 0.0, 0.0).is_finite());
        assert!(!MotionState::new(0.0, f64::INFINITY, 0.0, 0.0).is_finite());
    }
}
