//! Trapezoidal stroke profile math.
//!
//! A stroke covering distance `d` in time `t` with equal thirds for
//! acceleration, cruise and deceleration needs `v = 1.5 d / t` and
//! `a = 3 v / t`. Patterns bias `d`, `t` or the split fraction.

/// Unclamped velocity/acceleration pair for one half-stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidProfile {
    /// Cruise velocity in steps/sec.
    pub velocity: f32,
    /// Acceleration in steps/sec².
    pub acceleration: f32,
}

impl TrapezoidProfile {
    /// Profile with 1/3 accelerate, 1/3 cruise, 1/3 decelerate.
    #[inline]
    pub fn thirds(distance: f32, time: f32) -> Self {
        let velocity = 1.5 * distance / time;
        Self {
            velocity,
            acceleration: Self::thirds_acceleration(velocity, time),
        }
    }

    /// Acceleration matching a thirds profile at the given cruise velocity.
    #[inline]
    pub fn thirds_acceleration(velocity: f32, time: f32) -> f32 {
        3.0 * velocity / time
    }

    /// Profile with an arbitrary accel/cruise split.
    ///
    /// `fraction` is the share of the stroke spent accelerating (and again
    /// decelerating); `1/3` reproduces [`thirds`](Self::thirds) at unit time.
    #[inline]
    pub fn with_split(speed: f32, fraction: f32) -> Self {
        Self {
            velocity: speed / (1.0 - fraction),
            acceleration: speed / fraction,
        }
    }
}

/// Timing of the two halves of a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSplit {
    /// Time of the half-stroke towards depth, in seconds.
    pub time_in: f32,
    /// Time of the half-stroke away from depth, in seconds.
    pub time_out: f32,
}

impl StrokeSplit {
    /// Split `total` so one half runs `ratio` times faster than an even split.
    ///
    /// The other half absorbs the remainder, so the sum always equals
    /// `total`. A positive `sense` makes the inward half the fast one.
    pub fn asymmetric(total: f32, ratio: f32, sense: f32) -> Self {
        let fast = (0.5 * total) / ratio;
        if sense > 0.0 {
            Self {
                time_in: fast,
                time_out: total - fast,
            }
        } else {
            Self {
                time_in: total - fast,
                time_out: fast,
            }
        }
    }

    /// Total duration of both halves.
    #[inline]
    pub fn total(&self) -> f32 {
        self.time_in + self.time_out
    }
}
