//! Motion command handed to the executor every tick.

/// Parameters for one trapezoidal move, produced fresh by every
/// [`next_target`](crate::pattern::StrokePattern::next_target) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionCommand {
    /// Absolute target position in steps, within `[0, depth]`.
    pub target: i32,

    /// Cruise velocity in steps/sec, within `[0, max_velocity]`.
    pub velocity: u32,

    /// Acceleration in steps/sec², within `[0, max_acceleration]`.
    pub acceleration: u32,

    /// No valid target this tick: hold position and poll again.
    pub skip: bool,
}

impl MotionCommand {
    /// Create a command for a regular move.
    #[inline]
    pub const fn new(target: i32, velocity: u32, acceleration: u32) -> Self {
        Self {
            target,
            velocity,
            acceleration,
            skip: false,
        }
    }

    /// Check if the executor should actually move.
    #[inline]
    pub fn is_move(&self) -> bool {
        !self.skip
    }
}
