//! Hardware speed limits handed to a pattern once per session.

/// Velocity and acceleration ceilings in step units.
///
/// Every command a pattern emits is clamped against these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedLimits {
    /// Maximum velocity in steps/sec.
    pub max_velocity: u32,
    /// Maximum acceleration in steps/sec².
    pub max_acceleration: u32,
    /// Steps per millimeter of travel.
    pub steps_per_mm: u32,
}

impl SpeedLimits {
    /// Create new limits.
    pub const fn new(max_velocity: u32, max_acceleration: u32, steps_per_mm: u32) -> Self {
        Self {
            max_velocity,
            max_acceleration,
            steps_per_mm,
        }
    }

    /// Clamp a computed velocity into `[0, max_velocity]`.
    ///
    /// NaN maps to zero, +inf to the limit.
    #[inline]
    pub fn clamp_velocity(&self, velocity: f32) -> u32 {
        clamp_rate(velocity, self.max_velocity)
    }

    /// Clamp a computed acceleration into `[0, max_acceleration]`.
    #[inline]
    pub fn clamp_acceleration(&self, acceleration: f32) -> u32 {
        clamp_rate(acceleration, self.max_acceleration)
    }
}

fn clamp_rate(value: f32, max: u32) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= max as f32 {
        max
    } else {
        // Truncation matches the integer math of the stroke formulas.
        (value as u32).min(max)
    }
}
