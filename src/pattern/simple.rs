//! Simple penetration: symmetric trapezoid over the full depth.

use crate::motion::MotionCommand;

use super::base::{is_odd, PatternCore, StrokePattern};

/// Symmetric 1/3-1/3-1/3 stroke between `0` and full depth.
///
/// Stroke length only limits the stroke time; sensation has no effect.
/// Odd indices go to depth, even indices back to `0`.
#[derive(Debug, Clone)]
pub struct SimplePenetration {
    core: PatternCore,
}

impl SimplePenetration {
    /// Display name.
    pub const NAME: &'static str = "Simple Penetration";

    /// Create the pattern with zeroed tunables.
    pub fn new() -> Self {
        Self {
            core: PatternCore::new(Self::NAME),
        }
    }
}

impl Default for SimplePenetration {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokePattern for SimplePenetration {
    fn core(&self) -> &PatternCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PatternCore {
        &mut self.core
    }

    fn next_target(&mut self, index: u32) -> MotionCommand {
        let core = &self.core;
        if core.is_idle() {
            let idle = core.idle_command();
            return self.core.finish(index, idle);
        }

        let time = core.time_of_stroke();
        let limits = core.limits();
        let velocity = limits.clamp_velocity(1.5 * core.tunables().speed as f32);
        let acceleration = limits.clamp_acceleration(3.0 * velocity as f32 / time);

        let target = if is_odd(index) { core.deep() } else { 0 };

        let command = MotionCommand::new(target, velocity, acceleration);
        self.core.finish(index, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> SimplePenetration {
        let mut p = SimplePenetration::new();
        p.set_speed_limit(1000, 10000, 50);
        p.set_depth(1000);
        p.set_stroke(1000);
        p.set_speed(100);
        p
    }

    #[test]
    fn test_alternates_between_depth_and_zero() {
        let mut p = pattern();

        let out = p.next_target(1);
        assert_eq!(out.target, 1000);
        assert_eq!(out.velocity, 150);
        assert!(!out.skip);

        let back = p.next_target(2);
        assert_eq!(back.target, 0);
        assert_eq!(back.velocity, 150);
    }

    #[test]
    fn test_acceleration_matches_thirds() {
        let mut p = pattern();
        // time_of_stroke = 1000 / 100 = 10 s, a = 3 * 150 / 10
        assert_eq!(p.next_target(1).acceleration, 45);
    }

    #[test]
    fn test_sensation_has_no_effect() {
        let mut p = pattern();
        let neutral = p.next_target(3);
        p.set_sensation(-80.0);
        assert_eq!(p.next_target(3), neutral);
        p.set_sensation(100.0);
        assert_eq!(p.next_target(3), neutral);
    }

    #[test]
    fn test_velocity_clamped_to_limit() {
        let mut p = pattern();
        p.set_speed(5000);
        assert_eq!(p.next_target(1).velocity, 1000);
    }

    #[test]
    fn test_idle_when_speed_zero() {
        let mut p = pattern();
        p.set_stroke(400);
        p.set_speed(0);
        for index in 0..4 {
            let cmd = p.next_target(index);
            assert_eq!(cmd.target, 600);
            assert_eq!(cmd.velocity, 50);
            assert_eq!(cmd.acceleration, 5000);
        }
    }
}
