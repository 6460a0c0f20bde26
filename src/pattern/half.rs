//! Half'n'Half: every second stroke goes only half as deep.

use crate::motion::{MotionCommand, StrokeSplit};

use super::base::{is_odd, PatternCore, StrokePattern};
use super::teasing::sensation_split;

/// Alternates full and half strokes with teasing/pounding timing.
///
/// Starts with a half stroke whenever it is polled with index 0. Timing is
/// computed from the full stroke for both kinds, so the cycle time stays the
/// same and half strokes simply travel slower.
#[derive(Debug, Clone)]
pub struct HalfnHalf {
    core: PatternCore,
    split: StrokeSplit,
    half: bool,
}

impl HalfnHalf {
    /// Display name.
    pub const NAME: &'static str = "Half'n'Half";

    /// Create the pattern with zeroed tunables.
    pub fn new() -> Self {
        Self {
            core: PatternCore::new(Self::NAME),
            split: StrokeSplit {
                time_in: 1.0,
                time_out: 1.0,
            },
            half: true,
        }
    }

    /// Timing of the most recent stroke.
    pub fn split(&self) -> StrokeSplit {
        self.split
    }

    /// Whether the next inward stroke is a half stroke.
    pub fn is_half(&self) -> bool {
        self.half
    }
}

impl Default for HalfnHalf {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokePattern for HalfnHalf {
    fn core(&self) -> &PatternCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PatternCore {
        &mut self.core
    }

    fn time_of_stroke(&self) -> f32 {
        self.core.time_of_round_trip()
    }

    fn next_target(&mut self, index: u32) -> MotionCommand {
        let core = &self.core;
        if core.is_idle() {
            let idle = core.idle_command();
            return self.core.finish(index, idle);
        }

        self.split = sensation_split(core.time_of_round_trip(), core.tunables().sensation);

        if index == 0 {
            // Gentle start
            self.half = true;
        }

        let full = core.tunables().stroke;
        let stroke = if self.half { full / 2 } else { full };

        let command = if is_odd(index) {
            self.half = !self.half;
            core.thirds_command(core.shallow(), full as f32, self.split.time_out)
        } else {
            let target = core.position(i64::from(core.shallow()) + i64::from(stroke));
            core.thirds_command(target, full as f32, self.split.time_in)
        };
        self.core.finish(index, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> HalfnHalf {
        let mut p = HalfnHalf::new();
        p.set_speed_limit(100_000, 1_000_000, 50);
        p.set_depth(1000);
        p.set_stroke(800);
        p.set_speed(400);
        p
    }

    #[test]
    fn test_starts_with_half_stroke() {
        let mut p = pattern();
        let first = p.next_target(0);
        // shallow = 200, half stroke = 400
        assert_eq!(first.target, 600);
    }

    #[test]
    fn test_alternates_full_and_half() {
        let mut p = pattern();
        let targets: [i32; 8] = core::array::from_fn(|i| p.next_target(i as u32).target);
        assert_eq!(targets, [600, 200, 1000, 200, 600, 200, 1000, 200]);
    }

    #[test]
    fn test_index_zero_restarts_with_half() {
        let mut p = pattern();
        for i in 0..6 {
            p.next_target(i);
        }
        // Next inward stroke would be a full one
        assert!(!p.is_half());
        assert_eq!(p.next_target(0).target, 600);
    }

    #[test]
    fn test_split_sums_to_round_trip() {
        let mut p = pattern();
        for s in [-100.0, -50.0, 0.0, 50.0, 100.0] {
            p.set_sensation(s);
            p.next_target(2);
            assert!((p.split().total() - p.time_of_stroke()).abs() < 1e-5);
        }
        p.set_sensation(0.0);
        p.next_target(2);
        assert_eq!(p.split().time_in, p.split().time_out);
    }

    #[test]
    fn test_velocity_same_for_full_and_half() {
        let mut p = pattern();
        let half = p.next_target(0);
        p.next_target(1);
        let full = p.next_target(2);
        assert_eq!(half.velocity, full.velocity);
    }
}
