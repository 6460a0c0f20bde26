//! Teasing or pounding: asymmetric in/out timing.

use crate::motion::{map_range, MotionCommand, StrokeSplit};

use super::base::{is_odd, PatternCore, StrokePattern};

/// Largest speed-up of the fast half of the stroke.
pub(crate) const MAX_SPEED_RATIO: f32 = 5.0;

/// Split a round trip according to sensation.
///
/// `|sensation|` maps linearly to a speed-up in `[1, 5]` for one half;
/// positive sensation makes the inward half fast.
pub(crate) fn sensation_split(round_trip: f32, sensation: f32) -> StrokeSplit {
    let ratio = map_range(0.0, 100.0, 1.0, MAX_SPEED_RATIO, libm::fabsf(sensation));
    StrokeSplit::asymmetric(round_trip, ratio, sensation)
}

/// Sensation shifts time between the inward and outward half.
///
/// Sensation > 0 drives in up to 5x faster (pounding), < 0 pulls out faster
/// (teasing). The full cycle always takes the same time.
#[derive(Debug, Clone)]
pub struct TeasingPounding {
    core: PatternCore,
    split: StrokeSplit,
}

impl TeasingPounding {
    /// Display name.
    pub const NAME: &'static str = "Teasing Pounding";

    /// Create the pattern with zeroed tunables.
    pub fn new() -> Self {
        Self {
            core: PatternCore::new(Self::NAME),
            split: StrokeSplit {
                time_in: 1.0,
                time_out: 1.0,
            },
        }
    }

    /// Timing of the most recent stroke.
    pub fn split(&self) -> StrokeSplit {
        self.split
    }
}

impl Default for TeasingPounding {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokePattern for TeasingPounding {
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
        let stroke = core.tunables().stroke as f32;

        let command = if is_odd(index) {
            core.thirds_command(core.shallow(), stroke, self.split.time_out)
        } else {
            core.thirds_command(core.deep(), stroke, self.split.time_in)
        };
        self.core.finish(index, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(sensation: f32) -> TeasingPounding {
        let mut p = TeasingPounding::new();
        p.set_speed_limit(100_000, 1_000_000, 50);
        p.set_depth(1000);
        p.set_stroke(600);
        p.set_speed(300);
        p.set_sensation(sensation);
        p
    }

    #[test]
    fn test_split_sums_to_round_trip() {
        for s in [-100.0, -73.0, -1.0, 0.0, 1.0, 42.0, 100.0] {
            let mut p = pattern(s);
            p.next_target(0);
            let total = p.time_of_stroke();
            assert!((p.split().total() - total).abs() < 1e-5, "sensation {}", s);
        }
    }

    #[test]
    fn test_neutral_is_symmetric() {
        let mut p = pattern(0.0);
        p.next_target(0);
        assert_eq!(p.split().time_in, p.split().time_out);

        let inward = p.next_target(0);
        let outward = p.next_target(1);
        assert_eq!(inward.velocity, outward.velocity);
    }

    #[test]
    fn test_positive_sensation_pounds_inward() {
        let mut p = pattern(100.0);
        let inward = p.next_target(2);
        let outward = p.next_target(3);

        assert_eq!(inward.target, 1000);
        assert_eq!(outward.target, 400);
        assert!(inward.velocity > outward.velocity);

        // round trip = 2 * 600 / 300 = 4 s, fast half = 2 / 5 = 0.4 s
        assert!((p.split().time_in - 0.4).abs() < 1e-5);
        assert!((p.split().time_out - 3.6).abs() < 1e-5);
    }

    #[test]
    fn test_negative_sensation_teases_outward() {
        let mut p = pattern(-100.0);
        let inward = p.next_target(2);
        let outward = p.next_target(3);
        assert!(outward.velocity > inward.velocity);
    }

    #[test]
    fn test_stroke_larger_than_depth_stays_in_range() {
        let mut p = pattern(30.0);
        p.set_stroke(5000);
        let out = p.next_target(1);
        assert_eq!(out.target, 0);
        let inward = p.next_target(2);
        assert_eq!(inward.target, 1000);
    }
}
