//! Deeper: each stroke goes a little further until the full stroke is
//! reached, then the ramp starts over.

use crate::motion::{map_range, MotionCommand};

use super::base::{is_odd, PatternCore, StrokePattern};

/// Shortest ramp, at sensation -100.
pub const MIN_RAMP: u32 = 2;
/// Ramp length at neutral sensation.
pub const NEUTRAL_RAMP: u32 = 11;
/// Longest ramp, at sensation 100.
pub const MAX_RAMP: u32 = 32;

/// Sawtooth insertion depth over a sensation-controlled number of strokes.
#[derive(Debug, Clone)]
pub struct Deeper {
    core: PatternCore,
    ramp: u32,
    cycle: u32,
}

impl Deeper {
    /// Display name.
    pub const NAME: &'static str = "Deeper";

    /// Create the pattern with zeroed tunables.
    pub fn new() -> Self {
        Self {
            core: PatternCore::new(Self::NAME),
            ramp: MIN_RAMP,
            cycle: 1,
        }
    }

    /// Strokes per ramp, as used for the most recent stroke.
    pub fn ramp_length(&self) -> u32 {
        self.ramp
    }

    /// Position inside the ramp, `1..=ramp_length`.
    pub fn cycle_index(&self) -> u32 {
        self.cycle
    }

    /// Number of strokes in one ramp for a sensation value.
    pub fn ramp_for(sensation: f32) -> u32 {
        let ramp = if sensation < 0.0 {
            map_range(-100.0, 0.0, MIN_RAMP as f32, NEUTRAL_RAMP as f32, sensation)
        } else {
            map_range(0.0, 100.0, NEUTRAL_RAMP as f32, MAX_RAMP as f32, sensation)
        };
        (ramp as u32).clamp(MIN_RAMP, MAX_RAMP)
    }
}

impl Default for Deeper {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokePattern for Deeper {
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

        // Sensation changes may make the depth jump
        self.ramp = Self::ramp_for(core.tunables().sensation);
        self.cycle = (index / 2) % self.ramp + 1;

        let slope = i64::from(core.tunables().stroke) / i64::from(self.ramp);
        let amplitude = slope * i64::from(self.cycle);

        let target = if is_odd(index) {
            core.shallow()
        } else {
            core.position(i64::from(core.shallow()) + amplitude)
        };
        let command = core.thirds_command(target, amplitude as f32, core.time_of_stroke());
        self.core.finish(index, command)
    }
}
