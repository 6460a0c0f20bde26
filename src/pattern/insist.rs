//! Insist: shortened strokes at the full stroke's speed.

use crate::motion::MotionCommand;

use super::base::{is_odd, PatternCore, StrokePattern, SENSATION_MAX};

/// Sensation shortens the effective stroke while keeping its velocity.
///
/// `|sensation|` removes that percentage of the stroke; the sign picks the
/// end it stays at. Positive values wander to the front (full depth),
/// negative ones to the back (retracted end). Acceleration is scaled by the
/// same fraction so the short stroke keeps its 1/3 profile.
#[derive(Debug, Clone)]
pub struct Insist {
    core: PatternCore,
    fraction: f32,
    real_stroke: i32,
    in_front: bool,
}

impl Insist {
    /// Display name.
    pub const NAME: &'static str = "Insist";

    /// Create the pattern with zeroed tunables.
    pub fn new() -> Self {
        Self {
            core: PatternCore::new(Self::NAME),
            fraction: 1.0,
            real_stroke: 0,
            in_front: false,
        }
    }

    /// Share of the nominal stroke that is travelled, `(100 - |s|) / 100`.
    pub fn stroke_fraction(&self) -> f32 {
        self.fraction
    }

    /// Effective stroke length in steps.
    pub fn real_stroke(&self) -> i32 {
        self.real_stroke
    }

    /// Whether strokes happen near full depth.
    pub fn is_in_front(&self) -> bool {
        self.in_front
    }

    fn update_real_stroke(&mut self) {
        let sensation = self.core.tunables().sensation;
        self.fraction = (SENSATION_MAX - libm::fabsf(sensation)) / SENSATION_MAX;
        self.in_front = sensation > 0.0;
        self.real_stroke = (self.core.tunables().stroke as f32 * self.fraction) as i32;
    }

    fn idle(&self) -> MotionCommand {
        let core = &self.core;
        let target = if self.in_front {
            core.shallow_for(self.real_stroke)
        } else {
            core.shallow()
        };
        core.idle_command_to(target)
    }
}

impl Default for Insist {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokePattern for Insist {
    fn core(&self) -> &PatternCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PatternCore {
        &mut self.core
    }

    fn next_target(&mut self, index: u32) -> MotionCommand {
        self.update_real_stroke();
        if self.core.is_idle() {
            let idle = self.idle();
            return self.core.finish(index, idle);
        }

        let core = &self.core;
        let time = core.time_of_stroke();
        let limits = core.limits();
        let velocity = limits.clamp_velocity(1.5 * core.tunables().speed as f32);
        let acceleration = limits.clamp_acceleration(3.0 * velocity as f32 / (time * self.fraction));

        let target = match (self.in_front, is_odd(index)) {
            (true, true) => core.shallow_for(self.real_stroke),
            (true, false) => core.deep(),
            (false, true) => core.shallow(),
            (false, false) => {
                core.position(i64::from(core.shallow()) + i64::from(self.real_stroke))
            }
        };

        let command = MotionCommand::new(target, velocity, acceleration);
        self.core.finish(index, command)
    }
}
