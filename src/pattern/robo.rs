//! Robo stroke: sensation reshapes the trapezoid itself.

use crate::motion::{map_range, MotionCommand, TrapezoidProfile};

use super::base::{is_odd, PatternCore, StrokePattern};

/// Accel share of the neutral (symmetric thirds) stroke.
pub const NEUTRAL_FRACTION: f32 = 1.0 / 3.0;
/// Accel share at full positive sensation: near constant speed.
pub const ROBOTIC_FRACTION: f32 = 0.5;
/// Accel share at full negative sensation: soft triangle.
pub const SOFT_FRACTION: f32 = 0.05;

/// Sensation controls the acceleration phase of the stroke.
///
/// Positive values push the accel share towards 0.5, which feels robotic;
/// negative values shrink it towards 0.05.
#[derive(Debug, Clone)]
pub struct RoboStroke {
    core: PatternCore,
    fraction: f32,
}

impl RoboStroke {
    /// Display name.
    pub const NAME: &'static str = "Robo Stroke";

    /// Create the pattern with zeroed tunables.
    pub fn new() -> Self {
        Self {
            core: PatternCore::new(Self::NAME),
            fraction: NEUTRAL_FRACTION,
        }
    }

    /// Accel share used for the most recent stroke.
    pub fn accel_fraction(&self) -> f32 {
        self.fraction
    }

    fn fraction_for(sensation: f32) -> f32 {
        if sensation >= 0.0 {
            map_range(0.0, 100.0, NEUTRAL_FRACTION, ROBOTIC_FRACTION, sensation)
        } else {
            map_range(0.0, 100.0, NEUTRAL_FRACTION, SOFT_FRACTION, -sensation)
        }
    }
}

impl Default for RoboStroke {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokePattern for RoboStroke {
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

        self.fraction = Self::fraction_for(core.tunables().sensation);
        let profile = TrapezoidProfile::with_split(core.tunables().speed as f32, self.fraction);

        let target = if is_odd(index) { core.shallow() } else { core.deep() };
        let command = MotionCommand::new(
            target,
            core.limits().clamp_velocity(profile.velocity),
            core.limits().clamp_acceleration(profile.acceleration),
        );
        self.core.finish(index, command)
    }
}
