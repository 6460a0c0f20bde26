//! Stop'n'Go: series of strokes separated by pauses.
//!
//! The series grows from one stroke to [`NUMBER_OF_STROKES`] and shrinks back
//! again. After every series the pattern holds position by returning skip
//! commands until the pause has elapsed.

use crate::motion::{map_range, Clock, DelayTimer, MotionCommand};

use super::base::{is_odd, PatternCore, StrokePattern};

/// Longest series of strokes.
pub const NUMBER_OF_STROKES: u32 = 5;
/// Pause at sensation -100.
pub const LONGEST_DELAY_MS: f32 = 10_000.0;
/// Pause at sensation 100.
pub const SHORTEST_DELAY_MS: f32 = 100.0;

/// Pause length for a sensation value, decreasing as sensation rises.
pub fn delay_for(sensation: f32) -> u32 {
    map_range(-100.0, 100.0, LONGEST_DELAY_MS, SHORTEST_DELAY_MS, sensation) as u32
}

/// Stroke series with pauses, timed by an injected clock.
#[derive(Debug, Clone)]
pub struct StopNGo<C> {
    core: PatternCore,
    clock: C,
    delay: DelayTimer,
    series_index: u32,
    stroke_index: u32,
    count_up: bool,
}

impl<C: Clock> StopNGo<C> {
    /// Display name.
    pub const NAME: &'static str = "Stop'n'Go";

    /// Create the pattern reading time from `clock`.
    pub fn new(clock: C) -> Self {
        Self {
            core: PatternCore::new(Self::NAME),
            clock,
            delay: DelayTimer::new(delay_for(0.0)),
            series_index: 1,
            stroke_index: 0,
            count_up: true,
        }
    }

    /// Current pause length.
    pub fn delay_ms(&self) -> u32 {
        self.delay.duration_ms()
    }

    /// Length of the current series, `1..=5`.
    pub fn series_index(&self) -> u32 {
        self.series_index
    }

    /// Whether a pause is in progress.
    pub fn is_paused(&self) -> bool {
        self.delay.is_still_delayed(self.clock.now_ms())
    }

    fn finish_series(&mut self) {
        self.stroke_index = 0;

        if self.series_index >= NUMBER_OF_STROKES {
            self.count_up = false;
        }
        if self.series_index <= 1 {
            self.count_up = true;
        }

        if self.count_up {
            self.series_index += 1;
        } else {
            self.series_index -= 1;
        }

        self.delay.start(self.clock.now_ms());
        log::trace!(
            "{}: pause {} ms, next series {}",
            Self::NAME,
            self.delay.duration_ms(),
            self.series_index
        );
    }
}

impl<C: Clock> StrokePattern for StopNGo<C> {
    fn core(&self) -> &PatternCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PatternCore {
        &mut self.core
    }

    /// Stores sensation and recomputes the pause, also for a running pause.
    fn set_sensation(&mut self, sensation: f32) {
        self.core.set_sensation(sensation);
        self.delay.update(delay_for(self.core.tunables().sensation));
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

        if self.is_paused() {
            let hold = MotionCommand {
                skip: true,
                ..MotionCommand::new(self.core.last_command().target, velocity, acceleration)
            };
            return self.core.finish(index, hold);
        }

        let target = if is_odd(index) {
            let target = self.core.shallow();
            if self.stroke_index >= self.series_index {
                self.finish_series();
            }
            target
        } else {
            self.stroke_index += 1;
            self.core.deep()
        };

        let command = MotionCommand::new(target, velocity, acceleration);
        self.core.finish(index, command)
    }
}
