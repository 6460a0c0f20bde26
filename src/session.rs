//! Session control: user percentages in, pattern tunables out.
//!
//! A UI reports settings as percentages. [`Session`] converts them to step
//! units with the machine geometry and forwards only what changed to the
//! [`StrokeExecutor`].

use crate::config::{
    is_change_significant, validate_settings, EngineConfig, MachineConfig, SettingPercents,
};
use crate::error::Result;
use crate::motion::{map_range, Clock, MotionCommand, NoTrace, StrokeExecutor, TraceSink};
use crate::pattern::SENSATION_MAX;

/// Map a sensation percentage (50 neutral) onto `[-100, 100]`.
pub fn sensation_from_percent(percent: f32) -> f32 {
    map_range(0.0, 100.0, -SENSATION_MAX, SENSATION_MAX, percent)
}

/// A running stroking session on one machine.
#[derive(Debug)]
pub struct Session<C, T = NoTrace> {
    machine: MachineConfig,
    executor: StrokeExecutor<C, T>,
    /// Settings as last pushed; speed only follows significant changes.
    applied: Option<SettingPercents>,
}

impl<C: Clock + Clone> Session<C, NoTrace> {
    /// Start a paused session on `machine`.
    pub fn new(machine: MachineConfig, clock: C) -> Self {
        Self::with_trace(machine, clock, NoTrace)
    }

    /// Start a session from a loaded configuration and apply its settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a session percentage is out of range.
    pub fn from_config(config: &EngineConfig, clock: C) -> Result<Self> {
        let mut session = Self::new(config.machine.clone(), clock);
        session.apply(&config.session)?;
        Ok(session)
    }
}

impl<C: Clock + Clone, T: TraceSink> Session<C, T> {
    /// Start a paused session that reports every tick to `trace`.
    pub fn with_trace(machine: MachineConfig, clock: C, trace: T) -> Self {
        let mut executor =
            StrokeExecutor::with_trace(SettingPercents::default().pattern, clock, trace);
        executor.set_speed_limit(machine.speed_limits());
        Self {
            machine,
            executor,
            applied: None,
        }
    }

    /// Push changed settings to the executor.
    ///
    /// Returns `true` if anything was pushed. Speed jitter of at most one
    /// percentage point is ignored unless another tunable changed too.
    ///
    /// # Errors
    ///
    /// Returns an error if a percentage is outside `[0, 100]`; nothing is
    /// pushed in that case.
    pub fn apply(&mut self, settings: &SettingPercents) -> Result<bool> {
        validate_settings(settings)?;

        let previous = self.applied;
        let mut pushed = *settings;
        let mut changed = false;

        if self.executor.kind() != settings.pattern {
            self.executor.set_pattern(settings.pattern);
            changed = true;
        }

        let mut others = false;

        if previous.map_or(true, |p| p.stroke != settings.stroke) {
            let stroke = self.machine.travel_percent_steps(settings.stroke);
            log::debug!("Stroke: {} % -> {} steps", settings.stroke, stroke);
            self.executor.set_stroke(stroke);
            others = true;
        }

        if previous.map_or(true, |p| p.depth != settings.depth) {
            let depth = self.machine.travel_percent_steps(settings.depth);
            log::debug!("Depth: {} % -> {} steps", settings.depth, depth);
            self.executor.set_depth(depth);
            others = true;
        }

        if previous.map_or(true, |p| p.sensation != settings.sensation) {
            let sensation = sensation_from_percent(settings.sensation);
            log::debug!("Sensation: {} % -> {}", settings.sensation, sensation);
            self.executor.set_sensation(sensation);
            others = true;
        }

        let speed_due = match previous {
            None => true,
            Some(p) => others || is_change_significant(p.speed, settings.speed),
        };
        if speed_due {
            let speed = self.machine.velocity_percent_steps(settings.speed);
            log::debug!("Speed: {} % -> {} steps/s", settings.speed, speed);
            self.executor.set_speed(speed);
        } else if let Some(p) = previous {
            pushed.speed = p.speed;
        }

        changed |= others || speed_due;
        self.applied = Some(pushed);
        Ok(changed)
    }

    /// Run one control tick.
    #[inline]
    pub fn tick(&mut self) -> MotionCommand {
        self.executor.poll()
    }

    /// Settings as last pushed, `None` before the first [`apply`](Self::apply).
    pub fn applied(&self) -> Option<&SettingPercents> {
        self.applied.as_ref()
    }

    /// Machine this session runs on.
    pub fn machine(&self) -> &MachineConfig {
        &self.machine
    }

    /// Underlying executor.
    pub fn executor(&self) -> &StrokeExecutor<C, T> {
        &self.executor
    }

    /// Underlying executor, mutably.
    pub fn executor_mut(&mut self) -> &mut StrokeExecutor<C, T> {
        &mut self.executor
    }
}
