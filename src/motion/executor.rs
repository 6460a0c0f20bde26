//! Stroke execution: owns the active pattern and drives it tick by tick.

use crate::config::SpeedLimits;
use crate::pattern::{Pattern, PatternKind, StrokePattern, Tunables};

use super::command::MotionCommand;
use super::timer::Clock;
use super::trace::{NoTrace, TickTrace, TraceSink};

/// Runtime state of a stroking session.
///
/// Holds exactly one pattern. Switching patterns rebuilds it from the
/// remembered limits and tunables, so a new pattern never starts from
/// zeroed settings.
#[derive(Debug)]
pub struct StrokeExecutor<C, T = NoTrace> {
    /// Active pattern.
    pattern: Pattern<C>,

    /// Clock handed to every pattern that is built.
    clock: C,

    /// Limits last pushed with `set_speed_limit`.
    limits: SpeedLimits,

    /// Tunables last pushed, replayed on pattern switch.
    tunables: Tunables,

    /// Index of the next half-stroke.
    index: u32,

    /// Diagnostics sink.
    trace: T,
}

impl<C: Clock + Clone> StrokeExecutor<C, NoTrace> {
    /// Create an executor running `kind` without tracing.
    pub fn new(kind: PatternKind, clock: C) -> Self {
        Self::with_trace(kind, clock, NoTrace)
    }
}

impl<C: Clock + Clone, T: TraceSink> StrokeExecutor<C, T> {
    /// Create an executor that reports every tick to `trace`.
    pub fn with_trace(kind: PatternKind, clock: C, trace: T) -> Self {
        Self {
            pattern: Pattern::new(kind, clock.clone()),
            clock,
            limits: SpeedLimits::default(),
            tunables: Tunables::default(),
            index: 0,
            trace,
        }
    }

    /// Replace the active pattern.
    ///
    /// The new pattern receives the current limits and tunables and starts
    /// at index 0. Selecting the active kind again restarts it as well.
    pub fn set_pattern(&mut self, kind: PatternKind) {
        log::info!("Switching pattern: {} -> {}", self.pattern.name(), kind.name());

        let mut pattern = Pattern::new(kind, self.clock.clone());
        let l = self.limits;
        pattern.set_speed_limit(l.max_velocity, l.max_acceleration, l.steps_per_mm);
        let t = self.tunables;
        pattern.set_speed(t.speed);
        pattern.set_stroke(t.stroke);
        pattern.set_depth(t.depth);
        pattern.set_sensation(t.sensation);

        self.pattern = pattern;
        self.index = 0;
    }

    /// Set the hardware limits, usually once per session.
    pub fn set_speed_limit(&mut self, limits: SpeedLimits) {
        log::debug!(
            "Speed limits: v_max={} a_max={} steps/mm={}",
            limits.max_velocity,
            limits.max_acceleration,
            limits.steps_per_mm
        );
        self.limits = limits;
        self.pattern
            .set_speed_limit(limits.max_velocity, limits.max_acceleration, limits.steps_per_mm);
    }

    /// Set the stroke velocity figure in steps/sec.
    pub fn set_speed(&mut self, speed: i32) {
        self.tunables.speed = speed;
        self.pattern.set_speed(speed);
    }

    /// Set the stroke length in steps.
    pub fn set_stroke(&mut self, stroke: i32) {
        self.tunables.stroke = stroke;
        self.pattern.set_stroke(stroke);
    }

    /// Set the maximum depth in steps.
    pub fn set_depth(&mut self, depth: i32) {
        self.tunables.depth = depth;
        self.pattern.set_depth(depth);
    }

    /// Set the sensation in `[-100, 100]`.
    pub fn set_sensation(&mut self, sensation: f32) {
        self.pattern.set_sensation(sensation);
        self.tunables.sensation = self.pattern.core().tunables().sensation;
    }

    /// Run one control tick.
    ///
    /// A skipped tick keeps the index, so the same half-stroke is asked for
    /// again on the next poll.
    pub fn poll(&mut self) -> MotionCommand {
        let index = self.index;
        let command = self.pattern.next_target(index);

        self.trace.record(&TickTrace {
            pattern: self.pattern.name(),
            index,
            time_of_stroke: self.pattern.time_of_stroke(),
            command,
        });

        if !command.skip {
            self.index = self.index.wrapping_add(1);
        }
        command
    }

    /// Index the next poll will use.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Active pattern.
    #[inline]
    pub fn pattern(&self) -> &Pattern<C> {
        &self.pattern
    }

    /// Kind of the active pattern.
    #[inline]
    pub fn kind(&self) -> PatternKind {
        self.pattern.kind()
    }

    /// Current speed limits.
    #[inline]
    pub fn limits(&self) -> SpeedLimits {
        self.limits
    }

    /// Tunables as last pushed.
    #[inline]
    pub fn tunables(&self) -> Tunables {
        self.tunables
    }

    /// Diagnostics sink.
    pub fn trace(&self) -> &T {
        &self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ManualClock;

    fn executor(kind: PatternKind, clock: &ManualClock) -> StrokeExecutor<&ManualClock> {
        let mut exec = StrokeExecutor::new(kind, clock);
        exec.set_speed_limit(SpeedLimits::new(10_000, 100_000, 50));
        exec.set_depth(1000);
        exec.set_stroke(600);
        exec.set_speed(300);
        exec
    }

    #[test]
    fn test_poll_advances_index() {
        let clock = ManualClock::new();
        let mut exec = executor(PatternKind::SimplePenetration, &clock);

        assert_eq!(exec.poll().target, 0);
        assert_eq!(exec.poll().target, 1000);
        assert_eq!(exec.poll().target, 0);
        assert_eq!(exec.index(), 3);
    }

    #[test]
    fn test_switch_keeps_settings_and_resets_index() {
        let clock = ManualClock::new();
        let mut exec = executor(PatternKind::SimplePenetration, &clock);
        exec.set_sensation(40.0);
        exec.poll();
        exec.poll();

        exec.set_pattern(PatternKind::HalfnHalf);
        assert_eq!(exec.index(), 0);
        assert_eq!(exec.kind(), PatternKind::HalfnHalf);

        let t = exec.pattern().core().tunables();
        assert_eq!(t.speed, 300);
        assert_eq!(t.stroke, 600);
        assert_eq!(t.depth, 1000);
        assert_eq!(t.sensation, 40.0);
        assert_eq!(exec.pattern().core().limits(), &SpeedLimits::new(10_000, 100_000, 50));

        // Gentle start: half of 600 above the retracted end at 400
        assert_eq!(exec.poll().target, 700);
    }

    #[test]
    fn test_skip_does_not_advance_index() {
        let clock = ManualClock::new();
        let mut exec = executor(PatternKind::StopNGo, &clock);
        exec.set_sensation(100.0);

        exec.poll();
        exec.poll();
        assert_eq!(exec.index(), 2);

        let held = exec.poll();
        assert!(held.skip);
        assert_eq!(exec.index(), 2);

        clock.advance(100);
        assert!(!exec.poll().skip);
        assert_eq!(exec.index(), 3);
    }

    #[test]
    fn test_trace_sees_every_tick() {
        let clock = ManualClock::new();
        let mut seen = [0_u32; 4];
        let mut count = 0;
        {
            let mut exec = StrokeExecutor::with_trace(PatternKind::Deeper, &clock, |t: &TickTrace| {
                seen[count] = t.index;
                count += 1;
            });
            exec.set_speed_limit(SpeedLimits::new(10_000, 100_000, 50));
            exec.set_depth(1000);
            exec.set_stroke(600);
            exec.set_speed(300);
            for _ in 0..4 {
                exec.poll();
            }
            assert_eq!(exec.pattern().name(), "Deeper");
        }
        assert_eq!(count, 4);
        assert_eq!(seen, [0, 1, 2, 3]);
    }

    #[test]
    fn test_sensation_is_clamped_and_remembered() {
        let clock = ManualClock::new();
        let mut exec = executor(PatternKind::Insist, &clock);
        exec.set_sensation(500.0);
        assert_eq!(exec.tunables().sensation, 100.0);
    }
}
