//! Shared state and behavior of every stroke pattern.

use crate::config::SpeedLimits;
use crate::motion::{MotionCommand, TrapezoidProfile};

/// Sensation bounds; 0 is neutral.
pub const SENSATION_MAX: f32 = 100.0;

/// User tunables, settable at any time and read on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tunables {
    /// Stroke velocity figure in steps/sec.
    pub speed: i32,
    /// Intended stroke length in steps.
    pub stroke: i32,
    /// Maximum insertion depth in steps.
    pub depth: i32,
    /// Shaping parameter in `[-100, 100]`.
    pub sensation: f32,
}

/// State shared by all patterns: tunables, limits, and the last command.
#[derive(Debug, Clone)]
pub struct PatternCore {
    name: &'static str,
    tunables: Tunables,
    limits: SpeedLimits,
    index: Option<u32>,
    last: MotionCommand,
}

impl PatternCore {
    /// Create a core with zeroed tunables and limits.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tunables: Tunables::default(),
            limits: SpeedLimits::default(),
            index: None,
            last: MotionCommand::default(),
        }
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current tunables.
    #[inline]
    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// Current speed limits.
    #[inline]
    pub fn limits(&self) -> &SpeedLimits {
        &self.limits
    }

    /// Last stroke index seen, `None` before the first call.
    #[inline]
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    /// Last command produced.
    #[inline]
    pub fn last_command(&self) -> MotionCommand {
        self.last
    }

    #[inline]
    pub(crate) fn set_speed(&mut self, speed: i32) {
        self.tunables.speed = speed;
    }

    #[inline]
    pub(crate) fn set_stroke(&mut self, stroke: i32) {
        self.tunables.stroke = stroke;
    }

    #[inline]
    pub(crate) fn set_depth(&mut self, depth: i32) {
        self.tunables.depth = depth;
    }

    #[inline]
    pub(crate) fn set_sensation(&mut self, sensation: f32) {
        self.tunables.sensation = clamp_sensation(sensation);
    }

    #[inline]
    pub(crate) fn set_limits(&mut self, limits: SpeedLimits) {
        self.limits = limits;
    }

    /// Remember the outcome of a tick and hand it back.
    #[inline]
    pub(crate) fn finish(&mut self, index: u32, command: MotionCommand) -> MotionCommand {
        self.index = Some(index);
        self.last = command;
        command
    }

    /// Motion is paused: no real waveform may be generated.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.tunables.speed == 0
    }

    /// Effective travel: `min(|depth|, |stroke|)` in steps.
    #[inline]
    pub fn range_of_stroke(&self) -> f32 {
        let t = &self.tunables;
        t.depth.unsigned_abs().min(t.stroke.unsigned_abs()) as f32
    }

    /// Speed guarded for use as a divisor, within `[1, max_velocity]`.
    #[inline]
    pub fn divisor_speed(&self) -> f32 {
        let max = self.limits.max_velocity.clamp(1, i32::MAX as u32) as i32;
        self.tunables.speed.clamp(1, max) as f32
    }

    /// Time of one half-stroke in seconds.
    #[inline]
    pub fn time_of_stroke(&self) -> f32 {
        self.range_of_stroke() / self.divisor_speed()
    }

    /// Time of a full out-and-in cycle in seconds.
    ///
    /// Used by patterns that time both halves separately.
    #[inline]
    pub fn time_of_round_trip(&self) -> f32 {
        2.0 * self.time_of_stroke()
    }

    /// Clamp a position into `[0, depth]`.
    ///
    /// A negative depth collapses the valid range to `0`.
    #[inline]
    pub fn position(&self, steps: i64) -> i32 {
        let depth = i64::from(self.tunables.depth.max(0));
        steps.clamp(0, depth) as i32
    }

    /// Fully inserted position.
    #[inline]
    pub fn deep(&self) -> i32 {
        self.position(i64::from(self.tunables.depth))
    }

    /// Retracted end of the stroke: `depth - stroke`, clamped.
    #[inline]
    pub fn shallow(&self) -> i32 {
        self.shallow_for(self.tunables.stroke)
    }

    /// Retracted end of a stroke of the given length.
    #[inline]
    pub fn shallow_for(&self, stroke: i32) -> i32 {
        self.position(i64::from(self.tunables.depth) - i64::from(stroke))
    }

    /// Clamp a profile against the speed limits.
    ///
    /// Acceleration is derived from the already clamped velocity.
    pub fn thirds_command(&self, target: i32, distance: f32, time: f32) -> MotionCommand {
        let velocity = self.limits.clamp_velocity(TrapezoidProfile::thirds(distance, time).velocity);
        let acceleration = self
            .limits
            .clamp_acceleration(TrapezoidProfile::thirds_acceleration(velocity as f32, time));
        MotionCommand::new(target, velocity, acceleration)
    }

    /// Gentle command used while paused.
    ///
    /// Crawls to `target` at 5 % of maximum velocity and 50 % of maximum
    /// acceleration.
    pub fn idle_command_to(&self, target: i32) -> MotionCommand {
        MotionCommand::new(
            target,
            (0.05 * self.limits.max_velocity as f32) as u32,
            (0.5 * self.limits.max_acceleration as f32) as u32,
        )
    }

    /// Idle command parked at the retracted end of the stroke.
    #[inline]
    pub fn idle_command(&self) -> MotionCommand {
        self.idle_command_to(self.shallow())
    }
}

/// Clamp sensation into `[-100, 100]`; NaN becomes neutral.
#[inline]
pub fn clamp_sensation(sensation: f32) -> f32 {
    if sensation.is_nan() {
        0.0
    } else {
        sensation.clamp(-SENSATION_MAX, SENSATION_MAX)
    }
}

/// Odd indices move away from depth in every pattern but the
/// simple penetration one.
#[inline]
pub(crate) fn is_odd(index: u32) -> bool {
    index % 2 == 1
}

/// The contract every stroke pattern fulfills.
///
/// Setters only store; a few patterns derive extra state from sensation.
/// [`next_target`](Self::next_target) runs once per control tick, never
/// blocks and never allocates.
pub trait StrokePattern {
    /// Shared state.
    fn core(&self) -> &PatternCore;

    /// Shared state, mutably.
    fn core_mut(&mut self) -> &mut PatternCore;

    /// Display name.
    fn name(&self) -> &'static str {
        self.core().name()
    }

    /// Set the stroke velocity figure (steps/sec).
    fn set_speed(&mut self, speed: i32) {
        self.core_mut().set_speed(speed);
    }

    /// Set the stroke length in steps.
    fn set_stroke(&mut self, stroke: i32) {
        self.core_mut().set_stroke(stroke);
    }

    /// Set the maximum insertion depth in steps.
    fn set_depth(&mut self, depth: i32) {
        self.core_mut().set_depth(depth);
    }

    /// Set the sensation, clamped into `[-100, 100]`.
    fn set_sensation(&mut self, sensation: f32) {
        self.core_mut().set_sensation(sensation);
    }

    /// Set the hardware limits for this session.
    fn set_speed_limit(&mut self, max_velocity: u32, max_acceleration: u32, steps_per_mm: u32) {
        self.core_mut()
            .set_limits(SpeedLimits::new(max_velocity, max_acceleration, steps_per_mm));
    }

    /// Compute the command for stroke `index`.
    ///
    /// The default records the index and repeats the last command.
    fn next_target(&mut self, index: u32) -> MotionCommand {
        let last = self.core().last_command();
        self.core_mut().finish(index, last)
    }

    /// Stroke time derived from the current tunables, in seconds.
    fn time_of_stroke(&self) -> f32 {
        self.core().time_of_stroke()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Hold {
        core: PatternCore,
    }

    impl StrokePattern for Hold {
        fn core(&self) -> &PatternCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut PatternCore {
            &mut self.core
        }
    }

    fn core_with(speed: i32, stroke: i32, depth: i32) -> PatternCore {
        let mut core = PatternCore::new("test");
        core.set_limits(SpeedLimits::new(1000, 10000, 50));
        core.set_speed(speed);
        core.set_stroke(stroke);
        core.set_depth(depth);
        core
    }

    #[test]
    fn test_default_next_target_repeats_last() {
        let mut hold = Hold {
            core: PatternCore::new("hold"),
        };
        assert_eq!(hold.core().index(), None);

        let first = hold.next_target(7);
        assert_eq!(first, MotionCommand::default());
        assert_eq!(hold.core().index(), Some(7));

        hold.core_mut().finish(8, MotionCommand::new(10, 20, 30));
        assert_eq!(hold.next_target(9), MotionCommand::new(10, 20, 30));
        assert_eq!(hold.core().index(), Some(9));
    }

    #[test]
    fn test_range_of_stroke() {
        assert_eq!(core_with(100, 400, 1000).range_of_stroke(), 400.0);
        assert_eq!(core_with(100, 1200, 1000).range_of_stroke(), 1000.0);
        assert_eq!(core_with(100, -300, 1000).range_of_stroke(), 300.0);
    }

    #[test]
    fn test_divisor_speed_guards_zero() {
        assert_eq!(core_with(0, 400, 1000).divisor_speed(), 1.0);
        assert_eq!(core_with(-50, 400, 1000).divisor_speed(), 1.0);
        assert_eq!(core_with(5000, 400, 1000).divisor_speed(), 1000.0);

        // Limits never set
        let mut core = PatternCore::new("unset");
        core.set_speed(100);
        assert_eq!(core.divisor_speed(), 1.0);
    }

    #[test]
    fn test_time_of_stroke() {
        let core = core_with(100, 1000, 1000);
        assert_eq!(core.time_of_stroke(), 10.0);
        assert_eq!(core.time_of_round_trip(), 20.0);
    }

    #[test]
    fn test_positions_are_clamped() {
        let core = core_with(100, 1200, 1000);
        assert_eq!(core.deep(), 1000);
        assert_eq!(core.shallow(), 0);
        assert_eq!(core.position(5000), 1000);
        assert_eq!(core.position(-1), 0);

        let inverted = core_with(100, 400, -1000);
        assert_eq!(inverted.deep(), 0);
        assert_eq!(inverted.shallow(), 0);
    }

    #[test]
    fn test_idle_command() {
        let core = core_with(0, 400, 1000);
        let idle = core.idle_command();
        assert_eq!(idle.target, 600);
        assert_eq!(idle.velocity, 50);
        assert_eq!(idle.acceleration, 5000);
        assert!(!idle.skip);
    }

    #[test]
    fn test_sensation_clamp() {
        assert_eq!(clamp_sensation(250.0), 100.0);
        assert_eq!(clamp_sensation(-250.0), -100.0);
        assert_eq!(clamp_sensation(f32::NAN), 0.0);
        assert_eq!(clamp_sensation(-12.5), -12.5);
    }

    #[test]
    fn test_thirds_command_clamps_before_acceleration() {
        let core = core_with(100, 1000, 1000);
        let cmd = core.thirds_command(1000, 1000.0, 10.0);
        assert_eq!(cmd.velocity, 150);
        assert_eq!(cmd.acceleration, 45);

        // Very short time: both saturate
        let cmd = core.thirds_command(1000, 1000.0, 0.001);
        assert_eq!(cmd.velocity, 1000);
        assert_eq!(cmd.acceleration, 10000);
    }
}
