//! Stroke patterns.
//!
//! Every pattern turns the same tunables (speed, stroke, depth, sensation)
//! into one [`MotionCommand`](crate::motion::MotionCommand) per half-stroke.
//! [`Pattern`] wraps the seven variants so the executor can switch between
//! them at runtime without allocating.

mod base;
mod deeper;
mod half;
mod insist;
mod kind;
mod robo;
mod simple;
mod stop_n_go;
mod teasing;

pub use base::{clamp_sensation, PatternCore, StrokePattern, Tunables, SENSATION_MAX};
pub use deeper::Deeper;
pub use half::HalfnHalf;
pub use insist::Insist;
pub use kind::PatternKind;
pub use robo::RoboStroke;
pub use simple::SimplePenetration;
pub use stop_n_go::{delay_for, StopNGo};
pub use teasing::TeasingPounding;

use crate::motion::{Clock, MotionCommand};

/// One of the seven stroke patterns.
///
/// `C` is the clock read by [`StopNGo`]; every other variant ignores it.
#[derive(Debug, Clone)]
pub enum Pattern<C> {
    /// See [`SimplePenetration`].
    SimplePenetration(SimplePenetration),
    /// See [`TeasingPounding`].
    TeasingPounding(TeasingPounding),
    /// See [`RoboStroke`].
    RoboStroke(RoboStroke),
    /// See [`HalfnHalf`].
    HalfnHalf(HalfnHalf),
    /// See [`Deeper`].
    Deeper(Deeper),
    /// See [`StopNGo`].
    StopNGo(StopNGo<C>),
    /// See [`Insist`].
    Insist(Insist),
}

macro_rules! dispatch {
    ($self:expr, $p:ident => $body:expr) => {
        match $self {
            Pattern::SimplePenetration($p) => $body,
            Pattern::TeasingPounding($p) => $body,
            Pattern::RoboStroke($p) => $body,
            Pattern::HalfnHalf($p) => $body,
            Pattern::Deeper($p) => $body,
            Pattern::StopNGo($p) => $body,
            Pattern::Insist($p) => $body,
        }
    };
}

impl<C: Clock> Pattern<C> {
    /// Build a fresh pattern of the given kind with zeroed tunables.
    pub fn new(kind: PatternKind, clock: C) -> Self {
        match kind {
            PatternKind::SimplePenetration => Pattern::SimplePenetration(SimplePenetration::new()),
            PatternKind::TeasingPounding => Pattern::TeasingPounding(TeasingPounding::new()),
            PatternKind::RoboStroke => Pattern::RoboStroke(RoboStroke::new()),
            PatternKind::HalfnHalf => Pattern::HalfnHalf(HalfnHalf::new()),
            PatternKind::Deeper => Pattern::Deeper(Deeper::new()),
            PatternKind::StopNGo => Pattern::StopNGo(StopNGo::new(clock)),
            PatternKind::Insist => Pattern::Insist(Insist::new()),
        }
    }

    /// Which variant this is.
    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::SimplePenetration(_) => PatternKind::SimplePenetration,
            Pattern::TeasingPounding(_) => PatternKind::TeasingPounding,
            Pattern::RoboStroke(_) => PatternKind::RoboStroke,
            Pattern::HalfnHalf(_) => PatternKind::HalfnHalf,
            Pattern::Deeper(_) => PatternKind::Deeper,
            Pattern::StopNGo(_) => PatternKind::StopNGo,
            Pattern::Insist(_) => PatternKind::Insist,
        }
    }
}

impl<C: Clock> StrokePattern for Pattern<C> {
    fn core(&self) -> &PatternCore {
        dispatch!(self, p => p.core())
    }

    fn core_mut(&mut self) -> &mut PatternCore {
        dispatch!(self, p => p.core_mut())
    }

    fn set_speed(&mut self, speed: i32) {
        dispatch!(self, p => p.set_speed(speed))
    }

    fn set_stroke(&mut self, stroke: i32) {
        dispatch!(self, p => p.set_stroke(stroke))
    }

    fn set_depth(&mut self, depth: i32) {
        dispatch!(self, p => p.set_depth(depth))
    }

    fn set_sensation(&mut self, sensation: f32) {
        dispatch!(self, p => p.set_sensation(sensation))
    }

    fn set_speed_limit(&mut self, max_velocity: u32, max_acceleration: u32, steps_per_mm: u32) {
        dispatch!(self, p => p.set_speed_limit(max_velocity, max_acceleration, steps_per_mm))
    }

    fn next_target(&mut self, index: u32) -> MotionCommand {
        dispatch!(self, p => p.next_target(index))
    }

    fn time_of_stroke(&self) -> f32 {
        dispatch!(self, p => p.time_of_stroke())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ManualClock;

    #[test]
    fn test_new_matches_kind() {
        let clock = ManualClock::new();
        for kind in PatternKind::ALL {
            let pattern = Pattern::new(kind, &clock);
            assert_eq!(pattern.kind(), kind);
            assert_eq!(pattern.name(), kind.name());
        }
    }

    #[test]
    fn test_sensation_reaches_stop_n_go() {
        let clock = ManualClock::new();
        let mut pattern = Pattern::new(PatternKind::StopNGo, &clock);
        pattern.set_sensation(100.0);
        match &pattern {
            Pattern::StopNGo(p) => assert_eq!(p.delay_ms(), 100),
            other => panic!("wrong variant: {:?}", other.kind()),
        }
    }

    #[test]
    fn test_round_trip_time_is_dispatched() {
        let clock = ManualClock::new();
        let mut simple = Pattern::new(PatternKind::SimplePenetration, &clock);
        let mut teasing = Pattern::new(PatternKind::TeasingPounding, &clock);
        for p in [&mut simple, &mut teasing] {
            p.set_speed_limit(1000, 10000, 50);
            p.set_depth(1000);
            p.set_stroke(500);
            p.set_speed(100);
        }
        assert_eq!(simple.time_of_stroke(), 5.0);
        assert_eq!(teasing.time_of_stroke(), 10.0);
    }
}
