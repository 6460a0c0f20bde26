//! Property tests for the invariants every stroke pattern upholds.

use proptest::prelude::*;

use stroke_engine::motion::ManualClock;
use stroke_engine::pattern::{
    delay_for, Deeper, Insist, Pattern, PatternKind, StopNGo, StrokePattern,
};

const MAX_VELOCITY: u32 = 20_000;
const MAX_ACCELERATION: u32 = 500_000;

fn kind() -> impl Strategy<Value = PatternKind> {
    (0..PatternKind::ALL.len()).prop_map(|i| PatternKind::ALL[i])
}

#[derive(Debug, Clone, Copy)]
struct Tunables {
    speed: i32,
    stroke: i32,
    depth: i32,
    sensation: f32,
}

fn tunables() -> impl Strategy<Value = Tunables> {
    (-1_000..40_000_i32, -2_000..12_000_i32, -2_000..12_000_i32, -150.0..150.0_f32).prop_map(
        |(speed, stroke, depth, sensation)| Tunables {
            speed,
            stroke,
            depth,
            sensation,
        },
    )
}

fn configure<P: StrokePattern>(pattern: &mut P, t: Tunables) {
    pattern.set_speed_limit(MAX_VELOCITY, MAX_ACCELERATION, 50);
    pattern.set_depth(t.depth);
    pattern.set_stroke(t.stroke);
    pattern.set_speed(t.speed);
    pattern.set_sensation(t.sensation);
}

proptest! {
    #[test]
    fn commands_stay_within_limits(kind in kind(), t in tunables(), start in 0..1_000_u32) {
        let clock = ManualClock::new();
        let mut pattern = Pattern::new(kind, &clock);
        configure(&mut pattern, t);

        let depth = t.depth.max(0);
        for index in start..start + 40 {
            let cmd = pattern.next_target(index);
            prop_assert!(cmd.target >= 0 && cmd.target <= depth, "target {} depth {}", cmd.target, depth);
            prop_assert!(cmd.velocity <= MAX_VELOCITY);
            prop_assert!(cmd.acceleration <= MAX_ACCELERATION);
            clock.advance(37);
        }
    }

    #[test]
    fn zero_speed_is_idle(kind in kind(), t in tunables(), index in any::<u32>()) {
        let clock = ManualClock::new();
        let mut pattern = Pattern::new(kind, &clock);
        configure(&mut pattern, Tunables { speed: 0, ..t });

        let cmd = pattern.next_target(index);
        prop_assert!(!cmd.skip);
        prop_assert_eq!(cmd.velocity, MAX_VELOCITY / 20);
        prop_assert_eq!(cmd.acceleration, MAX_ACCELERATION / 2);
        prop_assert!(cmd.target >= 0 && cmd.target <= t.depth.max(0));
    }

    #[test]
    fn repeated_setters_are_idempotent(kind in kind(), t in tunables(), index in 0..10_000_u32) {
        let clock = ManualClock::new();
        let mut once = Pattern::new(kind, &clock);
        let mut twice = Pattern::new(kind, &clock);
        configure(&mut once, t);
        configure(&mut twice, t);
        configure(&mut twice, t);

        for i in index..index + 8 {
            prop_assert_eq!(once.next_target(i), twice.next_target(i));
        }
    }

    #[test]
    fn deeper_ramp_is_monotonic(a in -100.0..100.0_f32, b in -100.0..100.0_f32) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let (ramp_low, ramp_high) = (Deeper::ramp_for(low), Deeper::ramp_for(high));
        prop_assert!(ramp_low <= ramp_high);
        prop_assert!((2..=32).contains(&ramp_low));
        prop_assert!((2..=32).contains(&ramp_high));
    }

    #[test]
    fn deeper_cycle_is_periodic(t in tunables(), index in 0..100_000_u32) {
        let mut deeper = Deeper::new();
        configure(&mut deeper, Tunables { speed: t.speed.max(1), ..t });

        deeper.next_target(index);
        let ramp = deeper.ramp_length();
        let cycle = deeper.cycle_index();
        prop_assert!(cycle >= 1 && cycle <= ramp);

        deeper.next_target(index + 2 * ramp);
        prop_assert_eq!(deeper.cycle_index(), cycle);
    }

    #[test]
    fn stop_n_go_delay_decreases(a in -100.0..100.0_f32, b in -100.0..100.0_f32) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(delay_for(low) >= delay_for(high));
        prop_assert!((100..=10_000).contains(&delay_for(low)));
    }

    #[test]
    fn stop_n_go_series_stays_in_range(
        t in tunables(),
        steps in prop::collection::vec(0..400_u64, 1..200),
    ) {
        let clock = ManualClock::new();
        let mut pattern = StopNGo::new(&clock);
        configure(&mut pattern, Tunables { speed: t.speed.max(1), ..t });

        let mut index = 0;
        for advance in steps {
            if !pattern.next_target(index).skip {
                index += 1;
            }
            prop_assert!((1..=5).contains(&pattern.series_index()));
            clock.advance(advance);
        }
    }

    #[test]
    fn insist_stroke_follows_sensation(t in tunables(), index in 0..1_000_u32) {
        let mut insist = Insist::new();
        configure(&mut insist, t);
        insist.next_target(index);

        let sensation = t.sensation.clamp(-100.0, 100.0);
        prop_assert_eq!(insist.is_in_front(), sensation > 0.0);
        prop_assert!(insist.real_stroke().unsigned_abs() <= t.stroke.unsigned_abs());

        insist.set_sensation(0.0);
        insist.next_target(index);
        prop_assert_eq!(insist.real_stroke(), t.stroke);
    }
}
