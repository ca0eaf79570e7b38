// tween.rs - Time-sampled easing for DOM decorations
//
// The toggle pulse and the idle bob of the social icons. Both are pure
// functions of a millisecond clock; the binding samples them once per tick.

use std::f32::consts::PI;

use crate::rng::{self, Dice};

pub const PULSE_MS: f64 = 600.0;
const PULSE_OPACITY: f32 = 0.5;
const PULSE_BLUR_PX: f32 = 4.0;

const BOB_AMPLITUDE_PX: f32 = -10.0;
const BOB_MIN_MS: f32 = 2000.0;
const BOB_MAX_MS: f32 = 4000.0;
const BOB_STAGGER_MS: f64 = 200.0;
// Bob timing has its own random stream; the scene sequence is untouched
const BOB_STREAM: u64 = 0xB0B;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    SineInOut,
    Power2Out,
}

impl Ease {
    pub fn apply(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Ease::SineInOut => -((PI * p).cos() - 1.0) / 2.0,
            Ease::Power2Out => 1.0 - (1.0 - p) * (1.0 - p),
        }
    }
}

/// Style values for one pulse sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseFrame {
    pub opacity: f32,
    pub blur_px: f32,
}

/// Brief fade/blur back to normal after a theme switch.
#[derive(Clone, Copy, Debug)]
pub struct Pulse {
    start_ms: f64,
}

impl Pulse {
    pub fn start(now_ms: f64) -> Self {
        Self { start_ms: now_ms }
    }

    /// None once the pulse has run its course.
    pub fn sample(&self, now_ms: f64) -> Option<PulseFrame> {
        let elapsed = (now_ms - self.start_ms).max(0.0);
        if elapsed >= PULSE_MS {
            return None;
        }
        let e = Ease::Power2Out.apply((elapsed / PULSE_MS) as f32);
        Some(PulseFrame {
            opacity: PULSE_OPACITY + (1.0 - PULSE_OPACITY) * e,
            blur_px: PULSE_BLUR_PX * (1.0 - e),
        })
    }
}

/// Endless up/down float of one icon.
#[derive(Clone, Copy, Debug)]
pub struct Bob {
    pub duration_ms: f32,
    pub delay_ms: f64,
}

impl Bob {
    /// Icons further down the list start later.
    pub fn new<D: Dice>(index: usize, dice: &mut D) -> Self {
        Self {
            duration_ms: dice.range(BOB_MIN_MS, BOB_MAX_MS),
            delay_ms: index as f64 * BOB_STAGGER_MS,
        }
    }

    /// Timings for a row of `count` icons, drawn from `seed`.
    pub fn row(count: usize, seed: u64) -> Vec<Bob> {
        let mut dice = rng::seeded(seed ^ BOB_STREAM);
        (0..count).map(|i| Bob::new(i, &mut dice)).collect()
    }

    /// Vertical offset in px, `elapsed_ms` counted from mount.
    pub fn offset(&self, elapsed_ms: f64) -> f32 {
        let running = elapsed_ms - self.delay_ms;
        if running <= 0.0 || self.duration_ms <= 0.0 {
            return 0.0;
        }
        let legs = running / self.duration_ms as f64;
        let leg = legs.floor();
        let frac = (legs - leg) as f32;
        // Odd legs run backwards (yoyo)
        let phase = if leg as u64 % 2 == 0 { frac } else { 1.0 - frac };
        BOB_AMPLITUDE_PX * Ease::SineInOut.apply(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn easing_endpoints() {
        for ease in [Ease::SineInOut, Ease::Power2Out] {
            assert!(close(ease.apply(0.0), 0.0));
            assert!(close(ease.apply(1.0), 1.0));
        }
        assert!(close(Ease::SineInOut.apply(0.5), 0.5));
        assert!(close(Ease::Power2Out.apply(0.5), 0.75));
    }

    #[test]
    fn pulse_starts_dim_and_blurred_then_ends() {
        let pulse = Pulse::start(1000.0);
        let first = pulse.sample(1000.0).unwrap();
        assert!(close(first.opacity, 0.5));
        assert!(close(first.blur_px, 4.0));

        let mid = pulse.sample(1300.0).unwrap();
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
        assert!(mid.blur_px > 0.0 && mid.blur_px < 4.0);

        assert!(pulse.sample(1600.0).is_none());
    }

    #[test]
    fn bob_waits_for_its_delay() {
        let bob = Bob { duration_ms: 2000.0, delay_ms: 400.0 };
        assert_eq!(bob.offset(0.0), 0.0);
        assert_eq!(bob.offset(400.0), 0.0);
        assert!(bob.offset(900.0) < 0.0);
    }

    #[test]
    fn bob_yoyos_between_rest_and_peak() {
        let bob = Bob { duration_ms: 2000.0, delay_ms: 0.0 };
        assert!(close(bob.offset(2000.0 - 1e-3), -10.0));
        assert!(close(bob.offset(1000.0), -5.0));
        assert!(close(bob.offset(3000.0), -5.0));
        assert!(bob.offset(4000.0 - 1e-3).abs() < 1e-3);
    }

    #[test]
    fn bob_parameters_follow_index() {
        let mut dice = seeded(5);
        for i in 0..8 {
            let bob = Bob::new(i, &mut dice);
            assert!((2000.0..4000.0).contains(&bob.duration_ms));
            assert_eq!(bob.delay_ms, i as f64 * 200.0);
        }
    }

    #[test]
    fn bob_row_follows_the_seed() {
        let a = Bob::row(5, 1);
        let b = Bob::row(5, 2);
        assert_eq!(a.len(), 5);
        let durations = |row: &[Bob]| row.iter().map(|b| b.duration_ms).collect::<Vec<_>>();
        assert_eq!(durations(&a), durations(&Bob::row(5, 1)));
        assert_ne!(durations(&a), durations(&b));
        for (i, bob) in a.iter().enumerate() {
            assert_eq!(bob.delay_ms, i as f64 * 200.0);
        }
    }
}
