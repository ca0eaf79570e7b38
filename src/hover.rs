// hover.rs - Icon hover bursts
//
// Each pointer-enter may spawn a short-lived burst: rain droplets in dark
// mode, expanding ripples in light mode. Particles are plain values with a
// birth time and a TTL; the binding turns them into DOM nodes and drops them
// when `sweep` reports them expired.

use crate::rng::Dice;
use crate::theme::ThemeMode;

pub const DROPLETS: usize = 12;
pub const DROPLET_TTL_MS: f64 = 800.0;
const DROPLET_LEFT_MIN: f32 = 10.0;
const DROPLET_LEFT_SPREAD: f32 = 60.0;
const DROPLET_TOP_SPREAD: f32 = 10.0;
const DROPLET_DELAY_MAX: f32 = 0.3;

pub const RIPPLES: usize = 3;
pub const RIPPLE_TTL_MS: f64 = 1500.0;
const RIPPLE_STAGGER_S: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverKind {
    Droplet,
    Ripple,
}

impl HoverKind {
    /// The only mode in which this branch does anything.
    pub fn mode(self) -> ThemeMode {
        match self {
            HoverKind::Droplet => ThemeMode::Dark,
            HoverKind::Ripple => ThemeMode::Light,
        }
    }

    /// CSS class of the spawned element.
    pub fn class(self) -> &'static str {
        match self {
            HoverKind::Droplet => "rain-drop",
            HoverKind::Ripple => "ripple",
        }
    }

    pub fn ttl_ms(self) -> f64 {
        match self {
            HoverKind::Droplet => DROPLET_TTL_MS,
            HoverKind::Ripple => RIPPLE_TTL_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverParticle {
    pub id: u64,
    pub kind: HoverKind,
    /// Horizontal offset inside the container; ripples are centered by CSS
    pub left_px: Option<f32>,
    pub top_px: Option<f32>,
    pub delay_s: f32,
    pub born_ms: f64,
}

impl HoverParticle {
    #[inline]
    pub fn expired(&self, now_ms: f64) -> bool {
        now_ms - self.born_ms >= self.kind.ttl_ms()
    }
}

#[derive(Debug, Default)]
pub struct HoverEffects {
    live: Vec<HoverParticle>,
    next_id: u64,
}

impl HoverEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one listener branch. A branch whose mode is not current spawns
    /// nothing; the returned slice is just the new burst.
    pub fn burst<D: Dice>(
        &mut self,
        branch: HoverKind,
        mode: ThemeMode,
        now_ms: f64,
        dice: &mut D,
    ) -> &[HoverParticle] {
        let start = self.live.len();
        if branch.mode() != mode {
            return &self.live[start..];
        }

        match branch {
            HoverKind::Droplet => {
                for _ in 0..DROPLETS {
                    let left = DROPLET_LEFT_MIN + dice.range(0.0, DROPLET_LEFT_SPREAD);
                    let top = dice.range(0.0, DROPLET_TOP_SPREAD);
                    let delay = dice.range(0.0, DROPLET_DELAY_MAX);
                    self.push(branch, Some(left), Some(top), delay, now_ms);
                }
            }
            HoverKind::Ripple => {
                for i in 0..RIPPLES {
                    self.push(branch, None, None, i as f32 * RIPPLE_STAGGER_S, now_ms);
                }
            }
        }
        &self.live[start..]
    }

    fn push(
        &mut self,
        kind: HoverKind,
        left: Option<f32>,
        top: Option<f32>,
        delay_s: f32,
        now_ms: f64,
    ) {
        let id = self.next_id;
        self.next_id += 1;
        self.live.push(HoverParticle {
            id,
            kind,
            left_px: left,
            top_px: top,
            delay_s,
            born_ms: now_ms,
        });
    }

    /// Drop expired particles and return their ids.
    pub fn sweep(&mut self, now_ms: f64) -> Vec<u64> {
        let mut gone = Vec::new();
        self.live.retain(|p| {
            if p.expired(now_ms) {
                gone.push(p.id);
                false
            } else {
                true
            }
        });
        gone
    }

    pub fn live(&self) -> &[HoverParticle] {
        &self.live
    }

    pub fn count(&self, kind: HoverKind) -> usize {
        self.live.iter().filter(|p| p.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    /// Both listeners fire for one pointer-enter.
    fn enter(fx: &mut HoverEffects, mode: ThemeMode, now: f64) {
        let mut dice = seeded(now as u64);
        fx.burst(HoverKind::Droplet, mode, now, &mut dice);
        fx.burst(HoverKind::Ripple, mode, now, &mut dice);
    }

    #[test]
    fn dark_enter_spawns_only_droplets() {
        let mut fx = HoverEffects::new();
        enter(&mut fx, ThemeMode::Dark, 0.0);
        assert_eq!(fx.count(HoverKind::Droplet), 12);
        assert_eq!(fx.count(HoverKind::Ripple), 0);
    }

    #[test]
    fn light_enter_spawns_only_ripples() {
        let mut fx = HoverEffects::new();
        enter(&mut fx, ThemeMode::Light, 0.0);
        assert_eq!(fx.count(HoverKind::Ripple), 3);
        assert_eq!(fx.count(HoverKind::Droplet), 0);
    }

    #[test]
    fn droplet_layout_ranges() {
        let mut fx = HoverEffects::new();
        let mut dice = seeded(9);
        let burst = fx.burst(HoverKind::Droplet, ThemeMode::Dark, 5.0, &mut dice);
        assert_eq!(burst.len(), DROPLETS);
        for p in burst {
            let left = p.left_px.unwrap();
            let top = p.top_px.unwrap();
            assert!((10.0..70.0).contains(&left));
            assert!((0.0..10.0).contains(&top));
            assert!((0.0..0.3).contains(&p.delay_s));
            assert_eq!(p.born_ms, 5.0);
        }
    }

    #[test]
    fn ripples_are_staggered() {
        let mut fx = HoverEffects::new();
        let mut dice = seeded(9);
        let delays: Vec<f32> = fx
            .burst(HoverKind::Ripple, ThemeMode::Light, 0.0, &mut dice)
            .iter()
            .map(|p| p.delay_s)
            .collect();
        assert_eq!(delays, vec![0.0, 0.3, 0.6]);
    }

    #[test]
    fn mismatched_branch_returns_empty_burst() {
        let mut fx = HoverEffects::new();
        let mut dice = seeded(9);
        assert!(fx.burst(HoverKind::Ripple, ThemeMode::Dark, 0.0, &mut dice).is_empty());
        assert!(fx.live().is_empty());
    }

    #[test]
    fn sweep_honors_each_ttl() {
        let mut fx = HoverEffects::new();
        enter(&mut fx, ThemeMode::Dark, 0.0);
        enter(&mut fx, ThemeMode::Light, 100.0);

        assert!(fx.sweep(799.0).is_empty());
        assert_eq!(fx.sweep(800.0).len(), 12);
        assert_eq!(fx.count(HoverKind::Ripple), 3);
        assert!(fx.sweep(1599.0).is_empty());
        assert_eq!(fx.sweep(1600.0).len(), 3);
        assert!(fx.live().is_empty());
    }

    #[test]
    fn overlapping_bursts_are_independent() {
        let mut fx = HoverEffects::new();
        enter(&mut fx, ThemeMode::Dark, 0.0);
        enter(&mut fx, ThemeMode::Dark, 500.0);
        assert_eq!(fx.count(HoverKind::Droplet), 24);

        let first = fx.sweep(800.0);
        assert_eq!(first.len(), 12);
        assert_eq!(fx.count(HoverKind::Droplet), 12);
        assert_eq!(fx.sweep(1300.0).len(), 12);
    }

    #[test]
    fn ids_are_unique() {
        let mut fx = HoverEffects::new();
        for i in 0..5 {
            enter(&mut fx, ThemeMode::Dark, i as f64);
        }
        let mut ids: Vec<u64> = fx.live().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 60);
    }

    #[test]
    fn sweep_at_infinity_empties_everything() {
        let mut fx = HoverEffects::new();
        enter(&mut fx, ThemeMode::Dark, 0.0);
        enter(&mut fx, ThemeMode::Light, 10.0);
        assert_eq!(fx.sweep(f64::INFINITY).len(), 15);
        assert!(fx.live().is_empty());
    }

    #[test]
    fn repeated_entries_stay_bounded_when_swept_first() {
        let mut fx = HoverEffects::new();
        let mut dice = seeded(4);
        // One pointer-enter every 100ms for ten seconds, sweeping before each burst
        for i in 0..100 {
            let now = i as f64 * 100.0;
            fx.sweep(now);
            fx.burst(HoverKind::Droplet, ThemeMode::Dark, now, &mut dice);
            assert!(fx.live().len() <= DROPLETS * 8, "{} live at {now}", fx.live().len());
        }
    }
}
