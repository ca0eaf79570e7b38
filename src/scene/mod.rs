// scene/ - Sky and water composition on the lower surface
//
// Draw order is fixed every frame:
//   sky -> clouds -> sun glow -> water -> sparkles -> fish (light mode only)
// Clouds never cover the glow or the water; fish always sit on top.

mod sky;

pub use sky::{SUN_RADIUS, gradient as sky_gradient, glow as sun_glow, sun_center};

use std::f64::consts::PI;

use crate::rng::Dice;
use crate::sim::{CLOUDS, Clouds, FISH, School, water};
use crate::surface::{Rect, Size, Surface};
use crate::theme::ThemeMode;

pub const CLOCK_STEP: f64 = 0.015;

// The clock drives sin(t), sin(1.3 t) and sin(0.5 t); all three repeat
// every 40 pi, so the drawn phase is the clock reduced by that period.
const CLOCK_PERIOD: f64 = 40.0 * PI;

pub struct SkyScene {
    /// Scene clock, only ever grows
    pub t: f64,
    pub clouds: Clouds,
    pub fish: School,
}

impl SkyScene {
    pub fn new<D: Dice>(size: Size, dice: &mut D) -> Self {
        Self::with_counts(size, CLOUDS, FISH, dice)
    }

    pub fn with_counts<D: Dice>(size: Size, clouds: usize, fish: usize, dice: &mut D) -> Self {
        Self {
            t: 0.0,
            clouds: Clouds::new(clouds, size, dice),
            fish: School::new(fish, size, dice),
        }
    }

    /// Clock value handed to the wave and sun functions.
    #[inline]
    pub fn phase(&self) -> f32 {
        (self.t % CLOCK_PERIOD) as f32
    }

    pub fn frame<S, D>(&mut self, surface: &mut S, mode: ThemeMode, dice: &mut D)
    where
        S: Surface + ?Sized,
        D: Dice,
    {
        self.t += CLOCK_STEP;
        let phase = self.phase();
        let size = surface.size();
        let full = Rect::full(size);

        surface.clear();
        surface.fill_rect(full, &sky::gradient(size));
        self.clouds.draw(surface);
        surface.fill_rect(full, &sky::glow(size, phase));
        water::draw(surface, phase);
        water::sparkle(surface, phase, dice);

        if mode == ThemeMode::Light {
            self.fish.draw(surface, dice);
        }
    }
}
