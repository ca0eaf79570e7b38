// cloud.rs - Soft clouds drifting right across the sky

use crate::rng::Dice;
use crate::surface::{Paint, Rgba, Size, Stops, Surface, pt};

const Y_MIN: f32 = 50.0;
const Y_MAX: f32 = 170.0;
const SPEED_MIN: f32 = 0.2;
const SPEED_MAX: f32 = 0.5;
const SIZE_MIN: f32 = 60.0;
const SIZE_MAX: f32 = 140.0;

const PUFF: Rgba = Rgba::new(255, 255, 255, 0.8);

pub struct Clouds {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub speed: Vec<f32>,
    pub size: Vec<f32>,
}

impl Clouds {
    pub fn new<D: Dice>(count: usize, size: Size, dice: &mut D) -> Self {
        let mut clouds = Self {
            x: Vec::with_capacity(count),
            y: Vec::with_capacity(count),
            speed: Vec::with_capacity(count),
            size: Vec::with_capacity(count),
        };
        for _ in 0..count {
            clouds.x.push(dice.range(0.0, size.wf()));
            clouds.y.push(dice.range(Y_MIN, Y_MAX));
            clouds.speed.push(dice.range(SPEED_MIN, SPEED_MAX));
            clouds.size.push(dice.range(SIZE_MIN, SIZE_MAX));
        }
        clouds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Paint each cloud, then drift; wrap once fully past the right edge.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let w = surface.size().wf();

        for i in 0..self.len() {
            let center = pt(self.x[i], self.y[i]);
            let r = self.size[i];
            let paint = Paint::Radial {
                center,
                radius: r,
                stops: Stops { start: PUFF, end: PUFF.with_alpha(0.0) },
            };
            surface.fill_disc(center, r, &paint);

            self.x[i] += self.speed[i];
            if self.x[i] - r > w {
                self.x[i] = -r;
            }
        }
    }
}
