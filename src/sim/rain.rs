// rain.rs - Falling rain streaks on the upper surface
//
// Theme-independent. Drops fall straight down and are recycled above the
// top edge once they leave the bottom.

use crate::rng::Dice;
use crate::surface::{LineCap, Rgba, Size, Stroke, Surface, pt};

const LEN_MIN: f32 = 10.0;
const LEN_MAX: f32 = 30.0;
const SPEED_MIN: f32 = 4.0;
const SPEED_MAX: f32 = 8.0;
pub const RESPAWN_Y: f32 = -20.0;

const STREAK: Stroke = Stroke {
    color: Rgba::new(0, 255, 255, 0.3),
    width: 1.0,
    cap: LineCap::Round,
};

pub struct RainField {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub len: Vec<f32>,
    pub speed: Vec<f32>,
}

impl RainField {
    /// Scatter `count` drops over the whole surface.
    pub fn new<D: Dice>(count: usize, size: Size, dice: &mut D) -> Self {
        let mut field = Self {
            x: Vec::with_capacity(count),
            y: Vec::with_capacity(count),
            len: Vec::with_capacity(count),
            speed: Vec::with_capacity(count),
        };
        for _ in 0..count {
            field.x.push(dice.range(0.0, size.wf()));
            field.y.push(dice.range(0.0, size.hf()));
            field.len.push(dice.range(LEN_MIN, LEN_MAX));
            field.speed.push(dice.range(SPEED_MIN, SPEED_MAX));
        }
        field
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Draw every streak, then fall; recycle what left the bottom.
    pub fn step<S: Surface + ?Sized, D: Dice>(&mut self, surface: &mut S, dice: &mut D) {
        let size = surface.size();
        surface.clear();

        for i in 0..self.len() {
            let (x, y) = (self.x[i], self.y[i]);
            surface.stroke_line(pt(x, y), pt(x, y + self.len[i]), &STREAK);

            self.y[i] = y + self.speed[i];
            if self.y[i] > size.hf() {
                self.y[i] = RESPAWN_Y;
                self.x[i] = dice.range(0.0, size.wf());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use crate::surface::testing::{Op, Recorder};

    #[test]
    fn init_ranges() {
        let mut dice = seeded(11);
        let rain = RainField::new(200, Size::new(800, 600), &mut dice);
        assert_eq!(rain.len(), 200);
        for i in 0..rain.len() {
            assert!((0.0..800.0).contains(&rain.x[i]));
            assert!((0.0..600.0).contains(&rain.y[i]));
            assert!((10.0..30.0).contains(&rain.len[i]));
            assert!((4.0..8.0).contains(&rain.speed[i]));
        }
    }

    #[test]
    fn drop_past_bottom_respawns_above() {
        let mut dice = seeded(2);
        let mut surface = Recorder::new(400, 300);
        let mut rain = RainField::new(1, surface.size, &mut dice);
        rain.y[0] = 298.0;
        rain.speed[0] = 5.0;

        rain.step(&mut surface, &mut dice);

        assert_eq!(rain.y[0], RESPAWN_Y);
        assert!((0.0..400.0).contains(&rain.x[0]));
    }

    #[test]
    fn drop_at_exact_height_keeps_falling() {
        let mut dice = seeded(2);
        let mut surface = Recorder::new(400, 300);
        let mut rain = RainField::new(1, surface.size, &mut dice);
        rain.x[0] = 17.0;
        rain.y[0] = 296.0;
        rain.speed[0] = 4.0;

        rain.step(&mut surface, &mut dice);

        assert_eq!(rain.y[0], 300.0);
        assert_eq!(rain.x[0], 17.0);
    }

    #[test]
    fn drops_stay_in_band_over_many_frames() {
        let mut dice = seeded(9);
        let mut surface = Recorder::new(320, 240);
        let mut rain = RainField::new(200, surface.size, &mut dice);
        for _ in 0..500 {
            rain.step(&mut surface, &mut dice);
            surface.ops.clear();
            for &y in &rain.y {
                assert!(y == RESPAWN_Y || (RESPAWN_Y..=240.0).contains(&y), "{y}");
            }
        }
    }

    #[test]
    fn frame_clears_then_draws_each_streak_before_moving() {
        let mut dice = seeded(4);
        let mut surface = Recorder::new(100, 100);
        let mut rain = RainField::new(3, surface.size, &mut dice);
        let before: Vec<(f32, f32, f32)> =
            (0..3).map(|i| (rain.x[i], rain.y[i], rain.len[i])).collect();

        rain.step(&mut surface, &mut dice);

        assert_eq!(surface.ops[0], Op::Clear);
        assert_eq!(surface.ops.len(), 4);
        for (op, (x, y, len)) in surface.ops[1..].iter().zip(before) {
            assert_eq!(*op, Op::Line(pt(x, y), pt(x, y + len), STREAK));
        }
    }

    #[test]
    fn recycled_x_uses_current_width() {
        let mut dice = seeded(6);
        let mut surface = Recorder::new(1000, 100);
        let mut rain = RainField::new(50, surface.size, &mut dice);
        surface.size = Size::new(50, 100);
        for _ in 0..100 {
            rain.step(&mut surface, &mut dice);
        }
        for i in 0..rain.len() {
            if rain.y[i] == RESPAWN_Y {
                assert!(rain.x[i] < 50.0);
            }
        }
    }
}
