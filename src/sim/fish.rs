// fish.rs - Fish swimming just under the water line
//
// Only drawn in light mode, but state is kept while hidden so they resume
// mid-swim after a theme switch.

use crate::rng::Dice;
use crate::surface::{Rect, Size, Sprite, Surface, pt};

const DEPTH: f32 = 0.65;
const DEPTH_SPREAD: f32 = 80.0;
const SPEED_MIN: f32 = 0.4;
const SPEED_MAX: f32 = 1.0;
const SIZE_MIN: f32 = 40.0;
const SIZE_MAX: f32 = 100.0;
pub const FLIP_MIN: f32 = 200.0;
pub const FLIP_MAX: f32 = 400.0;

pub struct School {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub speed: Vec<f32>,
    pub dir: Vec<f32>, // +1 right, -1 left
    pub size: Vec<f32>,
    pub flip_timer: Vec<f32>, // frames until the next turn
}

impl School {
    pub fn new<D: Dice>(count: usize, size: Size, dice: &mut D) -> Self {
        let mut school = Self {
            x: Vec::with_capacity(count),
            y: Vec::with_capacity(count),
            speed: Vec::with_capacity(count),
            dir: Vec::with_capacity(count),
            size: Vec::with_capacity(count),
            flip_timer: Vec::with_capacity(count),
        };
        let top = size.hf() * DEPTH;
        for _ in 0..count {
            school.x.push(dice.range(0.0, size.wf()));
            school.y.push(dice.range(top, top + DEPTH_SPREAD));
            school.speed.push(dice.range(SPEED_MIN, SPEED_MAX));
            school.dir.push(if dice.coin() { 1.0 } else { -1.0 });
            school.size.push(dice.range(SIZE_MIN, SIZE_MAX));
            school.flip_timer.push(dice.range(FLIP_MIN, FLIP_MAX));
        }
        school
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[inline]
    pub fn sprite(&self, i: usize) -> Sprite {
        if self.dir[i] > 0.0 { Sprite::FishRight } else { Sprite::FishLeft }
    }

    /// Draw each fish, then swim, maybe turn around, and wrap at the edges.
    pub fn draw<S: Surface + ?Sized, D: Dice>(&mut self, surface: &mut S, dice: &mut D) {
        let w = surface.size().wf();

        for i in 0..self.len() {
            let s = self.size[i];
            surface.draw_sprite(self.sprite(i), Rect::centered(pt(self.x[i], self.y[i]), s));

            self.x[i] += self.speed[i] * self.dir[i];

            self.flip_timer[i] -= 1.0;
            if self.flip_timer[i] <= 0.0 {
                self.dir[i] = -self.dir[i];
                self.flip_timer[i] = dice.range(FLIP_MIN, FLIP_MAX);
            }

            if self.x[i] < -s {
                self.x[i] = w + s;
            }
            if self.x[i] > w + s {
                self.x[i] = -s;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use crate::surface::testing::{Op, Recorder};

    fn one_fish(dice: &mut impl Dice, surface: &Recorder) -> School {
        School::new(1, surface.size, dice)
    }

    #[test]
    fn init_ranges() {
        let mut dice = seeded(31);
        let school = School::new(6, Size::new(1000, 800), &mut dice);
        assert_eq!(school.len(), 6);
        for i in 0..school.len() {
            assert!((0.0..1000.0).contains(&school.x[i]));
            assert!((520.0..600.0).contains(&school.y[i]));
            assert!((0.4..1.0).contains(&school.speed[i]));
            assert!(school.dir[i] == 1.0 || school.dir[i] == -1.0);
            assert!((40.0..100.0).contains(&school.size[i]));
            assert!((200.0..400.0).contains(&school.flip_timer[i]));
        }
    }

    #[test]
    fn turns_when_timer_runs_out() {
        let mut dice = seeded(5);
        let mut surface = Recorder::new(800, 600);
        let mut school = one_fish(&mut dice, &surface);
        school.x[0] = 400.0;
        school.dir[0] = 1.0;
        school.flip_timer[0] = 1.0;

        school.draw(&mut surface, &mut dice);

        assert_eq!(school.dir[0], -1.0);
        assert!((200.0..400.0).contains(&school.flip_timer[0]));
    }

    #[test]
    fn timer_counts_down_by_one() {
        let mut dice = seeded(5);
        let mut surface = Recorder::new(800, 600);
        let mut school = one_fish(&mut dice, &surface);
        school.flip_timer[0] = 250.0;
        let dir = school.dir[0];

        for n in 1..=10 {
            school.draw(&mut surface, &mut dice);
            assert_eq!(school.flip_timer[0], 250.0 - n as f32);
            assert_eq!(school.dir[0], dir);
        }
    }

    #[test]
    fn direction_stays_unit() {
        let mut dice = seeded(12);
        let mut surface = Recorder::new(640, 480);
        let mut school = School::new(6, surface.size, &mut dice);
        for _ in 0..3000 {
            school.draw(&mut surface, &mut dice);
            surface.ops.clear();
            assert!(school.dir.iter().all(|&d| d == 1.0 || d == -1.0));
        }
    }

    #[test]
    fn wraps_at_both_edges() {
        let mut dice = seeded(5);
        let mut surface = Recorder::new(800, 600);
        let mut school = one_fish(&mut dice, &surface);
        school.size[0] = 50.0;
        school.speed[0] = 1.0;
        school.flip_timer[0] = 300.0;

        school.dir[0] = -1.0;
        school.x[0] = -50.5;
        school.draw(&mut surface, &mut dice);
        assert_eq!(school.x[0], 850.0);

        school.dir[0] = 1.0;
        school.x[0] = 850.5;
        school.draw(&mut surface, &mut dice);
        assert_eq!(school.x[0], -50.0);
    }

    #[test]
    fn sprite_matches_heading_and_is_centered() {
        let mut dice = seeded(5);
        let mut surface = Recorder::new(800, 600);
        let mut school = one_fish(&mut dice, &surface);
        school.x[0] = 100.0;
        school.y[0] = 420.0;
        school.size[0] = 60.0;
        school.flip_timer[0] = 300.0;

        school.dir[0] = 1.0;
        school.draw(&mut surface, &mut dice);
        school.x[0] = 100.0;
        school.dir[0] = -1.0;
        school.draw(&mut surface, &mut dice);

        let rect = Rect::new(70.0, 390.0, 60.0, 60.0);
        assert_eq!(
            surface.ops,
            vec![
                Op::Sprite(Sprite::FishRight, rect),
                Op::Sprite(Sprite::FishLeft, rect),
            ]
        );
    }
}
