// water.rs - Water surface waveform and sparkle highlights
//
// `wave_y` is the single source of truth for the water line: the fill path
// and the sparkles both sample it, so highlights ride the waves.

use crate::rng::Dice;
use crate::surface::{Paint, Point, Rect, Rgba, Size, Stops, Surface, pt};

pub const WATER_LINE: f32 = 0.55;
pub const SAMPLE_STEP: usize = 20;

const PRIMARY_AMP: f32 = 10.0;
const PRIMARY_FREQ: f32 = 0.015;
const SECONDARY_AMP: f32 = 5.0;
const SECONDARY_FREQ: f32 = 0.03;
const SECONDARY_RATE: f32 = 1.3;

pub const SPARKLES: usize = 40;
pub const SPARKLE_JITTER: f32 = 4.0;
const SPARKLE_PX: f32 = 2.0;
const SPARKLE_ALPHA_MAX: f32 = 0.7;

const SHALLOW: Rgba = Rgba::hex(0x4facfe);
const DEEP: Rgba = Rgba::hex(0x00f2fe);
const GLINT: Rgba = Rgba::new(255, 255, 255, 0.0);

/// Height of the water line at `x` for surface height `h` and clock `t`.
#[inline]
pub fn wave_y(x: f32, h: f32, t: f32) -> f32 {
    h * WATER_LINE
        + (x * PRIMARY_FREQ + t).sin() * PRIMARY_AMP
        + (x * SECONDARY_FREQ + t * SECONDARY_RATE).sin() * SECONDARY_AMP
}

/// Closed outline of the water body, left baseline, wave crest, bottom corners.
pub fn outline(size: Size, t: f32) -> Vec<Point> {
    let (w, h) = (size.wf(), size.hf());
    let mut points = Vec::with_capacity(size.w as usize / SAMPLE_STEP + 4);
    points.push(pt(0.0, h * WATER_LINE));
    for x in (0..=size.w as usize).step_by(SAMPLE_STEP) {
        let x = x as f32;
        points.push(pt(x, wave_y(x, h, t)));
    }
    points.push(pt(w, h));
    points.push(pt(0.0, h));
    points
}

pub fn paint(size: Size) -> Paint {
    let h = size.hf();
    Paint::Linear {
        from: pt(0.0, h * WATER_LINE),
        to: pt(0.0, h),
        stops: Stops { start: SHALLOW, end: DEEP },
    }
}

pub fn draw<S: Surface + ?Sized>(surface: &mut S, t: f32) {
    let size = surface.size();
    surface.fill_polygon(&outline(size, t), &paint(size));
}

/// Scatter fresh highlights along the current crest. Nothing is kept.
pub fn sparkle<S: Surface + ?Sized, D: Dice>(surface: &mut S, t: f32, dice: &mut D) {
    let size = surface.size();
    let h = size.hf();
    for _ in 0..SPARKLES {
        let x = dice.range(0.0, size.wf());
        let y = wave_y(x, h, t) + dice.range(0.0, SPARKLE_JITTER);
        let glint = GLINT.with_alpha(dice.range(0.0, SPARKLE_ALPHA_MAX));
        surface.fill_rect(Rect::new(x, y, SPARKLE_PX, SPARKLE_PX), &Paint::Solid(glint));
    }
}
