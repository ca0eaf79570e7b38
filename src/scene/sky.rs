// sky.rs - Sky gradient and sun glow paints

use crate::surface::{Paint, Point, Rgba, Size, Stops, pt};

const ZENITH: Rgba = Rgba::hex(0xaee1f9);
const HORIZON: Rgba = Rgba::hex(0xffffff);
const HORIZON_AT: f32 = 0.7;

const SUN: Rgba = Rgba::new(255, 255, 200, 0.5);
const SUN_AT: f32 = 0.3;
const SUN_BOB_PX: f32 = 10.0;
const SUN_BOB_RATE: f32 = 0.5;
pub const SUN_RADIUS: f32 = 250.0;

pub fn gradient(size: Size) -> Paint {
    Paint::Linear {
        from: pt(0.0, 0.0),
        to: pt(0.0, size.hf() * HORIZON_AT),
        stops: Stops { start: ZENITH, end: HORIZON },
    }
}

/// Sun center; bobs gently with the scene clock.
pub fn sun_center(size: Size, t: f32) -> Point {
    pt(size.wf() / 2.0, size.hf() * SUN_AT + (t * SUN_BOB_RATE).sin() * SUN_BOB_PX)
}

pub fn glow(size: Size, t: f32) -> Paint {
    Paint::Radial {
        center: sun_center(size, t),
        radius: SUN_RADIUS,
        stops: Stops { start: SUN, end: SUN.with_alpha(0.0) },
    }
}
