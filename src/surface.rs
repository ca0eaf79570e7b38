// surface.rs - 2D drawing contract and the two stacked surfaces
//
// The simulations only talk to `Surface`. The browser binding backs it with a
// canvas 2D context, the preview tool with `render::Raster`.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    #[inline]
    pub fn wf(self) -> f32 {
        self.w as f32
    }

    #[inline]
    pub fn hf(self) -> f32 {
        self.h as f32
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[inline]
pub const fn pt(x: f32, y: f32) -> Point {
    Point { x, y }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn full(size: Size) -> Self {
        Self::new(0.0, 0.0, size.wf(), size.hf())
    }

    /// Square of side `side` centered on `c`.
    pub fn centered(c: Point, side: f32) -> Self {
        Self::new(c.x - side / 2.0, c.y - side / 2.0, side, side)
    }
}

/// Straight (non-premultiplied) color, alpha in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn hex(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 1.0)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn css(self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Two-stop gradient, offsets 0 and 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stops {
    pub start: Rgba,
    pub end: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear { from: Point, to: Point, stops: Stops },
    Radial { center: Point, radius: f32, stops: Stops },
}

impl Paint {
    /// Color at `p`, the same way a canvas 2D gradient resolves it.
    pub fn sample(&self, p: Point) -> Rgba {
        match *self {
            Paint::Solid(c) => c,
            Paint::Linear { from, to, stops } => {
                let (dx, dy) = (to.x - from.x, to.y - from.y);
                let len2 = dx * dx + dy * dy;
                if len2 <= f32::EPSILON {
                    return stops.end;
                }
                let t = ((p.x - from.x) * dx + (p.y - from.y) * dy) / len2;
                stops.start.lerp(stops.end, t)
            }
            Paint::Radial { center, radius, stops } => {
                if radius <= 0.0 {
                    return stops.end;
                }
                let (dx, dy) = (p.x - center.x, p.y - center.y);
                let t = (dx * dx + dy * dy).sqrt() / radius;
                stops.start.lerp(stops.end, t)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
    pub cap: LineCap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    FishRight,
    FishLeft,
}

pub trait Surface {
    fn size(&self) -> Size;
    fn set_size(&mut self, size: Size);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
    fn fill_disc(&mut self, center: Point, radius: f32, paint: &Paint);
    /// Closed simple polygon; the last point joins the first.
    fn fill_polygon(&mut self, points: &[Point], paint: &Paint);
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke);
    /// Draws nothing while the sprite is not ready.
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);
}

/// Upper rain surface and lower sky surface, always viewport-sized.
pub struct SurfaceManager<S> {
    rain: Rc<RefCell<S>>,
    sky: Rc<RefCell<S>>,
}

impl<S: Surface> SurfaceManager<S> {
    pub fn new(rain: S, sky: S) -> Self {
        Self {
            rain: Rc::new(RefCell::new(rain)),
            sky: Rc::new(RefCell::new(sky)),
        }
    }

    pub fn resize(&self, viewport: Size) {
        self.rain.borrow_mut().set_size(viewport);
        self.sky.borrow_mut().set_size(viewport);
    }

    pub fn rain(&self) -> Rc<RefCell<S>> {
        Rc::clone(&self.rain)
    }

    pub fn sky(&self) -> Rc<RefCell<S>> {
        Rc::clone(&self.sky)
    }
}
