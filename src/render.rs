// render.rs - Software surface over an RGBA8 buffer
//
// Implements `Surface` without a browser so frames can be rendered offline
// (see the `preview` binary) and inspected in tests. Pixels are straight
// (non-premultiplied) RGBA, composited source-over, sampled at pixel centers.

use std::collections::HashMap;

use crate::surface::{Paint, Point, Rect, Rgba, Size, Sprite, Stroke, Surface};

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("{w}x{h} pixels do not fit in one RGBA buffer")]
    TooLarge { w: u32, h: u32 },
}

/// Byte length of a `w` x `h` RGBA8 buffer, or None if it overflows `usize`.
pub fn buffer_len(w: u32, h: u32) -> Option<usize> {
    (w as usize).checked_mul(h as usize)?.checked_mul(4)
}

#[inline]
fn offset(x: u32, y: u32, w: u32) -> usize {
    (y as usize * w as usize + x as usize) * 4
}

/// Decoded sprite pixels, RGBA8 row-major.
#[derive(Clone, Debug)]
pub struct SpriteImage {
    pub w: u32,
    pub h: u32,
    pub rgba: Vec<u8>,
}

impl SpriteImage {
    pub fn new(w: u32, h: u32, rgba: Vec<u8>) -> Option<Self> {
        if w == 0 || h == 0 || buffer_len(w, h) != Some(rgba.len()) {
            return None;
        }
        Some(Self { w, h, rgba })
    }

    #[inline]
    fn texel(&self, u: u32, v: u32) -> Rgba {
        let i = offset(u.min(self.w - 1), v.min(self.h - 1), self.w);
        Rgba::new(self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3] as f32 / 255.0)
    }
}

pub struct Raster {
    out: Vec<u8>,
    w: u32,
    h: u32,
    sprites: HashMap<Sprite, SpriteImage>,
}

impl Raster {
    /// A size whose buffer cannot be addressed leaves the raster empty (0x0),
    /// the way a canvas ignores dimensions it cannot back.
    pub fn new(size: Size) -> Self {
        let mut raster = Self {
            out: Vec::new(),
            w: 0,
            h: 0,
            sprites: HashMap::new(),
        };
        raster.set_size(size);
        raster
    }

    pub fn try_new(size: Size) -> Result<Self, RasterError> {
        buffer_len(size.w, size.h).ok_or(RasterError::TooLarge { w: size.w, h: size.h })?;
        Ok(Self::new(size))
    }

    /// Register a sprite; until then `draw_sprite` is a no-op for it.
    pub fn load_sprite(&mut self, sprite: Sprite, image: SpriteImage) {
        self.sprites.insert(sprite, image);
    }

    pub fn pixels(&self) -> &[u8] {
        &self.out
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.out
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.w || y >= self.h {
            return [0; 4];
        }
        let i = offset(x, y, self.w);
        [self.out[i], self.out[i + 1], self.out[i + 2], self.out[i + 3]]
    }

    /// Lay `top` over this raster, as the browser stacks the two canvases.
    pub fn composite_over(&mut self, top: &Raster) {
        let w = self.w.min(top.w) as i32;
        let h = self.h.min(top.h) as i32;
        for y in 0..h {
            for x in 0..w {
                let [r, g, b, a] = top.pixel(x as u32, y as u32);
                if a > 0 {
                    self.blend(x, y, Rgba::new(r, g, b, a as f32 / 255.0));
                }
            }
        }
    }

    #[inline]
    fn blend(&mut self, x: i32, y: i32, src: Rgba) {
        if (x as u32) >= self.w || (y as u32) >= self.h || src.a <= 0.0 {
            return;
        }
        let i = offset(x as u32, y as u32, self.w);
        let sa = src.a.min(1.0);
        let da = self.out[i + 3] as f32 / 255.0;
        let oa = sa + da * (1.0 - sa);
        let mix = |s: u8, d: u8| ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / oa).round() as u8;
        self.out[i] = mix(src.r, self.out[i]);
        self.out[i + 1] = mix(src.g, self.out[i + 1]);
        self.out[i + 2] = mix(src.b, self.out[i + 2]);
        self.out[i + 3] = (oa * 255.0).round() as u8;
    }

    /// Pixel columns whose centers fall inside [x0, x1).
    #[inline]
    fn span(&self, x0: f32, x1: f32) -> (i32, i32) {
        let lo = (x0 - 0.5).ceil().max(0.0) as i32;
        let hi = ((x1 - 0.5).ceil() as i32).min(self.w as i32);
        (lo, hi)
    }

    #[inline]
    fn rows(&self, y0: f32, y1: f32) -> (i32, i32) {
        let lo = (y0 - 0.5).ceil().max(0.0) as i32;
        let hi = ((y1 - 0.5).ceil() as i32).min(self.h as i32);
        (lo, hi)
    }
}

#[inline]
fn center(x: i32, y: i32) -> Point {
    Point { x: x as f32 + 0.5, y: y as f32 + 0.5 }
}

impl Surface for Raster {
    fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Like a canvas, resizing also wipes the pixels.
    fn set_size(&mut self, size: Size) {
        let (w, h, len) = match buffer_len(size.w, size.h) {
            Some(len) => (size.w, size.h, len),
            None => (0, 0, 0),
        };
        self.w = w;
        self.h = h;
        self.out = vec![0; len];
    }

    fn clear(&mut self) {
        self.out.fill(0);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        let (x0, x1) = self.span(rect.x, rect.x + rect.w);
        let (y0, y1) = self.rows(rect.y, rect.y + rect.h);
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, paint.sample(center(x, y)));
            }
        }
    }

    fn fill_disc(&mut self, c: Point, radius: f32, paint: &Paint) {
        let r2 = radius * radius;
        let (x0, x1) = self.span(c.x - radius, c.x + radius);
        let (y0, y1) = self.rows(c.y - radius, c.y + radius);
        for y in y0..y1 {
            for x in x0..x1 {
                let p = center(x, y);
                let (dx, dy) = (p.x - c.x, p.y - c.y);
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, paint.sample(p));
                }
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Point], paint: &Paint) {
        if points.len() < 3 {
            return;
        }
        let (mut top, mut bottom) = (f32::MAX, f32::MIN);
        for p in points {
            top = top.min(p.y);
            bottom = bottom.max(p.y);
        }

        let (y0, y1) = self.rows(top, bottom);
        let mut xs: Vec<f32> = Vec::with_capacity(8);
        for y in y0..y1 {
            let yc = y as f32 + 0.5;
            xs.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= yc) != (b.y <= yc) {
                    xs.push(a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            xs.sort_unstable_by(|a, b| a.total_cmp(b));

            for pair in xs.chunks_exact(2) {
                let (x0, x1) = self.span(pair[0], pair[1]);
                for x in x0..x1 {
                    self.blend(x, y, paint.sample(center(x, y)));
                }
            }
        }
    }

    /// One pixel wide regardless of `stroke.width`.
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i32;
        let mut last = None;
        let n = steps as f32;
        for i in 0..=steps {
            let px = (from.x + dx * i as f32 / n).floor() as i32;
            let py = (from.y + dy * i as f32 / n).floor() as i32;
            if last == Some((px, py)) {
                continue;
            }
            last = Some((px, py));
            self.blend(px, py, stroke.color);
        }
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let Some(image) = self.sprites.remove(&sprite) else {
            return;
        };
        let (x0, x1) = self.span(rect.x, rect.x + rect.w);
        let (y0, y1) = self.rows(rect.y, rect.y + rect.h);
        for y in y0..y1 {
            let v = ((center(0, y).y - rect.y) / rect.h * image.h as f32) as u32;
            for x in x0..x1 {
                let u = ((center(x, 0).x - rect.x) / rect.w * image.w as f32) as u32;
                self.blend(x, y, image.texel(u, v));
            }
        }
        self.sprites.insert(sprite, image);
    }
}
