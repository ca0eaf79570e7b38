// canvas.rs - Surface over a 2D canvas context

use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use crate::error::MountError;
use crate::surface::{LineCap, Paint, Point, Rect, Size, Sprite, Stroke, Surface};

/// Fish images. Drawn only once decoded; a failed load logs once and the
/// fish simply never appear.
pub struct Sprites {
    right: Option<HtmlImageElement>,
    left: Option<HtmlImageElement>,
    _errors: Vec<EventListener>,
}

impl Sprites {
    pub fn load(right_src: &str, left_src: &str) -> Self {
        let mut errors = Vec::new();
        let mut image = |src: &str| {
            let img = HtmlImageElement::new().ok()?;
            let name = src.to_owned();
            errors.push(EventListener::once(&img, "error", move |_| {
                console::warn!("sprite failed to load:", name.as_str());
            }));
            img.set_src(src);
            Some(img)
        };
        let right = image(right_src);
        let left = image(left_src);
        Self { right, left, _errors: errors }
    }

    fn ready(&self, sprite: Sprite) -> Option<&HtmlImageElement> {
        let img = match sprite {
            Sprite::FishRight => self.right.as_ref(),
            Sprite::FishLeft => self.left.as_ref(),
        }?;
        (img.complete() && img.natural_width() > 0).then_some(img)
    }
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sprites: Rc<Sprites>,
}

impl CanvasSurface {
    pub fn attach(document: &Document, id: &str, sprites: Rc<Sprites>) -> Result<Self, MountError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| MountError::MissingElement(id.into()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| MountError::NotCanvas(id.into()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| MountError::NoContext(id.into()))?;
        Ok(Self { canvas, ctx, sprites })
    }

    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.css()),
            Paint::Linear { from, to, stops } => {
                let g = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                let _ = g.add_color_stop(0.0, &stops.start.css());
                let _ = g.add_color_stop(1.0, &stops.end.css());
                self.ctx.set_fill_style_canvas_gradient(&g);
            }
            Paint::Radial { center, radius, stops } => {
                let (cx, cy) = (center.x as f64, center.y as f64);
                match self.ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, *radius as f64) {
                    Ok(g) => {
                        let _ = g.add_color_stop(0.0, &stops.start.css());
                        let _ = g.add_color_stop(1.0, &stops.end.css());
                        self.ctx.set_fill_style_canvas_gradient(&g);
                    }
                    Err(_) => self.ctx.set_fill_style_str(&stops.end.css()),
                }
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, size: Size) {
        self.canvas.set_width(size.w);
        self.canvas.set_height(size.h);
    }

    fn clear(&mut self) {
        let s = self.size();
        self.ctx.clear_rect(0.0, 0.0, s.w as f64, s.h as f64);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.set_fill(paint);
        self.ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_disc(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.set_fill(paint);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn fill_polygon(&mut self, points: &[Point], paint: &Paint) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.set_fill(paint);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.css());
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx.set_line_cap(match stroke.cap {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        });
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        if let Some(img) = self.sprites.ready(sprite) {
            let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                rect.x as f64,
                rect.y as f64,
                rect.w as f64,
                rect.h as f64,
            );
        }
    }
}
