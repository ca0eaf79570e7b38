// dom.rs - Small DOM helpers: storage, classes, styles, frame host

use std::cell::RefCell;
use std::collections::HashMap;

use gloo::render::{AnimationFrame, request_animation_frame};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

use crate::hover::HoverParticle;
use crate::sched::{FrameCallback, FrameHost};
use crate::surface::Size;
use crate::theme::{PreferenceStore, ThemeMode};
use crate::tween::PulseFrame;

/// `window.localStorage`; reads and writes fail quietly when unavailable.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        Self { storage: window.local_storage().ok().flatten() }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}

/// requestAnimationFrame as a `FrameHost`. One pending frame per host.
#[derive(Default)]
pub struct BrowserFrames {
    pending: RefCell<Option<AnimationFrame>>,
}

impl BrowserFrames {
    pub fn new() -> std::rc::Rc<Self> {
        std::rc::Rc::new(Self::default())
    }
}

impl FrameHost for BrowserFrames {
    fn request_frame(&self, callback: FrameCallback) {
        let handle = request_animation_frame(callback);
        *self.pending.borrow_mut() = Some(handle);
    }
}

pub fn viewport(window: &Window) -> Size {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    Size::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// Same timebase as requestAnimationFrame timestamps.
pub fn now(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

pub fn apply_theme_class(root: &Element, mode: ThemeMode) {
    let classes = root.class_list();
    let _ = classes.remove_1(mode.other_class());
    let _ = classes.add_1(mode.as_str());
}

/// Pulse style on the root; `None` hands the properties back to CSS.
pub fn apply_pulse(root: &HtmlElement, frame: Option<PulseFrame>) {
    let style = root.style();
    match frame {
        Some(f) => {
            let _ = style.set_property("opacity", &format!("{:.3}", f.opacity));
            let _ = style.set_property("filter", &format!("blur({:.2}px)", f.blur_px));
        }
        None => {
            let _ = style.remove_property("opacity");
            let _ = style.remove_property("filter");
        }
    }
}

pub fn set_translate_y(el: &HtmlElement, px: f32) {
    let _ = el.style().set_property("transform", &format!("translateY({px:.2}px)"));
}

/// Every element matching `selector`, cast to `T`; non-matching nodes skipped.
pub fn select_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// DOM nodes backing live hover particles, keyed by particle id.
#[derive(Default)]
pub struct HoverNodes {
    nodes: HashMap<u64, Element>,
}

impl HoverNodes {
    pub fn spawn(&mut self, document: &Document, wrap: &Element, burst: &[HoverParticle]) {
        for p in burst {
            let Ok(el) = document.create_element("div") else {
                continue;
            };
            let _ = el.class_list().add_1(p.kind.class());
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let style = html.style();
                if let Some(left) = p.left_px {
                    let _ = style.set_property("left", &format!("{left}px"));
                }
                if let Some(top) = p.top_px {
                    let _ = style.set_property("top", &format!("{top}px"));
                }
                let _ = style.set_property("animation-delay", &format!("{}s", p.delay_s));
            }
            if wrap.append_child(&el).is_ok() {
                self.nodes.insert(p.id, el);
            }
        }
    }

    pub fn remove(&mut self, ids: &[u64]) {
        for id in ids {
            if let Some(el) = self.nodes.remove(id) {
                el.remove();
            }
        }
    }
}
