// skywater-engine - Animated page backdrop
//
// Rain streaks over a sky and water scene, a persisted light/dark theme,
// and small hover effects on the page's icons. The core is plain Rust over
// the `Surface` trait; `web` binds it to canvases and the DOM.

pub mod config;
pub mod error;
pub mod hover;
pub mod render;
pub mod rng;
pub mod scene;
pub mod sched;
pub mod sim;
pub mod surface;
pub mod theme;
pub mod tween;

#[cfg(target_arch = "wasm32")]
mod web;

pub use config::Config;
pub use error::MountError;
pub use hover::{HoverEffects, HoverKind, HoverParticle};
pub use render::{Raster, RasterError, SpriteImage};
pub use rng::{Dice, seeded};
pub use scene::SkyScene;
pub use sched::{FrameHost, LoopHandle, ManualFrames, Step, start_loop};
pub use sim::{Clouds, RainField, School};
pub use surface::{Size, Surface, SurfaceManager};
pub use theme::{MemoryStore, PreferenceStore, ThemeController, ThemeMode};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Handle returned to JS by `mount`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct Backdrop {
    inner: web::Mounted,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Backdrop {
    /// "dark" or "light"
    pub fn theme(&self) -> String {
        self.inner.theme().as_str().to_string()
    }

    /// Flip the theme as a toggle click would; returns the new mode.
    pub fn toggle_theme(&self) -> String {
        self.inner.toggle_theme().as_str().to_string()
    }

    pub fn stop(&self) {
        self.inner.stop();
    }
}

/// Attach to `#rainCanvas` / `#skyCanvas` and start animating.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn mount(seed: Option<f64>) -> Result<Backdrop, JsValue> {
    let config = Config::default().with_seed(seed.map(|s| s as u64));
    let inner = web::mount(config)?;
    Ok(Backdrop { inner })
}
