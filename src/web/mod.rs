// web/ - Browser binding
//
// Wires the core to the page: two canvases, localStorage, rAF loops, and
// DOM listeners. Three loops run once mounted:
//   rain  - upper canvas, every frame
//   sky   - lower canvas, reads the theme each frame for the fish layer
//   decor - DOM only: hover particle sweep, theme pulse, icon bob

mod canvas;
mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use rand::rngs::SmallRng;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::Config;
use crate::error::MountError;
use crate::hover::{HoverEffects, HoverKind};
use crate::rng;
use crate::scene::SkyScene;
use crate::sched::{LoopHandle, start_loop};
use crate::sim::RainField;
use crate::surface::{Surface, SurfaceManager};
use crate::theme::{ThemeController, ThemeMode};
use crate::tween::Bob;

use canvas::{CanvasSurface, Sprites};
use dom::{BrowserFrames, HoverNodes, LocalStore};

type SharedDice = Rc<RefCell<SmallRng>>;

/// Theme state plus the element its class lives on.
#[derive(Clone)]
struct ThemeBinding {
    theme: Rc<RefCell<ThemeController<LocalStore>>>,
    body: HtmlElement,
    window: Window,
}

impl ThemeBinding {
    fn mode(&self) -> ThemeMode {
        self.theme.borrow().mode()
    }

    fn toggle(&self) -> ThemeMode {
        let now = dom::now(&self.window);
        let mode = self.theme.borrow_mut().toggle(now);
        dom::apply_theme_class(&self.body, mode);
        console::log!("theme:", mode.as_str());
        mode
    }

    /// Applies the pulse style while one is running, and once more to clear it.
    fn tick_pulse(&self, now: f64) {
        let mut theme = self.theme.borrow_mut();
        if theme.pulsing() {
            dom::apply_pulse(&self.body, theme.pulse(now));
        }
    }
}

/// A running backdrop. `stop` halts the loops, detaches every listener and
/// removes any hover particles still in the page.
pub struct Mounted {
    theme: ThemeBinding,
    loops: Vec<LoopHandle>,
    hover: Rc<RefCell<HoverEffects>>,
    nodes: Rc<RefCell<HoverNodes>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Mounted {
    pub fn theme(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn toggle_theme(&self) -> ThemeMode {
        self.theme.toggle()
    }

    pub fn stop(&self) {
        for handle in &self.loops {
            handle.stop();
        }
        self.listeners.borrow_mut().clear();
        let gone = self.hover.borrow_mut().sweep(f64::INFINITY);
        self.nodes.borrow_mut().remove(&gone);
        dom::apply_pulse(&self.theme.body, None);
        console::log!("backdrop stopped");
    }
}

pub fn mount(config: Config) -> Result<Mounted, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let body = document.body().ok_or(MountError::NoBody)?;

    let controller = ThemeController::load_with_key(LocalStore::new(&window), config.storage_key);
    dom::apply_theme_class(&body, controller.mode());
    let theme = ThemeBinding {
        theme: Rc::new(RefCell::new(controller)),
        body: body.clone(),
        window: window.clone(),
    };

    let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    let dice: SharedDice = Rc::new(RefCell::new(rng::seeded(seed)));

    let sprites = Rc::new(Sprites::load(config.fish_right_src, config.fish_left_src));
    let surfaces = Rc::new(SurfaceManager::new(
        CanvasSurface::attach(&document, config.rain_canvas_id, Rc::clone(&sprites))?,
        CanvasSurface::attach(&document, config.sky_canvas_id, Rc::clone(&sprites))?,
    ));
    surfaces.resize(dom::viewport(&window));

    let mut listeners = Vec::new();
    {
        let surfaces = Rc::clone(&surfaces);
        let win = window.clone();
        listeners.push(EventListener::new(&window, "resize", move |_| {
            surfaces.resize(dom::viewport(&win));
        }));
    }

    let hover = Rc::new(RefCell::new(HoverEffects::new()));
    let nodes = Rc::new(RefCell::new(HoverNodes::default()));

    let loops = vec![
        rain_loop(&config, &surfaces, &dice),
        sky_loop(&config, &surfaces, &dice, &theme),
        decor_loop(&config, seed, &document, &theme, &hover, &nodes),
    ];

    match document.query_selector(config.toggle_selector).ok().flatten() {
        Some(toggle) => {
            let theme = theme.clone();
            listeners.push(EventListener::new(&toggle, "click", move |_| {
                theme.toggle();
            }));
        }
        None => console::warn!("no theme toggle matches", config.toggle_selector),
    }

    let wraps: Vec<Element> = dom::select_all(&document, config.icon_wrap_selector);
    for wrap in &wraps {
        for branch in [HoverKind::Droplet, HoverKind::Ripple] {
            listeners.push(hover_listener(branch, wrap, &document, &theme, &hover, &nodes, &dice));
        }
    }

    console::log!(
        "backdrop mounted:",
        theme.mode().as_str(),
        "seed",
        seed.to_string(),
        "icon wraps",
        wraps.len() as u32
    );

    Ok(Mounted {
        theme,
        loops,
        hover,
        nodes,
        listeners: RefCell::new(listeners),
    })
}

fn rain_loop(
    config: &Config,
    surfaces: &SurfaceManager<CanvasSurface>,
    dice: &SharedDice,
) -> LoopHandle {
    let surface = surfaces.rain();
    let dice = Rc::clone(dice);
    let size = surface.borrow().size();
    let mut rain = RainField::new(config.rain_drops, size, &mut *dice.borrow_mut());
    start_loop(BrowserFrames::new(), move |_: f64| {
        rain.step(&mut *surface.borrow_mut(), &mut *dice.borrow_mut());
    })
}

fn sky_loop(
    config: &Config,
    surfaces: &SurfaceManager<CanvasSurface>,
    dice: &SharedDice,
    theme: &ThemeBinding,
) -> LoopHandle {
    let surface = surfaces.sky();
    let dice = Rc::clone(dice);
    let theme = theme.clone();
    let size = surface.borrow().size();
    let mut scene =
        SkyScene::with_counts(size, config.clouds, config.fish, &mut *dice.borrow_mut());
    start_loop(BrowserFrames::new(), move |_: f64| {
        scene.frame(&mut *surface.borrow_mut(), theme.mode(), &mut *dice.borrow_mut());
    })
}

fn decor_loop(
    config: &Config,
    seed: u64,
    document: &Document,
    theme: &ThemeBinding,
    hover: &Rc<RefCell<HoverEffects>>,
    nodes: &Rc<RefCell<HoverNodes>>,
) -> LoopHandle {
    let icons: Vec<HtmlElement> = dom::select_all(document, config.floating_icon_selector);
    let row = Bob::row(icons.len(), seed);
    let bobs: Vec<(HtmlElement, Bob)> = icons.into_iter().zip(row).collect();

    let origin = dom::now(&theme.window);
    let theme = theme.clone();
    let hover = Rc::clone(hover);
    let nodes = Rc::clone(nodes);
    start_loop(BrowserFrames::new(), move |now: f64| {
        let gone = hover.borrow_mut().sweep(now);
        if !gone.is_empty() {
            nodes.borrow_mut().remove(&gone);
        }
        theme.tick_pulse(now);
        for (icon, bob) in &bobs {
            dom::set_translate_y(icon, bob.offset(now - origin));
        }
    })
}

fn hover_listener(
    branch: HoverKind,
    wrap: &Element,
    document: &Document,
    theme: &ThemeBinding,
    hover: &Rc<RefCell<HoverEffects>>,
    nodes: &Rc<RefCell<HoverNodes>>,
    dice: &SharedDice,
) -> EventListener {
    let target = wrap.clone();
    let document = document.clone();
    let theme = theme.clone();
    let hover = Rc::clone(hover);
    let nodes = Rc::clone(nodes);
    let dice = Rc::clone(dice);
    EventListener::new(wrap, "mouseenter", move |_| {
        let now = dom::now(&theme.window);
        let mut hover = hover.borrow_mut();
        // Expired particles go first, so the page stays bounded even when
        // the decor loop is not sweeping.
        let gone = hover.sweep(now);
        if !gone.is_empty() {
            nodes.borrow_mut().remove(&gone);
        }
        let burst = hover.burst(branch, theme.mode(), now, &mut *dice.borrow_mut());
        nodes.borrow_mut().spawn(&document, &target, burst);
    })
}
