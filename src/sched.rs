// sched.rs - Self-rescheduling frame loops
//
// A loop arms one callback on its host, runs one step when it fires, and
// re-arms until stopped. The host decides when ticks happen: the browser
// binding uses requestAnimationFrame, tests pump `ManualFrames` by hand.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Something that can call back once on the next presentation tick.
pub trait FrameHost {
    fn request_frame(&self, callback: FrameCallback);
}

/// One unit of work per tick, given the tick time in ms.
pub trait Step {
    fn step(&mut self, now_ms: f64);
}

impl<F: FnMut(f64)> Step for F {
    fn step(&mut self, now_ms: f64) {
        self(now_ms)
    }
}

#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl LoopHandle {
    /// No further steps run; an already armed tick fires as a no-op.
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn running(&self) -> bool {
        self.running.get()
    }

    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

struct LoopState<S> {
    step: RefCell<S>,
    running: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

pub fn start_loop<H, S>(host: Rc<H>, step: S) -> LoopHandle
where
    H: FrameHost + 'static,
    S: Step + 'static,
{
    let running = Rc::new(Cell::new(true));
    let frames = Rc::new(Cell::new(0));
    let state = Rc::new(LoopState {
        step: RefCell::new(step),
        running: Rc::clone(&running),
        frames: Rc::clone(&frames),
    });
    arm(host, state);
    LoopHandle { running, frames }
}

fn arm<H, S>(host: Rc<H>, state: Rc<LoopState<S>>)
where
    H: FrameHost + 'static,
    S: Step + 'static,
{
    let next = Rc::clone(&host);
    host.request_frame(Box::new(move |now_ms| {
        if !state.running.get() {
            return;
        }
        state.step.borrow_mut().step(now_ms);
        state.frames.set(state.frames.get() + 1);
        arm(next, state);
    }));
}

/// Host driven by hand; each `pump` fires everything armed before it.
#[derive(Default)]
pub struct ManualFrames {
    queue: RefCell<VecDeque<FrameCallback>>,
    now_ms: Cell<f64>,
}

impl ManualFrames {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Advance the clock by `dt_ms` and fire one tick.
    pub fn pump(&self, dt_ms: f64) -> usize {
        let now = self.now_ms.get() + dt_ms;
        self.now_ms.set(now);
        let due: Vec<FrameCallback> = self.queue.borrow_mut().drain(..).collect();
        let fired = due.len();
        for callback in due {
            callback(now);
        }
        fired
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl FrameHost for ManualFrames {
    fn request_frame(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push_back(callback);
    }
}
