use crate::surface::CanvasSurface;
use folio_core::{Scheduler, TickOutcome};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedScheduler = Rc<RefCell<Scheduler<CanvasSurface>>>;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// requestAnimationFrame driver for the scheduler. At most one frame is ever
/// pending; a tick that halts the scheduler simply does not reschedule.
#[derive(Clone)]
pub struct FrameLoop {
    scheduler: SharedScheduler,
    tick: TickClosure,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(scheduler: SharedScheduler) -> Self {
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let scheduler_tick = scheduler.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            pending_tick.set(None);
            let outcome = scheduler_tick.borrow_mut().tick(now_ms);
            if outcome == TickOutcome::Reschedule {
                pending_tick.set(request(&tick_clone));
            }
        }) as Box<dyn FnMut(f64)>));

        Self {
            scheduler,
            tick,
            pending,
        }
    }

    pub fn start(&self) {
        if self.pending.get().is_none() {
            self.pending.set(request(&self.tick));
        }
    }

    pub fn pause(&self) {
        self.scheduler.borrow_mut().pause();
        self.cancel();
        log::debug!("[frame] paused");
    }

    pub fn resume(&self) {
        if self.scheduler.borrow_mut().resume(instant::now()) {
            self.start();
            log::debug!("[frame] resumed");
        }
    }

    pub fn stop(&self) {
        self.scheduler.borrow_mut().stop();
        self.cancel();
    }

    fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

fn request(tick: &TickClosure) -> Option<i32> {
    let w = web::window()?;
    let borrowed = tick.borrow();
    let closure = borrowed.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}
