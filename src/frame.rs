use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that can be cancelled. The loop also ends
/// on its own once `on_frame` returns `false`.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
}

fn schedule(tick: &Tick, handle: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        handle.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut() -> bool + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let tick_inner = tick.clone();
        let handle_inner = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_inner.set(None);
            if on_frame() {
                schedule(&tick_inner, &handle_inner);
            }
        }) as Box<dyn FnMut()>));
        schedule(&tick, &handle);
        Self { tick, handle }
    }

    /// Cancel the pending frame and drop the callback. Must not be called
    /// from inside `on_frame`.
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
