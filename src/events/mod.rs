pub mod keyboard;
#[cfg(target_arch = "wasm32")]
pub mod pointer;
#[cfg(target_arch = "wasm32")]
mod chrome;

#[cfg(target_arch = "wasm32")]
pub use wiring::wire_all;

#[cfg(target_arch = "wasm32")]
mod wiring {
    use crate::dom::Listener;
    use crate::mount::Mounted;
    use std::rc::Rc;
    use wasm_bindgen::JsValue;

    /// Attach every listener the viewer needs. They stay registered until the
    /// returned values are dropped.
    pub fn wire_all(viewer: &Rc<Mounted>) -> Result<Vec<Listener>, JsValue> {
        let mut listeners = Vec::with_capacity(16);
        super::pointer::wire_canvas(viewer, &mut listeners)?;
        super::keyboard::wire_keydown(viewer, &mut listeners)?;
        super::chrome::wire_buttons(viewer, &mut listeners)?;
        super::chrome::wire_window(viewer, &mut listeners)?;
        Ok(listeners)
    }

    /// Wrap a handler so it holds the viewer weakly; events arriving after
    /// the viewer is gone are dropped.
    pub(crate) fn bound<E: 'static>(
        viewer: &Rc<Mounted>,
        mut handler: impl FnMut(&Rc<Mounted>, E) + 'static,
    ) -> impl FnMut(E) + 'static {
        let weak = Rc::downgrade(viewer);
        move |ev| {
            if let Some(viewer) = weak.upgrade() {
                handler(&viewer, ev);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use wiring::bound;
