use crate::controls::FullscreenRequest;
use crate::dom;
use crate::mount::Mounted;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Call a zero-argument method by name and hand back whatever it returns.
/// web-sys binds the full-screen methods as returning nothing, but browsers
/// return a promise that carries the rejection.
fn call_method(target: &JsValue, name: &str) -> Result<JsValue, JsValue> {
    let f: js_sys::Function = js_sys::Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    f.call0(target)
}

async fn settle(value: JsValue) -> Result<(), JsValue> {
    match value.dyn_into::<js_sys::Promise>() {
        Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
        Err(_) => Ok(()),
    }
}

/// Issue the platform request for a toggle the session already applied.
pub fn request(viewer: &Rc<Mounted>, req: FullscreenRequest) {
    viewer
        .dom
        .set_fullscreen_button(matches!(req, FullscreenRequest::Enter));
    let call = match req {
        FullscreenRequest::Enter => call_method(viewer.dom.container.as_ref(), "requestFullscreen"),
        FullscreenRequest::Exit => match dom::window_document() {
            Some(doc) => call_method(doc.as_ref(), "exitFullscreen"),
            None => Err(JsValue::from_str("no document")),
        },
    };
    let weak = Rc::downgrade(viewer);
    spawn_local(async move {
        let outcome = match call {
            Ok(v) => settle(v).await,
            Err(e) => Err(e),
        };
        let Some(viewer) = weak.upgrade() else {
            return;
        };
        let active = {
            let mut session = viewer.session.borrow_mut();
            if !session.is_mounted() {
                return;
            }
            match outcome {
                Ok(()) => session.fullscreen_resolved(),
                Err(e) => {
                    log::warn!("[fullscreen] {:?} rejected: {:?}", req, e);
                    session.fullscreen_rejected();
                }
            }
            session.controls().is_fullscreen()
        };
        viewer.dom.set_fullscreen_button(active);
    });
}

/// `fullscreenchange`: the user may have left full screen with Escape.
pub fn on_change(viewer: &Mounted) {
    let active = dom::window_document()
        .and_then(|d| d.fullscreen_element())
        .is_some();
    let synced = {
        let mut session = viewer.session.borrow_mut();
        session.sync_fullscreen(active);
        session.controls().is_fullscreen()
    };
    viewer.dom.set_fullscreen_button(synced);
    dom::sync_canvas_backing_size(&viewer.dom.canvas);
}
