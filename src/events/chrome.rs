use super::bound;
use crate::dom::{self, Listener};
use crate::fullscreen;
use crate::mount::Mounted;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

fn on_click(
    viewer: &Rc<Mounted>,
    button: &web::HtmlButtonElement,
    handler: impl Fn(&Rc<Mounted>) + 'static,
) -> Result<Listener, JsValue> {
    Listener::new(
        button.as_ref(),
        "click",
        bound(viewer, move |v, _ev: web::Event| handler(v)),
    )
}

/// Control buttons and the hotspot panel.
pub fn wire_buttons(viewer: &Rc<Mounted>, out: &mut Vec<Listener>) -> Result<(), JsValue> {
    let d = &viewer.dom;
    out.push(on_click(viewer, &d.mute_button, |v| {
        let enabled = v.session.borrow_mut().toggle_audio();
        v.apply_audio_enabled(enabled);
    })?);
    out.push(on_click(viewer, &d.reset_button, |v| {
        v.session.borrow_mut().reset_view();
    })?);
    out.push(on_click(viewer, &d.fullscreen_button, |v| {
        let req = v.session.borrow_mut().begin_fullscreen_toggle();
        if let Some(req) = req {
            fullscreen::request(v, req);
        }
    })?);
    out.push(on_click(viewer, &d.close_button, |v| {
        v.session.borrow_mut().dismiss();
        v.sync_overlay();
    })?);
    out.push(on_click(viewer, &d.play_button, |v| v.play_selected_media())?);
    if let Some(exit) = &d.exit_button {
        out.push(on_click(viewer, exit, |v| v.request_close())?);
    }
    Ok(())
}

/// Window resize, device orientation and document full-screen changes.
pub fn wire_window(viewer: &Rc<Mounted>, out: &mut Vec<Listener>) -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;

    out.push(Listener::new(
        window.as_ref(),
        "resize",
        bound(viewer, |v, _ev: web::Event| {
            dom::sync_canvas_backing_size(&v.dom.canvas);
        }),
    )?);

    out.push(Listener::new(
        document.as_ref(),
        "fullscreenchange",
        bound(viewer, |v, _ev: web::Event| fullscreen::on_change(v)),
    )?);

    let orientation = viewer.session.borrow().device_orientation_enabled();
    if orientation {
        out.push(Listener::typed(
            window.as_ref(),
            "deviceorientation",
            bound(viewer, |v, ev: web::DeviceOrientationEvent| {
                if let (Some(alpha), Some(beta)) = (ev.alpha(), ev.beta()) {
                    v.session
                        .borrow_mut()
                        .device_orientation(alpha as f32, beta as f32);
                }
            }),
        )?);
    }
    Ok(())
}
