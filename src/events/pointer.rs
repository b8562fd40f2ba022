use super::bound;
use crate::dom::Listener;
use crate::input::{is_primary_button, pointer_canvas_px};
use crate::mount::Mounted;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn canvas_pos(viewer: &Mounted, ev: &web::PointerEvent) -> glam::Vec2 {
    pointer_canvas_px(ev, &viewer.dom.canvas)
}

/// Pointer and wheel handlers on the canvas: orbit, pinch, hover, click and
/// zoom.
pub fn wire_canvas(viewer: &Rc<Mounted>, out: &mut Vec<Listener>) -> Result<(), JsValue> {
    let target: web::EventTarget = viewer.dom.canvas.clone().into();

    out.push(Listener::typed(
        &target,
        "pointerdown",
        bound(viewer, |v, ev: web::PointerEvent| {
            // right and middle presses never orbit or select
            if !is_primary_button(ev.button()) {
                return;
            }
            let pos = canvas_pos(v, &ev);
            // keyboard shortcuts follow the viewer that was last touched
            _ = v.dom.container.focus();
            _ = v.dom.canvas.set_pointer_capture(ev.pointer_id());
            v.session.borrow_mut().pointer_down(ev.pointer_id(), pos);
        }),
    )?);

    out.push(Listener::typed(
        &target,
        "pointermove",
        bound(viewer, |v, ev: web::PointerEvent| {
            let pos = canvas_pos(v, &ev);
            v.session.borrow_mut().pointer_move(ev.pointer_id(), pos);
        }),
    )?);

    out.push(Listener::typed(
        &target,
        "pointerup",
        bound(viewer, |v, ev: web::PointerEvent| {
            let pos = canvas_pos(v, &ev);
            _ = v.dom.canvas.release_pointer_capture(ev.pointer_id());
            let selected = v.session.borrow_mut().pointer_up(ev.pointer_id(), pos);
            if selected.is_some() {
                v.sync_overlay();
            }
        }),
    )?);

    out.push(Listener::typed(
        &target,
        "pointercancel",
        bound(viewer, |v, ev: web::PointerEvent| {
            v.session.borrow_mut().pointer_cancel(ev.pointer_id());
        }),
    )?);

    out.push(Listener::typed(
        &target,
        "pointerleave",
        bound(viewer, |v, _ev: web::PointerEvent| {
            v.session.borrow_mut().pointer_leave();
        }),
    )?);

    // non-passive so the page does not scroll while zooming
    out.push(Listener::active(
        &target,
        "wheel",
        bound(viewer, |v, ev: web::Event| {
            let Ok(ev) = ev.dyn_into::<web::WheelEvent>() else {
                return;
            };
            ev.prevent_default();
            v.session.borrow_mut().wheel(ev.delta_y() as f32);
        }),
    )?);

    Ok(())
}
