/// Keyboard shortcuts understood by the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Orbit by whole keyboard steps; positive yaw turns left, positive pitch
    /// looks up.
    Orbit { yaw: i8, pitch: i8 },
    ZoomIn,
    ZoomOut,
    ResetView,
    ToggleFullscreen,
    ToggleAudio,
    Dismiss,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" => Some(KeyAction::Orbit { yaw: 1, pitch: 0 }),
        "ArrowRight" => Some(KeyAction::Orbit { yaw: -1, pitch: 0 }),
        "ArrowUp" => Some(KeyAction::Orbit { yaw: 0, pitch: 1 }),
        "ArrowDown" => Some(KeyAction::Orbit { yaw: 0, pitch: -1 }),
        "+" | "=" => Some(KeyAction::ZoomIn),
        "-" | "_" => Some(KeyAction::ZoomOut),
        "r" | "R" => Some(KeyAction::ResetView),
        "f" | "F" | "Enter" => Some(KeyAction::ToggleFullscreen),
        "m" | "M" => Some(KeyAction::ToggleAudio),
        "Escape" => Some(KeyAction::Dismiss),
        _ => None,
    }
}

/// Whether the focused element already owns `key`: text entry takes every
/// key, and links and buttons activate on Enter.
pub fn target_keeps_key(tag: Option<&str>, content_editable: bool, key: &str) -> bool {
    if content_editable {
        return true;
    }
    match tag {
        Some("INPUT" | "TEXTAREA" | "SELECT") => true,
        Some("BUTTON" | "A") => key == "Enter",
        _ => false,
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{handle_keydown, wire_keydown};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{key_action, target_keeps_key};
    use crate::dom::Listener;
    use crate::events::bound;
    use crate::mount::Mounted;
    use crate::session::ControlEffect;
    use std::rc::Rc;
    use wasm_bindgen::JsValue;
    use web_sys as web;

    /// Shortcuts are scoped to the viewer: the container is focusable and
    /// only keys pressed while focus is inside it reach the session.
    pub fn wire_keydown(viewer: &Rc<Mounted>, out: &mut Vec<Listener>) -> Result<(), JsValue> {
        let container = &viewer.dom.container;
        container.set_tab_index(0);
        out.push(Listener::typed(
            container.as_ref(),
            "keydown",
            bound(viewer, |v, ev: web::KeyboardEvent| handle_keydown(&ev, v)),
        )?);
        Ok(())
    }

    pub fn handle_keydown(ev: &web::KeyboardEvent, viewer: &Rc<Mounted>) {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let key = ev.key();
        let target = ev
            .target()
            .and_then(|t| wasm_bindgen::JsCast::dyn_into::<web::HtmlElement>(t).ok());
        let tag = target.as_ref().map(|el| el.tag_name());
        let editable = target.as_ref().is_some_and(|el| el.is_content_editable());
        if target_keeps_key(tag.as_deref(), editable, &key) {
            return;
        }
        let Some(action) = key_action(&key) else {
            return;
        };
        let effect = viewer.session.borrow_mut().key(action);
        match effect {
            ControlEffect::Fullscreen(req) => crate::fullscreen::request(viewer, req),
            ControlEffect::AudioToggled(enabled) => viewer.apply_audio_enabled(enabled),
            ControlEffect::Dismissed => viewer.after_dismiss(),
            ControlEffect::Camera => {}
            // nothing applied; leave the key to the page
            ControlEffect::None => return,
        }
        ev.prevent_default();
    }
}
