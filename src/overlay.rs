//! The viewer's HTML chrome: canvas, labels, hotspot panel, control buttons
//! and the tour info / instructions panels. Everything is created under one
//! container so unmounting is a single `remove()`.

use crate::assets::PanoramaStatus;
use crate::constants::{FALLBACK_TEXT, LOADING_TEXT};
use crate::content::{Affordance, OverlayBody, OverlayContent};
use crate::dom::{self, create, set_visible};
use crate::session::LabelPlacement;
use crate::tour::Tour;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const CONTAINER_STYLE: &str =
    "position:relative;width:100%;height:100%;overflow:hidden;outline:none;background:#05070b;color:#e6edf7;font:14px system-ui,sans-serif";
const CANVAS_STYLE: &str =
    "display:block;width:100%;height:100%;touch-action:none;cursor:grab";
const GLASS: &str =
    "background:rgba(10,14,24,0.72);border:1px solid rgba(80,110,150,0.35);border-radius:8px;backdrop-filter:blur(6px)";
const LABEL_STYLE: &str =
    "position:absolute;left:0;top:0;padding:2px 8px;font-size:12px;font-weight:500;white-space:nowrap;pointer-events:none;user-select:none";

pub struct ViewerDom {
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    loading: web::HtmlElement,
    labels: Vec<web::HtmlElement>,
    panel: web::HtmlElement,
    panel_title: web::HtmlElement,
    panel_description: web::HtmlElement,
    panel_text: web::HtmlElement,
    panel_media: web::HtmlElement,
    media_heading: web::HtmlElement,
    media_slot: web::HtmlElement,
    pub play_button: web::HtmlButtonElement,
    pub close_button: web::HtmlButtonElement,
    pub mute_button: web::HtmlButtonElement,
    pub reset_button: web::HtmlButtonElement,
    pub fullscreen_button: web::HtmlButtonElement,
    pub exit_button: Option<web::HtmlButtonElement>,
}

fn styled(
    document: &web::Document,
    tag: &str,
    class: &str,
    style: &str,
) -> Result<web::HtmlElement, JsValue> {
    let el = create(document, tag, class)?;
    el.set_attribute("style", style)?;
    Ok(el)
}

fn button(
    document: &web::Document,
    class: &str,
    text: &str,
    title: &str,
) -> Result<web::HtmlButtonElement, JsValue> {
    let el: web::HtmlButtonElement = create(document, "button", class)?.dyn_into()?;
    el.set_type("button");
    el.set_text_content(Some(text));
    if !title.is_empty() {
        el.set_title(title);
        el.set_attribute("aria-label", title)?;
    }
    el.set_attribute(
        "style",
        &format!("{GLASS};color:inherit;padding:6px 10px;cursor:pointer;font:inherit"),
    )?;
    Ok(el)
}

fn text(document: &web::Document, tag: &str, style: &str, content: &str) -> Result<web::HtmlElement, JsValue> {
    let el = styled(document, tag, "", style)?;
    el.set_text_content(Some(content));
    Ok(el)
}

impl ViewerDom {
    /// Build the chrome inside `root`. The exit button only exists when the
    /// host supplied a close callback.
    pub fn build(root: &web::Element, tour: &Tour, with_exit: bool) -> Result<Self, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;

        let container = styled(&document, "div", "pv-viewer", CONTAINER_STYLE)?;
        let canvas: web::HtmlCanvasElement = create(&document, "canvas", "pv-canvas")?.dyn_into()?;
        canvas.set_attribute("style", CANVAS_STYLE)?;
        container.append_child(&canvas)?;

        let loading = text(
            &document,
            "div",
            &format!("position:absolute;left:50%;top:50%;transform:translate(-50%,-50%);padding:8px 14px;{GLASS}"),
            LOADING_TEXT,
        )?;
        container.append_child(&loading)?;

        let mut labels = Vec::with_capacity(tour.hotspots.len());
        for h in &tour.hotspots {
            let label = styled(&document, "div", "pv-label", &format!("{LABEL_STYLE};{GLASS}"))?;
            label.set_text_content(Some(&h.title));
            set_visible(&label, false);
            container.append_child(&label)?;
            labels.push(label);
        }

        // control buttons, top right
        let controls = styled(
            &document,
            "div",
            "pv-controls",
            "position:absolute;top:16px;right:16px;display:flex;flex-direction:column;gap:8px",
        )?;
        let mute_button = button(&document, "pv-mute", "Mute", "Mute Audio")?;
        let reset_button = button(&document, "pv-reset", "Reset", "Reset View")?;
        let fullscreen_button = button(&document, "pv-fullscreen", "Fullscreen", "Toggle Fullscreen")?;
        controls.append_child(&mute_button)?;
        controls.append_child(&reset_button)?;
        controls.append_child(&fullscreen_button)?;
        container.append_child(&controls)?;

        // tour info, top left
        let info = styled(
            &document,
            "div",
            "pv-tour-info",
            &format!("position:absolute;top:16px;left:16px;max-width:24rem;padding:16px;{GLASS}"),
        )?;
        info.append_child(&text(&document, "h3", "margin:0 0 8px;font-size:18px", &tour.title)?)?;
        info.append_child(&text(&document, "p", "margin:0 0 12px;opacity:0.75", &tour.description)?)?;
        let meta = styled(&document, "div", "", "display:flex;gap:16px;font-size:12px;opacity:0.75")?;
        meta.append_child(&text(&document, "span", "", &format!("Duration: {}", tour.duration))?)?;
        meta.append_child(&text(&document, "span", "", &format!("Rating: {}★", tour.rating))?)?;
        info.append_child(&meta)?;
        container.append_child(&info)?;

        // instructions, bottom left
        let help = styled(
            &document,
            "div",
            "pv-instructions",
            &format!("position:absolute;bottom:16px;left:16px;padding:12px;font-size:12px;opacity:0.85;{GLASS}"),
        )?;
        for line in [
            "🖱️ Click & drag to look around",
            "🎯 Click blue markers for more info",
            "🔍 Scroll to zoom in/out",
        ] {
            help.append_child(&text(&document, "p", "margin:2px 0", line)?)?;
        }
        container.append_child(&help)?;

        let exit_button = if with_exit {
            let b = button(&document, "pv-exit", "Exit VR Tour", "")?;
            let wrap = styled(
                &document,
                "div",
                "",
                "position:absolute;top:16px;left:50%;transform:translateX(-50%)",
            )?;
            b.style().set_property("background", "#dc2626")?;
            wrap.append_child(&b)?;
            container.append_child(&wrap)?;
            Some(b)
        } else {
            None
        };

        // hotspot details, centered
        let panel = styled(
            &document,
            "div",
            "pv-hotspot-panel",
            &format!("position:absolute;left:50%;top:50%;transform:translate(-50%,-50%);max-width:28rem;padding:24px;{GLASS}"),
        )?;
        let header = styled(
            &document,
            "div",
            "",
            "display:flex;align-items:flex-start;justify-content:space-between;gap:12px;margin-bottom:16px",
        )?;
        let panel_title = text(&document, "h4", "margin:0;font-size:18px", "")?;
        let close_button = button(&document, "pv-close", "✕", "Close")?;
        header.append_child(&panel_title)?;
        header.append_child(&close_button)?;
        panel.append_child(&header)?;
        let panel_description = text(&document, "p", "margin:0 0 16px;opacity:0.75", "")?;
        panel.append_child(&panel_description)?;
        let panel_text = text(&document, "p", "margin:0 0 16px;font-size:13px", "")?;
        panel.append_child(&panel_text)?;
        let panel_media = styled(&document, "div", "pv-media", "display:flex;flex-direction:column;gap:8px")?;
        let media_heading = text(&document, "p", "margin:0;font-size:13px;font-weight:600", "")?;
        let play_button = button(&document, "pv-play", "", "")?;
        let media_slot = styled(&document, "div", "pv-media-slot", "")?;
        panel_media.append_child(&media_heading)?;
        panel_media.append_child(&play_button)?;
        panel_media.append_child(&media_slot)?;
        panel.append_child(&panel_media)?;
        set_visible(&panel, false);
        container.append_child(&panel)?;

        root.append_child(&container)?;
        dom::sync_canvas_backing_size(&canvas);

        Ok(Self {
            container,
            canvas,
            loading,
            labels,
            panel,
            panel_title,
            panel_description,
            panel_text,
            panel_media,
            media_heading,
            media_slot,
            play_button,
            close_button,
            mute_button,
            reset_button,
            fullscreen_button,
            exit_button,
        })
    }

    pub fn set_status(&self, status: &PanoramaStatus) {
        match status {
            PanoramaStatus::Loading => {
                self.loading.set_text_content(Some(LOADING_TEXT));
                set_visible(&self.loading, true);
            }
            PanoramaStatus::Ready { .. } => set_visible(&self.loading, false),
            PanoramaStatus::Failed(_) => {
                self.loading.set_text_content(Some(FALLBACK_TEXT));
                set_visible(&self.loading, true);
            }
        }
    }

    /// Position labels from canvas pixels. `hovered` gets the highlight.
    pub fn place_labels(&self, placements: &[LabelPlacement], hovered: Option<usize>) {
        let bw = self.canvas.width().max(1) as f32;
        let bh = self.canvas.height().max(1) as f32;
        let sx = self.canvas.client_width() as f32 / bw;
        let sy = self.canvas.client_height() as f32 / bh;
        for p in placements {
            let Some(label) = self.labels.get(p.hotspot) else {
                continue;
            };
            match p.screen {
                Some(s) => {
                    let style = label.style();
                    _ = style.set_property(
                        "transform",
                        &format!("translate({:.1}px,{:.1}px) translate(-50%,-50%)", s.x * sx, s.y * sy),
                    );
                    _ = style.set_property(
                        "color",
                        if hovered == Some(p.hotspot) { "#ff6b35" } else { "" },
                    );
                    set_visible(label, true);
                }
                None => set_visible(label, false),
            }
        }
    }

    pub fn set_cursor(&self, cursor: &str) {
        _ = self.canvas.style().set_property("cursor", cursor);
    }

    pub fn show_hotspot(&self, content: &OverlayContent<'_>) {
        self.panel_title.set_text_content(Some(content.title));
        self.panel_description
            .set_text_content(Some(content.description));
        match content.body {
            OverlayBody::Text(t) => {
                self.panel_text.set_text_content(Some(t));
                set_visible(&self.panel_text, true);
                set_visible(&self.panel_media, false);
            }
            OverlayBody::Media { kind, affordance } => {
                set_visible(&self.panel_text, false);
                self.media_heading.set_text_content(Some(kind.heading()));
                self.play_button
                    .set_text_content(Some(kind.action_label()));
                let available = matches!(affordance, Affordance::Playable(_));
                self.play_button.set_disabled(!available);
                _ = self
                    .play_button
                    .style()
                    .set_property("opacity", if available { "1" } else { "0.5" });
                set_visible(&self.panel_media, true);
            }
        }
        set_visible(&self.panel, true);
    }

    pub fn hide_hotspot(&self) {
        set_visible(&self.panel, false);
        self.media_slot.set_text_content(None);
    }

    /// Where a playing video element is attached.
    pub fn media_slot(&self) -> &web::HtmlElement {
        &self.media_slot
    }

    pub fn set_mute_button(&self, audio_enabled: bool) {
        let (label, title) = if audio_enabled {
            ("Mute", "Mute Audio")
        } else {
            ("Unmute", "Unmute Audio")
        };
        self.mute_button.set_text_content(Some(label));
        self.mute_button.set_title(title);
        _ = self.mute_button.set_attribute("aria-label", title);
    }

    pub fn set_fullscreen_button(&self, active: bool) {
        self.fullscreen_button
            .set_text_content(Some(if active { "Exit Fullscreen" } else { "Fullscreen" }));
    }

    pub fn remove(&self) {
        self.container.remove();
    }
}
