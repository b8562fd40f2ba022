//! One mounted viewer: owns the session, the DOM chrome, the GPU state and
//! every listener, and tears all of it down on unmount.

use crate::audio::MediaPlayer;
use crate::config::ViewerConfig;
use crate::content::{Affordance, OverlayBody};
use crate::dom::{self, Listener};
use crate::error::AssetError;
use crate::events;
use crate::frame::FrameLoop;
use crate::overlay::ViewerDom;
use crate::render::GpuState;
use crate::session::ViewerSession;
use crate::tour::Tour;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct Mounted {
    pub session: RefCell<ViewerSession>,
    pub dom: ViewerDom,
    gpu: RefCell<Option<GpuState>>,
    media: RefCell<MediaPlayer>,
    listeners: RefCell<Vec<Listener>>,
    frame_loop: RefCell<Option<FrameLoop>>,
    pending_image: RefCell<Option<web::HtmlImageElement>>,
    on_close: Option<js_sys::Function>,
    mounted_at: Instant,
    rendered_selection: RefCell<Option<String>>,
}

async fn init_gpu(canvas: &web::HtmlCanvasElement, tour: &Tour) -> Option<GpuState> {
    let centers = tour.hotspots.iter().map(|h| h.position()).collect();
    match GpuState::new(canvas, centers).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Build a viewer inside the element with id `root_id`.
pub async fn mount(
    root_id: &str,
    tour: Tour,
    config: ViewerConfig,
    on_close: Option<js_sys::Function>,
) -> anyhow::Result<Rc<Mounted>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| anyhow::anyhow!("no element with id {root_id:?}"))?;
    let session = ViewerSession::new(tour, config)?;
    let dom = ViewerDom::build(&root, session.tour(), on_close.is_some())
        .map_err(|e| anyhow::anyhow!("building viewer DOM: {:?}", e))?;
    dom.set_status(session.panorama());
    dom.set_mute_button(session.controls().audio_enabled());

    // Without WebGPU the chrome still works; the scene just stays dark.
    let gpu = init_gpu(&dom.canvas, session.tour()).await;

    let viewer = Rc::new(Mounted {
        session: RefCell::new(session),
        dom,
        gpu: RefCell::new(gpu),
        media: RefCell::new(MediaPlayer::default()),
        listeners: RefCell::new(Vec::new()),
        frame_loop: RefCell::new(None),
        pending_image: RefCell::new(None),
        on_close,
        mounted_at: Instant::now(),
        rendered_selection: RefCell::new(None),
    });

    match events::wire_all(&viewer) {
        Ok(listeners) => *viewer.listeners.borrow_mut() = listeners,
        Err(e) => {
            viewer.unmount();
            anyhow::bail!("attaching listeners: {:?}", e);
        }
    }
    Mounted::spawn_panorama_load(&viewer);

    let weak = Rc::downgrade(&viewer);
    *viewer.frame_loop.borrow_mut() = Some(FrameLoop::start(move || {
        weak.upgrade().map(|v| v.frame()).unwrap_or(false)
    }));
    Ok(viewer)
}

impl Mounted {
    fn spawn_panorama_load(viewer: &Rc<Self>) {
        let (ticket, url) = {
            let mut session = viewer.session.borrow_mut();
            let ticket = session.begin_panorama_load();
            (ticket, session.tour().image.clone())
        };
        let img = match web::HtmlImageElement::new() {
            Ok(img) => img,
            Err(e) => {
                let err = AssetError::Decode {
                    url,
                    reason: format!("{:?}", e),
                };
                viewer
                    .session
                    .borrow_mut()
                    .finish_panorama_load(ticket, Err(err));
                viewer.dom.set_status(viewer.session.borrow().panorama());
                return;
            }
        };
        // WebGPU refuses to sample tainted cross-origin pixels
        img.set_cross_origin(Some("anonymous"));
        img.set_src(&url);
        *viewer.pending_image.borrow_mut() = Some(img.clone());

        let weak: Weak<Self> = Rc::downgrade(viewer);
        spawn_local(async move {
            let decoded = JsFuture::from(img.decode()).await;
            let Some(viewer) = weak.upgrade() else {
                return;
            };
            if !viewer.session.borrow().is_load_pending(ticket) {
                log::info!("[asset] ignoring late panorama {}", url);
                return;
            }
            viewer.pending_image.borrow_mut().take();
            let result = match decoded {
                Ok(_) => match viewer.gpu.borrow_mut().as_mut() {
                    Some(gpu) => gpu.upload_panorama(&img),
                    None => Ok((img.natural_width(), img.natural_height())),
                },
                Err(e) => Err(AssetError::Decode {
                    url,
                    reason: format!("{:?}", e),
                }),
            };
            let applied = viewer
                .session
                .borrow_mut()
                .finish_panorama_load(ticket, result);
            if applied {
                viewer.dom.set_status(viewer.session.borrow().panorama());
            }
        });
    }

    /// One animation frame. Returns `false` once unmounted.
    fn frame(&self) -> bool {
        if !self.session.borrow().is_mounted() {
            return false;
        }
        let width = self.dom.canvas.width();
        let height = self.dom.canvas.height();
        let elapsed = self.mounted_at.elapsed().as_secs_f32();
        let (view, dragging) = {
            let mut session = self.session.borrow_mut();
            session.set_viewport(width as f32, height as f32);
            (session.frame(elapsed), session.is_dragging())
        };

        if let Some(gpu) = self.gpu.borrow_mut().as_mut() {
            gpu.resize_if_needed(width, height);
            match gpu.render(&view) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            }
        }

        self.dom.place_labels(&view.labels, view.hovered);
        self.dom.set_cursor(if dragging {
            "grabbing"
        } else if view.hovered.is_some() {
            "pointer"
        } else {
            "grab"
        });
        self.sync_overlay();
        true
    }

    /// Bring the hotspot panel in line with the current selection. Changing
    /// or clearing the selection stops any playing media.
    pub fn sync_overlay(&self) {
        let session = self.session.borrow();
        let selected = session.interaction().selected().map(|h| h.id.as_str());
        let mut rendered = self.rendered_selection.borrow_mut();
        if rendered.as_deref() == selected {
            return;
        }
        self.media.borrow_mut().stop();
        match session.overlay() {
            Some(content) => self.dom.show_hotspot(&content),
            None => self.dom.hide_hotspot(),
        }
        *rendered = selected.map(str::to_owned);
    }

    pub fn after_dismiss(&self) {
        self.sync_overlay();
    }

    pub fn apply_audio_enabled(&self, enabled: bool) {
        self.dom.set_mute_button(enabled);
        self.media.borrow().set_muted(!enabled);
    }

    pub fn play_selected_media(&self) {
        let (kind, url, muted) = {
            let session = self.session.borrow();
            let Some(content) = session.overlay() else {
                return;
            };
            match content.body {
                OverlayBody::Media {
                    kind,
                    affordance: Affordance::Playable(url),
                } => (kind, url.to_owned(), !session.controls().audio_enabled()),
                _ => return,
            }
        };
        self.media
            .borrow_mut()
            .play(kind, &url, muted, self.dom.media_slot());
    }

    /// Run the host's close callback on a fresh task, so the host may unmount
    /// from inside it without dropping the click listener mid-call.
    pub fn request_close(&self) {
        let Some(cb) = self.on_close.clone() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = cb.call0(&JsValue::NULL) {
                log::warn!("[viewer] close callback threw: {:?}", e);
            }
        });
    }

    pub fn unmount(&self) {
        if !self.session.borrow().is_mounted() {
            return;
        }
        self.session.borrow_mut().unmount();
        if let Some(frame_loop) = self.frame_loop.borrow_mut().take() {
            frame_loop.stop();
        }
        self.listeners.borrow_mut().clear();
        if let Some(img) = self.pending_image.borrow_mut().take() {
            // aborts the in-flight fetch
            img.set_src("");
        }
        self.media.borrow_mut().stop();
        self.gpu.borrow_mut().take();
        self.dom.remove();
    }
}
