//! Per-mount viewer state and the input/frame entry points that drive it.
//!
//! Everything here is platform independent; the browser layer forwards DOM
//! events and animation frames into a [`ViewerSession`] and renders what it
//! hands back.

use crate::assets::{AssetLoads, LoadTicket, PanoramaStatus};
use crate::camera::{OrbitCamera, Viewport};
use crate::config::ViewerConfig;
use crate::constants::{KEY_ORBIT_STEP_DEG, LABEL_OFFSET_Y};
use crate::content::{overlay_content, OverlayContent};
use crate::controls::{FullscreenRequest, ViewControls};
use crate::error::{AssetError, ViewerError};
use crate::events::keyboard::KeyAction;
use crate::input::{Gesture, PointerTracker};
use crate::interaction::InteractionState;
use crate::picking::{hit_test, project_markers};
use crate::tour::Tour;
use crate::visuals::{marker_visuals, MarkerVisuals};
use glam::{Mat4, Vec2, Vec3};

/// Where a hotspot label goes on the canvas this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub hotspot: usize,
    pub screen: Option<Vec2>,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameView {
    pub view_proj: Mat4,
    pub markers: MarkerVisuals,
    pub labels: Vec<LabelPlacement>,
    pub hovered: Option<usize>,
}

/// Side effects the browser layer has to carry out after a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEffect {
    None,
    /// The key orbited, zoomed or reset the camera.
    Camera,
    Fullscreen(FullscreenRequest),
    AudioToggled(bool),
    Dismissed,
}

pub struct ViewerSession {
    tour: Tour,
    camera: OrbitCamera,
    interaction: InteractionState,
    controls: ViewControls,
    pointer: PointerTracker,
    loads: AssetLoads,
    panorama: PanoramaStatus,
    viewport: Viewport,
    elapsed: f32,
    device_orientation: bool,
    mounted: bool,
}

impl ViewerSession {
    pub fn new(tour: Tour, config: ViewerConfig) -> Result<Self, ViewerError> {
        tour.validate()?;
        config.validate()?;
        log::info!(
            "[viewer] mount tour={} hotspots={}",
            tour.id,
            tour.hotspots.len()
        );
        Ok(Self {
            camera: OrbitCamera::new(&config),
            tour,
            interaction: InteractionState::default(),
            controls: ViewControls::default(),
            pointer: PointerTracker::default(),
            loads: AssetLoads::default(),
            panorama: PanoramaStatus::Loading,
            viewport: Viewport::new(1.0, 1.0),
            elapsed: 0.0,
            device_orientation: config.device_orientation,
            mounted: true,
        })
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn controls(&self) -> &ViewControls {
        &self.controls
    }

    pub fn panorama(&self) -> &PanoramaStatus {
        &self.panorama
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn device_orientation_enabled(&self) -> bool {
        self.device_orientation
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    // ---------------- Pointer input ----------------

    pub fn pointer_down(&mut self, id: i32, pos: Vec2) {
        if !self.mounted {
            return;
        }
        self.pointer.down(id, pos);
        self.refresh_hover(pos);
    }

    pub fn pointer_move(&mut self, id: i32, pos: Vec2) {
        if !self.mounted {
            return;
        }
        match self.pointer.moved(id, pos) {
            Gesture::Orbit { dx, dy } => self.camera.drag(dx, dy, self.viewport),
            Gesture::Pinch { previous, current } => self.camera.pinch(previous, current),
            Gesture::None => {}
        }
        self.refresh_hover(pos);
    }

    /// Release a pointer; a release that counts as a click over a marker
    /// selects it. Returns the selected hotspot id, if any.
    pub fn pointer_up(&mut self, id: i32, pos: Vec2) -> Option<String> {
        if !self.mounted {
            return None;
        }
        let click = self.pointer.up(id, pos)?;
        let hit = self.marker_at(click)?;
        let hotspot_id = self.tour.hotspots[hit].id.clone();
        self.select(&hotspot_id).then_some(hotspot_id)
    }

    pub fn pointer_cancel(&mut self, id: i32) {
        self.pointer.cancel(id);
    }

    /// The pointer left the canvas: nothing is under it any more.
    pub fn pointer_leave(&mut self) {
        self.pointer.forget_position();
        if let Some(id) = self.interaction.hovered().map(str::to_owned) {
            self.interaction.on_hover_leave(&id);
        }
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if self.mounted {
            self.camera.wheel(delta_y);
            self.camera_moved();
        }
    }

    /// Device orientation in degrees (`alpha` compass heading, `beta`
    /// front/back tilt where 90 is upright). Ignored unless enabled.
    pub fn device_orientation(&mut self, alpha: f32, beta: f32) {
        if self.mounted && self.device_orientation {
            self.camera
                .set_orientation(alpha.to_radians(), (beta - 90.0).to_radians());
            self.camera_moved();
        }
    }

    fn marker_at(&self, pos: Vec2) -> Option<usize> {
        let visuals = marker_visuals(self.elapsed, &self.interaction, &self.tour);
        let markers = project_markers(&self.camera, self.viewport, &self.tour, &visuals);
        hit_test(&markers, pos)
    }

    /// Re-run hit-testing at `pos` and emit hover enter/leave transitions.
    fn refresh_hover(&mut self, pos: Vec2) {
        let target = self
            .marker_at(pos)
            .map(|i| self.tour.hotspots[i].id.clone());
        let current = self.interaction.hovered().map(str::to_owned);
        if current == target {
            return;
        }
        if let Some(old) = current {
            self.interaction.on_hover_leave(&old);
        }
        if let Some(new) = target {
            self.interaction.on_hover_enter(&new);
        }
    }

    /// The view changed under a resting pointer; markers may have slid in or
    /// out from beneath it.
    fn camera_moved(&mut self) {
        if let Some(pos) = self.pointer.last_position() {
            self.refresh_hover(pos);
        }
    }

    // ---------------- Controller operations ----------------

    pub fn hover_enter(&mut self, id: &str) {
        self.interaction.on_hover_enter(id);
    }

    pub fn hover_leave(&mut self, id: &str) {
        self.interaction.on_hover_leave(id);
    }

    pub fn select(&mut self, id: &str) -> bool {
        self.interaction.on_select(&self.tour, id)
    }

    pub fn dismiss(&mut self) {
        self.interaction.on_dismiss();
    }

    pub fn overlay(&self) -> Option<OverlayContent<'_>> {
        self.interaction.selected().map(overlay_content)
    }

    // ---------------- Viewport controls ----------------

    pub fn toggle_audio(&mut self) -> bool {
        self.controls.toggle_audio()
    }

    pub fn begin_fullscreen_toggle(&mut self) -> Option<FullscreenRequest> {
        self.controls.begin_fullscreen_toggle()
    }

    pub fn fullscreen_resolved(&mut self) {
        self.controls.fullscreen_resolved();
    }

    pub fn fullscreen_rejected(&mut self) {
        self.controls.fullscreen_rejected();
    }

    pub fn sync_fullscreen(&mut self, active: bool) {
        self.controls.sync_fullscreen(active);
    }

    pub fn reset_view(&mut self) {
        self.camera.reset();
        self.camera_moved();
        log::info!("[viewer] view reset");
    }

    pub fn key(&mut self, action: KeyAction) -> ControlEffect {
        if !self.mounted {
            return ControlEffect::None;
        }
        let step = KEY_ORBIT_STEP_DEG.to_radians();
        match action {
            KeyAction::Orbit { yaw, pitch } => {
                self.camera.rotate(yaw as f32 * step, pitch as f32 * step);
                self.camera_moved();
                ControlEffect::Camera
            }
            KeyAction::ZoomIn => {
                self.wheel(-1.0);
                ControlEffect::Camera
            }
            KeyAction::ZoomOut => {
                self.wheel(1.0);
                ControlEffect::Camera
            }
            KeyAction::ResetView => {
                self.reset_view();
                ControlEffect::Camera
            }
            KeyAction::ToggleFullscreen => self
                .begin_fullscreen_toggle()
                .map(ControlEffect::Fullscreen)
                .unwrap_or(ControlEffect::None),
            KeyAction::ToggleAudio => ControlEffect::AudioToggled(self.toggle_audio()),
            KeyAction::Dismiss if self.interaction.selected().is_some() => {
                self.dismiss();
                ControlEffect::Dismissed
            }
            KeyAction::Dismiss => ControlEffect::None,
        }
    }

    // ---------------- Panorama asset ----------------

    pub fn begin_panorama_load(&mut self) -> LoadTicket {
        self.loads.supersede_all();
        if self.mounted {
            self.panorama = PanoramaStatus::Loading;
        }
        log::info!("[asset] loading panorama {}", self.tour.image);
        self.loads.begin()
    }

    /// Apply a finished load. Returns `false` when the result is stale or the
    /// viewer has been unmounted; the status is then left untouched.
    pub fn finish_panorama_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<(u32, u32), AssetError>,
    ) -> bool {
        if !self.loads.finish(ticket) {
            log::info!("[asset] discarded stale panorama result");
            return false;
        }
        self.panorama = match result {
            Ok((width, height)) => PanoramaStatus::Ready { width, height },
            Err(e) => {
                log::warn!("[asset] panorama unavailable, using fallback: {}", e);
                PanoramaStatus::Failed(e.to_string())
            }
        };
        true
    }

    pub fn is_load_pending(&self, ticket: LoadTicket) -> bool {
        self.loads.is_pending(ticket)
    }

    // ---------------- Frame ----------------

    /// Advance to `elapsed_sec` since mount and compute the frame. Interaction
    /// state is read once, up front, so a frame never mixes two states.
    pub fn frame(&mut self, elapsed_sec: f32) -> FrameView {
        self.elapsed = elapsed_sec.max(0.0);
        let snapshot = self.interaction.clone();
        let markers = marker_visuals(self.elapsed, &snapshot, &self.tour);
        let labels = self
            .tour
            .hotspots
            .iter()
            .enumerate()
            .map(|(i, h)| LabelPlacement {
                hotspot: i,
                screen: self
                    .camera
                    .project(h.position() + Vec3::Y * LABEL_OFFSET_Y, self.viewport)
                    .map(|p| p.screen),
            })
            .collect();
        let hovered = snapshot
            .hovered()
            .and_then(|id| self.tour.hotspot_index(id));
        FrameView {
            view_proj: self.camera.view_proj(self.viewport),
            markers,
            labels,
            hovered,
        }
    }

    // ---------------- Lifecycle ----------------

    /// Tear down: pending loads are discarded and later input is ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.loads.close();
        self.pointer.clear();
        self.interaction.reset();
        log::info!("[viewer] unmounted tour={}", self.tour.id);
    }
}
