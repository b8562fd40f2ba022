/// Viewer chrome state that lives outside the 3D scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewControls {
    audio_enabled: bool,
    fullscreen: bool,
    pending: Option<FullscreenRequest>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

impl Default for ViewControls {
    fn default() -> Self {
        Self {
            audio_enabled: true,
            fullscreen: false,
            pending: None,
        }
    }
}

impl ViewControls {
    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    /// Returns the new value.
    pub fn toggle_audio(&mut self) -> bool {
        self.audio_enabled = !self.audio_enabled;
        log::info!("[controls] audio_enabled={}", self.audio_enabled);
        self.audio_enabled
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Flip the full-screen flag optimistically and report which platform
    /// request to issue. While a request is outstanding further toggles are
    /// ignored.
    pub fn begin_fullscreen_toggle(&mut self) -> Option<FullscreenRequest> {
        if self.pending.is_some() {
            return None;
        }
        let req = if self.fullscreen {
            FullscreenRequest::Exit
        } else {
            FullscreenRequest::Enter
        };
        self.fullscreen = !self.fullscreen;
        self.pending = Some(req);
        Some(req)
    }

    pub fn fullscreen_resolved(&mut self) {
        self.pending = None;
    }

    /// The platform refused; put the flag back.
    pub fn fullscreen_rejected(&mut self) {
        if let Some(req) = self.pending.take() {
            self.fullscreen = matches!(req, FullscreenRequest::Exit);
        }
    }

    /// Platform state changed on its own (e.g. Escape pressed).
    pub fn sync_fullscreen(&mut self, active: bool) {
        if self.pending.is_none() {
            self.fullscreen = active;
        }
    }
}
