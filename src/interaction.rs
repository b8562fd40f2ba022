//! Hover/selection state machine for hotspots.
//!
//! Hover and selection are tracked independently: hover always follows the
//! pointer target, while a selection stays put until it is dismissed. The
//! only way to change either is through the `on_*` operations below.

use crate::tour::{Hotspot, Tour};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
    hovered: Option<String>,
    selected: Option<Hotspot>,
}

/// Coarse view of the state, for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase<'a> {
    Idle,
    Hovering(&'a str),
    Selected {
        hotspot: &'a str,
        hovering: Option<&'a str>,
    },
}

impl InteractionState {
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn selected(&self) -> Option<&Hotspot> {
        self.selected.as_ref()
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }

    pub fn phase(&self) -> Phase<'_> {
        match (&self.selected, self.hovered.as_deref()) {
            (Some(h), hovering) => Phase::Selected {
                hotspot: h.id.as_str(),
                hovering,
            },
            (None, Some(id)) => Phase::Hovering(id),
            (None, None) => Phase::Idle,
        }
    }

    pub fn on_hover_enter(&mut self, id: &str) {
        if self.hovered.as_deref() != Some(id) {
            self.hovered = Some(id.to_owned());
        }
    }

    /// A leave for anything other than the hovered marker is stale and ignored.
    pub fn on_hover_leave(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    /// Select by id. Ids the tour does not know leave the state untouched.
    /// Returns whether the selection was applied.
    pub fn on_select(&mut self, tour: &Tour, id: &str) -> bool {
        match tour.hotspot(id) {
            Some(h) => {
                if self.selected.as_ref().map(|s| s.id.as_str()) != Some(id) {
                    log::info!("[hotspot] selected {}", id);
                    self.selected = Some(h.clone());
                }
                true
            }
            None => {
                log::warn!(
                    "[hotspot] select for unknown id `{}` in tour `{}` ignored",
                    id,
                    tour.id
                );
                false
            }
        }
    }

    pub fn on_dismiss(&mut self) {
        if let Some(h) = self.selected.take() {
            log::info!("[hotspot] dismissed {}", h.id);
        }
    }

    /// Forget hover and selection, e.g. when the pointer leaves the viewer
    /// for good on unmount.
    pub fn reset(&mut self) {
        self.hovered = None;
        self.selected = None;
    }
}
