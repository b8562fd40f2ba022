use crate::constants::*;
use crate::interaction::InteractionState;
use crate::tour::Tour;
use smallvec::SmallVec;

/// How one hotspot marker should look this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerVisual {
    /// Rotation about the marker's vertical axis, radians.
    pub spin: f32,
    pub core_scale: f32,
    pub core_color: [f32; 4],
    pub glow_scale: f32,
    pub glow_color: [f32; 4],
    pub hovered: bool,
}

pub type MarkerVisuals = SmallVec<[MarkerVisual; 8]>;

#[inline]
fn rgba(rgb: [f32; 3], a: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], a]
}

/// Marker visuals as a pure function of elapsed time and interaction state,
/// parallel to `tour.hotspots`.
pub fn marker_visuals(elapsed_sec: f32, state: &InteractionState, tour: &Tour) -> MarkerVisuals {
    let t = elapsed_sec.max(0.0);
    let spin = t * MARKER_SPIN_RATE;
    let pulse = 1.0 + GLOW_PULSE_AMPLITUDE * (t * GLOW_PULSE_RATE).sin();
    tour.hotspots
        .iter()
        .map(|h| {
            let hovered = state.is_hovered(&h.id);
            let (core_scale, color, glow) = if hovered {
                (HOVER_SCALE, MARKER_HOVER_COLOR, GLOW_SCALE_HOVERED)
            } else {
                (1.0, MARKER_COLOR, GLOW_SCALE)
            };
            MarkerVisual {
                spin,
                core_scale,
                core_color: rgba(color, MARKER_OPACITY),
                glow_scale: glow * pulse,
                glow_color: rgba(MARKER_COLOR, GLOW_OPACITY),
                hovered,
            }
        })
        .collect()
}
