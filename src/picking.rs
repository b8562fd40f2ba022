use crate::camera::{OrbitCamera, Viewport};
use crate::constants::{MARKER_RADIUS, MIN_PICK_RADIUS_PX};
use crate::tour::Tour;
use crate::visuals::MarkerVisual;
use glam::Vec2;
use smallvec::SmallVec;

/// A marker's footprint on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMarker {
    /// Index into the tour's hotspot list.
    pub hotspot: usize,
    pub center: Vec2,
    pub radius: f32,
}

pub type ScreenMarkers = SmallVec<[ScreenMarker; 8]>;

/// Which marker, if any, lies under `pointer`. Overlapping hits go to the
/// marker whose center is closest.
pub fn hit_test(markers: &[ScreenMarker], pointer: Vec2) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for m in markers {
        let d = m.center.distance(pointer);
        if d > m.radius {
            continue;
        }
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((m.hotspot, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Project every hotspot that is in front of the camera. `visuals` holds the
/// current per-marker scale, parallel to `tour.hotspots`.
pub fn project_markers(
    camera: &OrbitCamera,
    viewport: Viewport,
    tour: &Tour,
    visuals: &[MarkerVisual],
) -> ScreenMarkers {
    let focal = camera.focal_px(viewport);
    tour.hotspots
        .iter()
        .enumerate()
        .filter_map(|(i, h)| {
            let p = camera.project(h.position(), viewport)?;
            let scale = visuals.get(i).map(|v| v.core_scale).unwrap_or(1.0);
            let radius = (MARKER_RADIUS * scale * focal / p.depth).max(MIN_PICK_RADIUS_PX);
            Some(ScreenMarker {
                hotspot: i,
                center: p.screen,
                radius,
            })
        })
        .collect()
}
