use crate::config::ViewerConfig;
use crate::constants::{CAMERA_ZFAR, CAMERA_ZNEAR, ZOOM_STEP};
use glam::{Mat4, Vec2, Vec3, Vec4};
use std::f32::consts::{PI, TAU};

/// Canvas size in backing-store pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// A point projected onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    /// Distance along the view axis.
    pub depth: f32,
}

/// Camera orbiting the sphere center. It only rotates (yaw/pitch) and dollies
/// (distance); it never translates the orbit target.
///
/// Yaw 0 / pitch 0 looks down -Z. Positive yaw turns left, positive pitch
/// looks up.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    fovy_radians: f32,
    min_pitch: f32,
    max_pitch: f32,
    min_distance: f32,
    max_distance: f32,
    drag_sensitivity: f32,
    zoom_speed: f32,
    home_distance: f32,
}

impl OrbitCamera {
    pub fn new(config: &ViewerConfig) -> Self {
        let home_distance = config.clamped_initial_zoom();
        Self {
            yaw: 0.0,
            pitch: 0.0_f32.clamp(config.min_pitch_rad(), config.max_pitch_rad()),
            distance: home_distance,
            fovy_radians: config.fov.to_radians(),
            min_pitch: config.min_pitch_rad(),
            max_pitch: config.max_pitch_rad(),
            min_distance: config.min_zoom,
            max_distance: config.max_zoom,
            drag_sensitivity: config.drag_sensitivity,
            zoom_speed: config.zoom_speed,
            home_distance,
        }
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current zoom level, expressed as eye distance from the center.
    #[inline]
    pub fn zoom(&self) -> f32 {
        self.distance
    }

    #[inline]
    pub fn fovy_radians(&self) -> f32 {
        self.fovy_radians
    }

    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        if yaw.is_finite() {
            self.yaw = wrap_angle(yaw);
        }
        if pitch.is_finite() {
            self.pitch = pitch.clamp(self.min_pitch, self.max_pitch);
        }
    }

    /// Rotate by an explicit angle pair (radians).
    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.set_orientation(self.yaw + d_yaw, self.pitch + d_pitch);
    }

    /// Apply a pointer drag of `(dx, dy)` pixels. The panorama follows the
    /// pointer: dragging right turns the view left, dragging down looks up.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport: Viewport) {
        let rad_per_px = TAU / viewport.height * self.drag_sensitivity;
        self.rotate(dx * rad_per_px, dy * rad_per_px);
    }

    /// Wheel input; negative `delta_y` (scroll up) zooms in.
    pub fn wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return;
        }
        let step = ZOOM_STEP.powf(self.zoom_speed);
        if delta_y < 0.0 {
            self.scale_distance(step);
        } else {
            self.scale_distance(1.0 / step);
        }
    }

    /// Pinch input: the ratio of the previous to the current finger spread.
    pub fn pinch(&mut self, previous_spread: f32, current_spread: f32) {
        if previous_spread > 0.0 && current_spread > 0.0 {
            self.scale_distance(previous_spread / current_spread);
        }
    }

    pub fn scale_distance(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
        }
    }

    /// Back to the canonical orientation and zoom.
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0_f32.clamp(self.min_pitch, self.max_pitch);
        self.distance = self.home_distance;
    }

    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    /// The eye sits opposite the view direction, looking through the center.
    pub fn eye(&self) -> Vec3 {
        -self.forward() * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, viewport.aspect(), CAMERA_ZNEAR, CAMERA_ZFAR)
    }

    pub fn view_proj(&self, viewport: Viewport) -> Mat4 {
        self.projection_matrix(viewport) * self.view_matrix()
    }

    /// Pixels per world unit at unit depth.
    #[inline]
    pub fn focal_px(&self, viewport: Viewport) -> f32 {
        viewport.height * 0.5 / (self.fovy_radians * 0.5).tan()
    }

    /// Project a world point to canvas pixels. `None` when the point is
    /// behind the near plane.
    pub fn project(&self, world: Vec3, viewport: Viewport) -> Option<Projected> {
        let view_pos = self.view_matrix().transform_point3(world);
        let depth = -view_pos.z;
        if depth <= CAMERA_ZNEAR {
            return None;
        }
        let clip = self.projection_matrix(viewport) * Vec4::new(view_pos.x, view_pos.y, view_pos.z, 1.0);
        let ndc = clip.truncate() / clip.w;
        let screen = Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.width,
            (1.0 - ndc.y) * 0.5 * viewport.height,
        );
        Some(Projected { screen, depth })
    }
}

#[inline]
fn wrap_angle(a: f32) -> f32 {
    let w = (a + PI).rem_euclid(TAU) - PI;
    if w <= -PI {
        w + TAU
    } else {
        w
    }
}
