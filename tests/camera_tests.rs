// Host-side tests for the orbit camera: input bounds, reset and projection.

use glam::Vec3;
use panorama_viewer::camera::{OrbitCamera, Viewport};
use panorama_viewer::config::ViewerConfig;
use panorama_viewer::constants::ZOOM_STEP;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_6, PI};

const VP: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn pitch_stays_within_bounds_after_any_drag_sequence() {
    let cfg = ViewerConfig::default();
    let mut cam = OrbitCamera::new(&cfg);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        let dx: f32 = rng.gen_range(-500.0..500.0);
        let dy: f32 = rng.gen_range(-500.0..500.0);
        cam.drag(dx, dy, VP);
        assert!(cam.pitch() >= cfg.min_pitch_rad() - 1e-6);
        assert!(cam.pitch() <= cfg.max_pitch_rad() + 1e-6);
        assert!(cam.yaw() > -PI - 1e-5 && cam.yaw() <= PI + 1e-5);
    }
}

#[test]
fn zoom_stays_within_bounds_after_any_zoom_sequence() {
    let cfg = ViewerConfig::default();
    let mut cam = OrbitCamera::new(&cfg);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2000 {
        match rng.gen_range(0..3) {
            0 => cam.wheel(rng.gen_range(-300.0..300.0)),
            1 => cam.pinch(rng.gen_range(1.0..400.0), rng.gen_range(1.0..400.0)),
            _ => cam.scale_distance(rng.gen_range(0.01..100.0)),
        }
        assert!(cam.zoom() >= cfg.min_zoom && cam.zoom() <= cfg.max_zoom);
    }
}

#[test]
fn custom_pitch_limits_are_honoured() {
    let cfg = ViewerConfig {
        min_pitch: -30.0,
        max_pitch: 30.0,
        ..ViewerConfig::default()
    };
    let mut cam = OrbitCamera::new(&cfg);
    cam.drag(0.0, 10_000.0, VP);
    assert!(approx(cam.pitch(), 30f32.to_radians()));
    cam.drag(0.0, -20_000.0, VP);
    assert!(approx(cam.pitch(), (-30f32).to_radians()));
}

#[test]
fn drag_rate_scales_with_viewport_height_and_sensitivity() {
    let mut cam = OrbitCamera::new(&ViewerConfig::default());
    // 2π / 600 px × 0.5 sensitivity × 100 px = π/6
    cam.drag(100.0, 0.0, VP);
    assert!(approx(cam.yaw(), FRAC_PI_6));
    assert!(approx(cam.pitch(), 0.0));
}

#[test]
fn wheel_direction_and_step() {
    let cfg = ViewerConfig {
        initial_zoom: 1.0,
        ..ViewerConfig::default()
    };
    let mut cam = OrbitCamera::new(&cfg);
    cam.wheel(-120.0);
    assert!(approx(cam.zoom(), ZOOM_STEP));
    cam.wheel(120.0);
    cam.wheel(120.0);
    assert!(approx(cam.zoom(), 1.0 / ZOOM_STEP));
    cam.wheel(0.0);
    cam.wheel(f32::NAN);
    assert!(approx(cam.zoom(), 1.0 / ZOOM_STEP));
}

#[test]
fn zoom_in_at_minimum_is_clamped() {
    let mut cam = OrbitCamera::new(&ViewerConfig::default());
    assert!(approx(cam.zoom(), 0.1));
    for _ in 0..10 {
        cam.wheel(-1.0);
    }
    assert!(approx(cam.zoom(), 0.1));
}

#[test]
fn reset_returns_to_canonical_view() {
    let mut cam = OrbitCamera::new(&ViewerConfig::default());
    cam.drag(250.0, -80.0, VP);
    cam.wheel(10.0);
    cam.wheel(10.0);
    cam.reset();
    assert_eq!(cam, OrbitCamera::new(&ViewerConfig::default()));
}

#[test]
fn non_finite_orientation_is_ignored() {
    let mut cam = OrbitCamera::new(&ViewerConfig::default());
    cam.set_orientation(0.5, 0.25);
    cam.set_orientation(f32::NAN, f32::INFINITY);
    assert!(approx(cam.yaw(), 0.5));
    assert!(approx(cam.pitch(), 0.25));
}

#[test]
fn point_straight_ahead_projects_to_canvas_center() {
    let mut cam = OrbitCamera::new(&ViewerConfig::default());
    cam.set_orientation(1.0, 0.3);
    let ahead = cam.forward() * 10.0;
    let p = cam.project(ahead, VP).expect("in front of the camera");
    assert!((p.screen.x - 400.0).abs() < 0.01);
    assert!((p.screen.y - 300.0).abs() < 0.01);
    assert!((p.depth - 10.1).abs() < 1e-3);
}

#[test]
fn screen_axes_follow_world_axes_at_home() {
    let cam = OrbitCamera::new(&ViewerConfig::default());
    let right = cam.project(Vec3::new(1.0, 0.0, -10.0), VP).unwrap();
    let up = cam.project(Vec3::new(0.0, 1.0, -10.0), VP).unwrap();
    assert!(right.screen.x > 400.0);
    assert!(up.screen.y < 300.0);
}

#[test]
fn point_behind_camera_does_not_project() {
    let cam = OrbitCamera::new(&ViewerConfig::default());
    assert!(cam.project(Vec3::new(0.0, 0.0, 5.0), VP).is_none());
}
