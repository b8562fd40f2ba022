// Host-side tests for the viewer session: pointer routing, asset loads,
// keyboard effects, frames and unmount.

use glam::Vec2;
use panorama_viewer::assets::PanoramaStatus;
use panorama_viewer::catalog::default_tour;
use panorama_viewer::config::ViewerConfig;
use panorama_viewer::controls::FullscreenRequest;
use panorama_viewer::error::{AssetError, TourError, ViewerError};
use panorama_viewer::events::keyboard::KeyAction;
use panorama_viewer::session::{ControlEffect, ViewerSession};
use panorama_viewer::tour::Tour;

/// First hotspot dead ahead, second behind the camera, third off to the right.
fn tour() -> Tour {
    let mut tour = default_tour();
    tour.hotspots[0].position = [0.0, 0.0, -2.0];
    tour.hotspots[1].position = [0.0, 0.0, 5.0];
    tour.hotspots[2].position = [2.0, 0.0, -2.0];
    tour
}

fn session_with(config: ViewerConfig) -> ViewerSession {
    let mut s = ViewerSession::new(tour(), config).expect("valid tour");
    s.set_viewport(800.0, 600.0);
    s
}

fn session() -> ViewerSession {
    session_with(ViewerConfig::default())
}

const CENTER: Vec2 = Vec2::new(400.0, 300.0);

#[test]
fn click_on_a_marker_selects_it() {
    let mut s = session();
    s.pointer_down(1, CENTER);
    assert_eq!(s.interaction().hovered(), Some("h1"));
    assert_eq!(s.pointer_up(1, CENTER + Vec2::new(1.0, -1.0)), Some("h1".to_string()));
    let overlay = s.overlay().expect("panel content");
    assert_eq!(overlay.hotspot_id, "h1");
}

#[test]
fn click_on_empty_space_selects_nothing() {
    let mut s = session();
    let empty = Vec2::new(60.0, 60.0);
    s.pointer_down(1, empty);
    assert_eq!(s.pointer_up(1, empty), None);
    assert!(s.overlay().is_none());
}

#[test]
fn drag_orbits_instead_of_clicking() {
    let mut s = session();
    s.pointer_down(1, CENTER);
    s.pointer_move(1, CENTER + Vec2::new(40.0, 0.0));
    assert!(s.is_dragging());
    assert!(s.camera().yaw() > 0.0);
    assert_eq!(s.pointer_up(1, CENTER + Vec2::new(40.0, 0.0)), None);
    assert!(!s.is_dragging());
    assert!(s.interaction().selected().is_none());
}

#[test]
fn pointer_movement_emits_hover_enter_and_leave() {
    let mut s = session();
    s.pointer_move(1, CENTER);
    assert_eq!(s.interaction().hovered(), Some("h1"));
    s.pointer_move(1, Vec2::new(20.0, 20.0));
    assert_eq!(s.interaction().hovered(), None);
    s.pointer_move(1, CENTER);
    s.pointer_leave();
    assert_eq!(s.interaction().hovered(), None);
}

#[test]
fn selection_survives_hovering_elsewhere() {
    let mut s = session();
    assert!(s.select("h1"));
    s.pointer_move(1, Vec2::new(20.0, 20.0));
    s.hover_enter("h3");
    s.hover_leave("h3");
    assert_eq!(s.overlay().map(|o| o.hotspot_id), Some("h1"));
}

#[test]
fn unknown_id_select_is_a_no_op() {
    let mut s = session();
    s.select("h2");
    assert!(!s.select("nope"));
    assert_eq!(s.overlay().map(|o| o.hotspot_id), Some("h2"));
}

#[test]
fn wheel_zooms_within_bounds() {
    let mut s = session();
    for _ in 0..500 {
        s.wheel(100.0);
    }
    assert!((s.camera().zoom() - 10.0).abs() < 1e-4);
    for _ in 0..500 {
        s.wheel(-100.0);
    }
    assert!((s.camera().zoom() - 0.1).abs() < 1e-4);
}

#[test]
fn finished_load_updates_the_status() {
    let mut s = session();
    assert!(s.panorama().is_loading());
    let t = s.begin_panorama_load();
    assert!(s.is_load_pending(t));
    assert!(s.finish_panorama_load(t, Ok((4096, 2048))));
    assert_eq!(
        s.panorama(),
        &PanoramaStatus::Ready {
            width: 4096,
            height: 2048
        }
    );
    assert!(!s.is_load_pending(t));
}

#[test]
fn broken_image_falls_back_without_failing() {
    let mut s = session();
    let t = s.begin_panorama_load();
    let err = AssetError::Decode {
        url: "/assets/missing.jpg".into(),
        reason: "EncodingError".into(),
    };
    assert!(s.finish_panorama_load(t, Err(err)));
    match s.panorama() {
        PanoramaStatus::Failed(msg) => assert!(msg.contains("/assets/missing.jpg")),
        other => panic!("expected a failed status, got {other:?}"),
    }
    assert!(s.is_mounted());
}

#[test]
fn superseded_load_result_is_discarded() {
    let mut s = session();
    let first = s.begin_panorama_load();
    let second = s.begin_panorama_load();
    assert!(!s.finish_panorama_load(first, Ok((10, 10))));
    assert!(s.panorama().is_loading());
    assert!(s.finish_panorama_load(second, Ok((20, 10))));
}

#[test]
fn unmount_cancels_async_work_and_ignores_input() {
    let mut s = session();
    let t = s.begin_panorama_load();
    s.select("h1");
    s.unmount();
    assert!(!s.is_mounted());
    assert!(!s.finish_panorama_load(t, Ok((2048, 1024))));
    assert!(s.panorama().is_loading());
    assert!(s.overlay().is_none());

    let zoom = s.camera().zoom();
    s.wheel(100.0);
    s.pointer_down(1, CENTER);
    assert_eq!(s.pointer_up(1, CENTER), None);
    assert_eq!(s.key(KeyAction::ZoomOut), ControlEffect::None);
    assert_eq!(s.camera().zoom(), zoom);
    assert!(s.interaction().selected().is_none());

    // a second unmount changes nothing
    s.unmount();
    assert!(!s.is_mounted());
}

#[test]
fn keyboard_effects() {
    let mut s = session();
    assert_eq!(s.key(KeyAction::Dismiss), ControlEffect::None);
    s.select("h1");
    assert_eq!(s.key(KeyAction::Dismiss), ControlEffect::Dismissed);
    assert!(s.overlay().is_none());

    assert_eq!(s.key(KeyAction::ToggleAudio), ControlEffect::AudioToggled(false));
    assert_eq!(s.key(KeyAction::ToggleAudio), ControlEffect::AudioToggled(true));

    assert_eq!(
        s.key(KeyAction::ToggleFullscreen),
        ControlEffect::Fullscreen(FullscreenRequest::Enter)
    );
    // still waiting on the platform
    assert_eq!(s.key(KeyAction::ToggleFullscreen), ControlEffect::None);
    s.fullscreen_rejected();
    assert!(!s.controls().is_fullscreen());

    assert_eq!(s.key(KeyAction::Orbit { yaw: 1, pitch: 1 }), ControlEffect::Camera);
    assert!((s.camera().yaw() - 5f32.to_radians()).abs() < 1e-5);
    assert!((s.camera().pitch() - 5f32.to_radians()).abs() < 1e-5);
    assert_eq!(s.key(KeyAction::ResetView), ControlEffect::Camera);
    assert_eq!(s.key(KeyAction::ZoomIn), ControlEffect::Camera);
    s.reset_view();
    assert_eq!(s.camera().yaw(), 0.0);
    assert_eq!(s.camera().pitch(), 0.0);
}

#[test]
fn hover_follows_the_camera_under_a_resting_pointer() {
    let mut s = session();
    s.pointer_move(1, CENTER);
    assert_eq!(s.interaction().hovered(), Some("h1"));

    // turn a quarter left without touching the pointer
    for _ in 0..18 {
        s.key(KeyAction::Orbit { yaw: 1, pitch: 0 });
    }
    assert_eq!(s.interaction().hovered(), None);
    let view = s.frame(0.0);
    assert_eq!(view.hovered, None);
    assert_eq!(view.markers[0].core_scale, 1.0);

    s.key(KeyAction::ResetView);
    assert_eq!(s.interaction().hovered(), Some("h1"));
    assert_eq!(s.frame(0.0).hovered, Some(0));
}

#[test]
fn device_orientation_refreshes_hover() {
    let mut s = session_with(ViewerConfig {
        device_orientation: true,
        ..ViewerConfig::default()
    });
    s.pointer_move(1, CENTER);
    assert_eq!(s.interaction().hovered(), Some("h1"));
    s.device_orientation(90.0, 90.0);
    assert_eq!(s.interaction().hovered(), None);
    s.device_orientation(0.0, 90.0);
    assert_eq!(s.interaction().hovered(), Some("h1"));
}

#[test]
fn camera_changes_after_the_pointer_left_hover_nothing() {
    let mut s = session();
    s.pointer_move(1, Vec2::new(20.0, 20.0));
    s.pointer_leave();
    for _ in 0..3 {
        s.wheel(-100.0);
    }
    s.reset_view();
    assert_eq!(s.interaction().hovered(), None);
}

#[test]
fn device_orientation_only_applies_when_enabled() {
    let mut off = session();
    off.device_orientation(45.0, 120.0);
    assert_eq!(off.camera().yaw(), 0.0);

    let mut on = session_with(ViewerConfig {
        device_orientation: true,
        ..ViewerConfig::default()
    });
    on.device_orientation(45.0, 120.0);
    assert!((on.camera().yaw() - 45f32.to_radians()).abs() < 1e-5);
    assert!((on.camera().pitch() - 30f32.to_radians()).abs() < 1e-5);
}

#[test]
fn frames_are_a_pure_function_of_elapsed_time_and_state() {
    let mut a = session();
    let mut b = session();
    a.hover_enter("h3");
    b.hover_enter("h3");
    let fa = a.frame(1.25);
    let fb = b.frame(1.25);
    assert_eq!(fa.markers, fb.markers);
    assert_eq!(fa.labels, fb.labels);
    assert_eq!(fa.view_proj, fb.view_proj);
    assert_eq!(fa.hovered, Some(2));

    let later = a.frame(2.5);
    assert_ne!(later.markers[0].spin, fa.markers[0].spin);
    // replaying the same instant reproduces the frame
    assert_eq!(a.frame(1.25).markers, fa.markers);
}

#[test]
fn labels_sit_above_visible_markers_only() {
    let mut s = session();
    let frame = s.frame(0.0);
    let ahead = frame.labels[0].screen.expect("ahead is visible");
    assert!((ahead.x - 400.0).abs() < 0.01);
    assert!(ahead.y < 300.0);
    assert_eq!(frame.labels[1].screen, None);
    assert!(frame.labels[2].screen.is_some());
}

#[test]
fn duplicate_hotspot_ids_are_rejected_at_mount() {
    let mut bad = tour();
    bad.hotspots[2].id = "h1".into();
    match ViewerSession::new(bad, ViewerConfig::default()) {
        Err(ViewerError::Tour(TourError::DuplicateHotspot { id, .. })) => assert_eq!(id, "h1"),
        Err(e) => panic!("unexpected error {e}"),
        Ok(_) => panic!("duplicate ids accepted"),
    }
}

#[test]
fn invalid_config_is_rejected_at_mount() {
    let cfg = ViewerConfig {
        min_zoom: 5.0,
        max_zoom: 1.0,
        ..ViewerConfig::default()
    };
    assert!(matches!(
        ViewerSession::new(tour(), cfg),
        Err(ViewerError::Config(_))
    ));
}
