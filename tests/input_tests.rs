// Host-side tests for pointer gesture tracking.

use glam::Vec2;
use panorama_viewer::input::{is_primary_button, Gesture, PointerTracker};

#[test]
fn only_the_main_button_starts_a_gesture() {
    assert!(is_primary_button(0));
    // middle, right, back, forward, pen eraser
    for button in [1, 2, 3, 4, 5] {
        assert!(!is_primary_button(button));
    }
}

#[test]
fn release_within_slop_is_a_click() {
    let mut p = PointerTracker::default();
    p.down(1, Vec2::new(10.0, 10.0));
    p.moved(1, Vec2::new(12.0, 11.0));
    assert_eq!(p.up(1, Vec2::new(12.0, 11.0)), Some(Vec2::new(12.0, 11.0)));
}

#[test]
fn travel_beyond_slop_is_a_drag() {
    let mut p = PointerTracker::default();
    p.down(1, Vec2::ZERO);
    assert_eq!(
        p.moved(1, Vec2::new(30.0, 0.0)),
        Gesture::Orbit { dx: 30.0, dy: 0.0 }
    );
    // coming back does not turn the drag into a click
    p.moved(1, Vec2::ZERO);
    assert_eq!(p.up(1, Vec2::ZERO), None);
}

#[test]
fn two_pointers_pinch_and_never_click() {
    let mut p = PointerTracker::default();
    p.down(1, Vec2::new(0.0, 0.0));
    p.down(2, Vec2::new(100.0, 0.0));
    assert_eq!(
        p.moved(2, Vec2::new(150.0, 0.0)),
        Gesture::Pinch {
            previous: 100.0,
            current: 150.0
        }
    );
    assert_eq!(p.up(2, Vec2::new(150.0, 0.0)), None);
    assert_eq!(p.up(1, Vec2::new(0.0, 0.0)), None);
    assert!(!p.is_dragging());
}

#[test]
fn unknown_release_is_ignored() {
    let mut p = PointerTracker::default();
    assert_eq!(p.up(7, Vec2::ZERO), None);
    assert_eq!(p.moved(7, Vec2::ONE), Gesture::None);
}

#[test]
fn last_position_follows_hovering_and_is_forgotten_on_leave() {
    let mut p = PointerTracker::default();
    assert_eq!(p.last_position(), None);
    p.moved(1, Vec2::new(5.0, 6.0));
    assert_eq!(p.last_position(), Some(Vec2::new(5.0, 6.0)));
    p.forget_position();
    assert_eq!(p.last_position(), None);
}
