// Host-side tests for the hover/selection state machine.

use panorama_viewer::catalog::default_tour;
use panorama_viewer::content::{overlay_content, OverlayBody};
use panorama_viewer::interaction::{InteractionState, Phase};

#[test]
fn hovering_other_markers_keeps_the_selection() {
    let tour = default_tour();
    let mut state = InteractionState::default();
    assert!(state.on_select(&tour, "h1"));
    state.on_hover_enter("h2");
    assert_eq!(
        state.phase(),
        Phase::Selected {
            hotspot: "h1",
            hovering: Some("h2")
        }
    );
    state.on_hover_leave("h2");

    let content = overlay_content(state.selected().expect("h1 still selected"));
    assert_eq!(content.hotspot_id, "h1");
    assert_eq!(
        content.body,
        OverlayBody::Text(
            "Built in the early 12th century, this is the largest religious monument in the world."
        )
    );
}

#[test]
fn dismiss_is_idempotent() {
    let tour = default_tour();
    let mut state = InteractionState::default();
    state.on_dismiss();
    assert_eq!(state, InteractionState::default());

    state.on_select(&tour, "h3");
    state.on_dismiss();
    let once = state.clone();
    state.on_dismiss();
    assert_eq!(state, once);
    assert!(state.selected().is_none());
}

#[test]
fn unknown_id_leaves_state_untouched() {
    let tour = default_tour();
    let mut state = InteractionState::default();
    state.on_select(&tour, "h2");
    state.on_hover_enter("h1");
    let before = state.clone();
    assert!(!state.on_select(&tour, "does-not-exist"));
    assert_eq!(state, before);
}

#[test]
fn selecting_another_marker_replaces_the_selection() {
    let tour = default_tour();
    let mut state = InteractionState::default();
    state.on_select(&tour, "h1");
    state.on_select(&tour, "h3");
    assert_eq!(state.selected().map(|h| h.id.as_str()), Some("h3"));
}

#[test]
fn hover_enter_and_leave_are_idempotent() {
    let mut state = InteractionState::default();
    state.on_hover_enter("h1");
    state.on_hover_enter("h1");
    assert_eq!(state.phase(), Phase::Hovering("h1"));
    state.on_hover_leave("h1");
    state.on_hover_leave("h1");
    assert_eq!(state.phase(), Phase::Idle);
}

#[test]
fn stale_hover_leave_is_ignored() {
    let mut state = InteractionState::default();
    state.on_hover_enter("h1");
    state.on_hover_enter("h2");
    state.on_hover_leave("h1");
    assert_eq!(state.hovered(), Some("h2"));
    assert!(state.is_hovered("h2"));
    assert!(!state.is_hovered("h1"));
}

#[test]
fn reset_clears_hover_and_selection() {
    let tour = default_tour();
    let mut state = InteractionState::default();
    state.on_select(&tour, "h1");
    state.on_hover_enter("h2");
    state.reset();
    assert_eq!(state.phase(), Phase::Idle);
}
