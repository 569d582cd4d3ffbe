use super::*;
use crate::state::actions::{ModalHandler, hide_confirmation_modal, show_confirmation_modal, window_resized};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_disconnected_with_hidden_modal() {
    let state = UiState::default();
    assert!(!state.connected);
    assert!(!state.confirmation_modal.visible);
    assert!(state.confirmation_modal.on_confirm.is_none());
    assert!(state.confirmation_modal.on_cancel.is_none());
    assert_eq!(state.window_width, 0);
}

#[test]
fn mark_connected_sets_flag() {
    let mut state = UiState::default();
    state.mark_connected();
    assert!(state.connected);
}

// =============================================================
// Confirmation modal
// =============================================================

#[test]
fn show_stores_callbacks_without_running_them() {
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);
    let on_confirm = ModalHandler::new(move || flag.store(true, Ordering::SeqCst));
    let on_cancel = ModalHandler::new(|| {});

    let mut state = UiState::default();
    state.apply(show_confirmation_modal(on_confirm.clone(), on_cancel.clone()));

    assert!(state.confirmation_modal.visible);
    assert!(state.confirmation_modal.on_confirm.as_ref().unwrap().same_as(&on_confirm));
    assert!(state.confirmation_modal.on_cancel.as_ref().unwrap().same_as(&on_cancel));
    assert!(!ran.load(Ordering::SeqCst));
}

#[test]
fn hide_clears_visibility_and_callbacks() {
    let mut state = UiState::default();
    state.apply(show_confirmation_modal(ModalHandler::new(|| {}), ModalHandler::new(|| {})));
    state.apply(hide_confirmation_modal());

    assert!(!state.confirmation_modal.visible);
    assert!(state.confirmation_modal.on_confirm.is_none());
    assert!(state.confirmation_modal.on_cancel.is_none());
}

#[test]
fn modal_actions_leave_width_alone() {
    let mut state = UiState { window_width: 900, ..UiState::default() };
    state.apply(show_confirmation_modal(ModalHandler::new(|| {}), ModalHandler::new(|| {})));
    assert_eq!(state.window_width, 900);
}

// =============================================================
// Window width
// =============================================================

#[test]
fn window_resized_updates_width() {
    let mut state = UiState::default();
    state.apply(window_resized(640));
    assert_eq!(state.window_width, 640);
    state.apply(window_resized(1440));
    assert_eq!(state.window_width, 1440);
}

#[test]
fn is_small_tracks_viewport_threshold() {
    let mut state = UiState::default();
    assert!(!state.is_small());
    state.apply(window_resized(SMALL_VIEWPORT_MAX_WIDTH));
    assert!(state.is_small());
    state.apply(window_resized(SMALL_VIEWPORT_MAX_WIDTH + 1));
    assert!(!state.is_small());
}
