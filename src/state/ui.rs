//! Plugin UI state: handshake flag, confirmation modal, viewport width.
//!
//! DESIGN
//! ======
//! The host owns this state (typically in an `RwSignal`) and feeds it
//! [`UiAction`] values. Modal callbacks are stored and handed back untouched;
//! the reducer never runs them.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::actions::{ModalHandler, UiAction};

/// Widths at or below this render the compact score row.
pub const SMALL_VIEWPORT_MAX_WIDTH: u32 = 768;

/// Visibility plus the callbacks supplied when the modal was opened.
#[derive(Clone, Debug, Default)]
pub struct ConfirmationModalState {
    pub visible: bool,
    pub on_confirm: Option<ModalHandler>,
    pub on_cancel: Option<ModalHandler>,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub connected: bool,
    pub confirmation_modal: ConfirmationModalState,
    pub window_width: u32,
}

impl UiState {
    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::ShowConfirmationModal { on_confirm, on_cancel } => {
                self.confirmation_modal = ConfirmationModalState {
                    visible: true,
                    on_confirm: Some(on_confirm),
                    on_cancel: Some(on_cancel),
                };
            }
            UiAction::HideConfirmationModal => {
                self.confirmation_modal = ConfirmationModalState::default();
            }
            UiAction::WindowResized { window_width } => {
                self.window_width = window_width;
            }
        }
    }

    pub fn mark_connected(&mut self) {
        self.connected = true;
    }

    /// Whether the survey should use its compact layout. An unknown (zero)
    /// width is treated as full size.
    #[must_use]
    pub fn is_small(&self) -> bool {
        self.window_width > 0 && self.window_width <= SMALL_VIEWPORT_MAX_WIDTH
    }
}
