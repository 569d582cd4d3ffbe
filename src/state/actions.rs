//! UI events and their constructors.
//!
//! DESIGN
//! ======
//! Producers build [`UiAction`] values through the constructor functions and
//! consumers match on the enum, so there is no stringly-typed dispatch. The
//! wire tags are kept available through [`UiAction::tag`] for hosts that log
//! or bridge actions by name.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::net::client::Client;
use crate::net::transport::HttpTransport;
use crate::net::types::FetchResult;

pub const SHOW_CONFIRMATION_MODAL: &str = "SHOW_CONFIRMATION_MODAL";
pub const HIDE_CONFIRMATION_MODAL: &str = "HIDE_CONFIRMATION_MODAL";
pub const WINDOW_RESIZED: &str = "WINDOW_RESIZED";

/// Opaque confirm/cancel callback supplied by whoever opens the modal.
#[derive(Clone)]
pub struct ModalHandler(Arc<dyn Fn() + Send + Sync>);

impl ModalHandler {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn run(&self) {
        (self.0)();
    }

    /// Whether both handles point at the same callback.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ModalHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ModalHandler(..)")
    }
}

/// Events consumed by [`super::ui::UiState::apply`].
#[derive(Clone, Debug)]
pub enum UiAction {
    ShowConfirmationModal { on_confirm: ModalHandler, on_cancel: ModalHandler },
    HideConfirmationModal,
    WindowResized { window_width: u32 },
}

impl UiAction {
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ShowConfirmationModal { .. } => SHOW_CONFIRMATION_MODAL,
            Self::HideConfirmationModal => HIDE_CONFIRMATION_MODAL,
            Self::WindowResized { .. } => WINDOW_RESIZED,
        }
    }
}

/// Startup handshake. The returned procedure notifies the server that this
/// client is live; the outcome is logged and dropped.
pub fn connected<T>(client: Rc<Client<T>>) -> impl FnOnce() -> LocalBoxFuture<'static, ()>
where
    T: HttpTransport + 'static,
{
    move || {
        async move {
            if let FetchResult::Error(err) = client.connected().await {
                leptos::logging::warn!("connected handshake failed: {err}");
            }
        }
        .boxed_local()
    }
}

pub fn show_confirmation_modal(on_confirm: ModalHandler, on_cancel: ModalHandler) -> UiAction {
    UiAction::ShowConfirmationModal { on_confirm, on_cancel }
}

pub fn hide_confirmation_modal() -> UiAction {
    UiAction::HideConfirmationModal
}

pub fn window_resized(window_width: u32) -> UiAction {
    UiAction::WindowResized { window_width }
}
