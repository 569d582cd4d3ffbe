//! Plugin startup wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called once when the host activates the plugin in the browser. Installs
//! console logging, fires the `connected` handshake, and starts feeding
//! window width into the shared `UiState`.

#[cfg(test)]
#[path = "plugin_test.rs"]
mod plugin_test;

use leptos::prelude::*;

use crate::config::PluginConfig;
use crate::state::ui::UiState;

/// Current `window.innerWidth`, or `None` outside a browser.
pub fn current_window_width() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let width = width.max(0.0) as u32;
        Some(width)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Activate the plugin and return the UI state the host should provide as context.
pub fn initialize(config: PluginConfig) -> RwSignal<UiState> {
    let ui = RwSignal::new(UiState::default());

    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use crate::net::client::Client;
        use crate::net::cookies::DocumentCookies;
        use crate::net::transport::BrowserTransport;
        use crate::state::actions::{connected, window_resized};

        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);

        let client = Rc::new(Client::new(&config, &DocumentCookies, BrowserTransport));
        leptos::logging::log!("nps plugin activating against {}", client.base_url());
        leptos::task::spawn_local(connected(client)());
        ui.update(UiState::mark_connected);

        if let Some(width) = current_window_width() {
            ui.update(|state| state.apply(window_resized(width)));
        }
        let _resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = current_window_width() {
                ui.update(|state| state.apply(window_resized(width)));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    ui
}
