//! Confirmation dialog driven by `UiState::confirmation_modal`.

#[cfg(test)]
#[path = "confirmation_modal_test.rs"]
mod confirmation_modal_test;

use leptos::prelude::*;

use crate::state::actions::{ModalHandler, hide_confirmation_modal};
use crate::state::ui::UiState;

/// Close the modal and return the handler for the chosen button.
pub fn resolve_confirmation(state: &mut UiState, confirmed: bool) -> Option<ModalHandler> {
    let modal = &state.confirmation_modal;
    let handler = if confirmed { modal.on_confirm.clone() } else { modal.on_cancel.clone() };
    state.apply(hide_confirmation_modal());
    handler
}

/// Modal with Confirm/Cancel buttons. Escape and backdrop clicks cancel.
#[component]
pub fn ConfirmationModal(
    ui: RwSignal<UiState>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
) -> impl IntoView {
    let finish = move |confirmed: bool| {
        let mut handler = None;
        ui.update(|state| handler = resolve_confirmation(state, confirmed));
        if let Some(handler) = handler {
            handler.run();
        }
    };
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            finish(false);
        }
    });

    view! {
        <Show when=move || ui.with(|state| state.confirmation_modal.visible)>
            <div class="dialog-backdrop" on:click=move |_| finish(false)>
                <div
                    class="dialog dialog--confirm"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <h2>{title.clone()}</h2>
                    <p class="dialog__message">{message.clone()}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| finish(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| finish(true)>
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
