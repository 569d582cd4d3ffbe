//! Single score button in the survey row.

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

use leptos::prelude::*;

/// CSS class list for a score button.
pub fn score_class(selected: bool, is_small: bool) -> String {
    let mut class = String::from("survey-score");
    if is_small {
        class.push_str(" survey-score--small");
    }
    if selected {
        class.push_str(" survey-score--selected");
    }
    class
}

/// Clickable score. Reports its value through `on_select`.
#[component]
pub fn Score(score: i32, selected: bool, is_small: bool, on_select: Callback<i32>) -> impl IntoView {
    let pressed = if selected { "true" } else { "false" };
    view! {
        <button
            class=score_class(selected, is_small)
            aria-pressed=pressed
            on:click=move |_| on_select.run(score)
        >
            {score}
        </button>
    }
}
