//! NPS survey post: formatted message, header, and the 0–10 score row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the host in place of a survey post. The selected score is
//! re-derived from the post on every render; clicking a score hands the
//! post-action arguments to the host's `submit` callback and does not wait
//! on the outcome.

#[cfg(test)]
#[path = "survey_post_test.rs"]
mod survey_post_test;

use leptos::prelude::*;

use crate::components::score::Score;
use crate::net::types::{Post, PostActionSubmission, Theme};
use crate::util::color::change_opacity;
use crate::util::format::{FormatOptions, format_message};
use crate::util::survey::{extract_action, score_buttons, selected_score, submission_for};

pub const SURVEY_TITLE: &str = "How likely are you to recommend Mattermost?";
pub const LOW_SCORE_LABEL: &str = "Not Likely";
pub const HIGH_SCORE_LABEL: &str = "Very Likely";

/// Inline CSS custom properties derived from the host theme.
pub fn theme_style(theme: &Theme) -> String {
    let mut vars = Vec::new();
    if let Some(bg) = theme.center_channel_bg.as_deref() {
        vars.push(format!("--survey-bg:{bg}"));
    }
    if let Some(color) = theme.center_channel_color.as_deref() {
        vars.push(format!("--survey-border:{}", change_opacity(color, 0.3)));
    }
    if let Some(link) = theme.link_color.as_deref() {
        vars.push(format!("--survey-accent:{}", change_opacity(link, 0.5)));
    }
    if let Some(sidebar) = theme.sidebar_bg.as_deref() {
        vars.push(format!("--survey-scores-bg:{}", change_opacity(sidebar, 0.05)));
    }
    vars.join(";")
}

pub fn score_container_class(is_small: bool) -> &'static str {
    if is_small { "survey-post__scores survey-post__scores--small" } else { "survey-post__scores" }
}

/// Survey card for a single post.
#[component]
pub fn SurveyPost(
    post: Post,
    #[prop(optional)] theme: Theme,
    is_small: bool,
    submit: Callback<PostActionSubmission>,
) -> impl IntoView {
    let selected = selected_score(extract_action(&post));
    let message_html = format_message(&post.message, FormatOptions { at_mentions: true });

    let on_select = Callback::new(move |score: i32| {
        if let Some(submission) = submission_for(&post, score) {
            submit.run(submission);
        }
    });

    view! {
        <div class="survey-post__message" inner_html=message_html></div>
        <div class="survey-post" style=theme_style(&theme)>
            <h1 class="survey-post__title">{SURVEY_TITLE}</h1>
            <div class=score_container_class(is_small)>
                <div class="survey-post__labels">
                    <span>{LOW_SCORE_LABEL}</span>
                    <span class="survey-post__label-right">{HIGH_SCORE_LABEL}</span>
                </div>
                <div class="survey-post__row">
                    {score_buttons(selected)
                        .into_iter()
                        .map(|button| {
                            view! {
                                <Score
                                    score=button.score
                                    selected=button.selected
                                    is_small=is_small
                                    on_select=on_select
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
