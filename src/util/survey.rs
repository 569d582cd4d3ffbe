//! Survey state derived from a post's attachment metadata.
//!
//! SYSTEM CONTEXT
//! ==============
//! The survey post is rebuilt on every render from the host payload. Nothing
//! here stores state or raises: a post without a usable action renders as an
//! unselected picker whose buttons submit nothing.

#[cfg(test)]
#[path = "survey_test.rs"]
mod survey_test;

use crate::net::types::{Post, PostAction, PostActionSubmission};

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 10;
/// Selected-score sentinel meaning no button is highlighted.
pub const NO_SCORE: i32 = -1;

/// One button in the 0..=10 score row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreButton {
    pub score: i32,
    pub selected: bool,
}

/// First action of the first attachment, if every level is present.
pub fn extract_action(post: &Post) -> Option<&PostAction> {
    post.props
        .as_ref()?
        .attachments
        .as_ref()?
        .first()?
        .actions
        .as_ref()?
        .first()
}

/// Score previously chosen on `action`, or [`NO_SCORE`].
pub fn selected_score(action: Option<&PostAction>) -> i32 {
    action
        .and_then(|a| a.default_option.as_deref())
        .and_then(parse_leading_int)
        .filter(|score| (i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(score))
        .and_then(|score| i32::try_from(score).ok())
        .unwrap_or(NO_SCORE)
}

/// Base-10 integer prefix of `raw` after leading whitespace and an optional
/// sign, so `"7abc"` and `"7.5"` read as 7. `None` when no digits lead.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    // Overflow saturates; the result is out of score range either way.
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// The full button row, marking `selected` when it falls in range.
pub fn score_buttons(selected: i32) -> Vec<ScoreButton> {
    (MIN_SCORE..=MAX_SCORE)
        .map(|score| ScoreButton { score, selected: score == selected })
        .collect()
}

/// Callback arguments for choosing `score` on `post`, or `None` when the post
/// carries no action to submit against.
pub fn submission_for(post: &Post, score: i32) -> Option<PostActionSubmission> {
    let action = extract_action(post)?;
    Some(PostActionSubmission {
        post_id: post.id.clone(),
        action_id: action.id.clone(),
        action_cookie: action.cookie.clone(),
        value: score.to_string(),
    })
}
