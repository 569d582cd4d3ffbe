//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `survey_post` is what the host renders for survey posts; `score` is its
//! per-button child; `confirmation_modal` renders from shared `UiState`.

pub mod confirmation_modal;
pub mod score;
pub mod survey_post;
