//! Utility helpers shared across plugin UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure derivation logic lives here so components stay thin and the survey
//! behavior can be tested without a browser.

pub mod color;
pub mod format;
pub mod survey;
