//! # nps-survey
//!
//! Leptos + WASM webapp half of the NPS survey plugin.
//!
//! Renders the Net Promoter Score picker attached to survey posts, submits
//! the chosen score back to the host as a post action, and performs the
//! `connected` handshake with the plugin server at startup.
//!
//! Browser-only glue (cookies, fetch, window listeners) is gated behind the
//! `hydrate` feature so the derivation and request-shaping logic can be
//! compiled and tested natively.

pub mod components;
pub mod config;
pub mod net;
pub mod plugin;
pub mod state;
pub mod util;
