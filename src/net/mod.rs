//! Networking modules for the plugin server API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` shapes requests (XHR marker, CSRF token), `transport` sends them,
//! `cookies` supplies the session token, and `types` defines the host payload
//! and result schema.

pub mod client;
pub mod cookies;
pub mod transport;
pub mod types;
