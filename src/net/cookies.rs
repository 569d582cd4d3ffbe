//! Session cookie access for the CSRF token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host session stores its anti-forgery token in the `MMCSRF` cookie.
//! The API client reads it once at construction through a [`CookieSource`]
//! so tests and SSR can supply a fixed cookie string.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

pub const CSRF_COOKIE_PREFIX: &str = "MMCSRF=";

/// Supplies the ambient `name=value; name=value` cookie string.
pub trait CookieSource {
    fn cookie_string(&self) -> String;
}

/// Fixed cookie string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticCookies(pub String);

impl StaticCookies {
    pub fn new(cookies: impl Into<String>) -> Self {
        Self(cookies.into())
    }
}

impl CookieSource for StaticCookies {
    fn cookie_string(&self) -> String {
        self.0.clone()
    }
}

/// Reads `document.cookie` in the browser. Returns an empty string on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    fn cookie_string(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
                .and_then(|doc| doc.cookie().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }
}

/// Extract the CSRF token from a cookie string. First `MMCSRF=` entry wins;
/// an absent cookie yields an empty token.
pub fn csrf_from_cookie(cookies: &str) -> String {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(CSRF_COOKIE_PREFIX))
        .unwrap_or_default()
        .to_owned()
}
