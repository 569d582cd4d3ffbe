//! REST client for the plugin server API.
//!
//! ERROR HANDLING
//! ==============
//! Every request resolves to a [`FetchResult`]; transport and parse failures
//! are captured rather than propagated so callers on the render path never
//! have to handle a failure they cannot act on.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use super::cookies::{CookieSource, csrf_from_cookie};
use super::transport::{HttpRequest, HttpTransport};
use super::types::FetchResult;
use crate::config::PluginConfig;

pub const HEADER_REQUESTED_WITH: &str = "X-Requested-With";
pub const HEADER_X_CSRF_TOKEN: &str = "X-CSRF-Token";
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Per-request options for [`Client::do_fetch`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// HTTP method in any case. `None` or blank means GET.
    pub method: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl FetchOptions {
    pub fn method(method: impl Into<String>) -> Self {
        Self { method: Some(method.into()), ..Self::default() }
    }
}

/// Plugin API client bound to `/plugins/{id}/api/{version}`.
///
/// The CSRF token is captured once at construction and never refreshed.
pub struct Client<T> {
    csrf: String,
    url: String,
    transport: T,
}

impl<T: HttpTransport> Client<T> {
    pub fn new(config: &PluginConfig, cookies: &impl CookieSource, transport: T) -> Self {
        Self { csrf: csrf_from_cookie(&cookies.cookie_string()), url: config.base_path(), transport }
    }

    #[must_use]
    pub fn csrf_token(&self) -> &str {
        &self.csrf
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.url
    }

    /// Notify the plugin server that this client has started via `POST {base}/connected`.
    pub async fn connected(&self) -> FetchResult {
        let url = format!("{}/connected", self.url);
        self.do_fetch(&url, FetchOptions::method("POST")).await
    }

    /// Issue a request with the XHR marker, plus the CSRF token for anything but GET.
    pub async fn do_fetch(&self, url: &str, options: FetchOptions) -> FetchResult {
        let request = self.prepare(url, options);
        self.transport.send_json(request).await.into()
    }

    fn prepare(&self, url: &str, options: FetchOptions) -> HttpRequest {
        let method = options
            .method
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map_or_else(|| "GET".to_owned(), str::to_ascii_uppercase);

        let mut headers = options.headers;
        set_header(&mut headers, HEADER_REQUESTED_WITH, XML_HTTP_REQUEST);
        if method != "GET" {
            set_header(&mut headers, HEADER_X_CSRF_TOKEN, &self.csrf);
        }

        HttpRequest { method, url: url.to_owned(), headers, body: options.body }
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
    headers.push((name.to_owned(), value.to_owned()));
}
