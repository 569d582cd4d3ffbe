//! HTTP transport seam between the API client and the network.
//!
//! Client-side (hydrate): [`BrowserTransport`] issues real requests via
//! `gloo-net`. Everywhere else the client is driven through a test or stub
//! implementation of [`HttpTransport`].

use super::types::FetchError;

/// A fully prepared request: method, headers, and optional body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpRequest {
    /// Upper-cased HTTP method.
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Value of the first header named `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Sends a request and parses the response body as JSON.
///
/// Implementations report network failures as [`FetchError::Transport`] and
/// body decode failures as [`FetchError::Parse`]. Status codes are not
/// inspected: any response whose body parses is a success.
#[async_trait::async_trait(?Send)]
pub trait HttpTransport {
    async fn send_json(&self, request: HttpRequest) -> Result<serde_json::Value, FetchError>;
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn send_json(&self, request: HttpRequest) -> Result<serde_json::Value, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method.as_str() {
                "GET" => Request::get(&request.url),
                "POST" => Request::post(&request.url),
                "PUT" => Request::put(&request.url),
                "PATCH" => Request::patch(&request.url),
                "DELETE" => Request::delete(&request.url),
                other => return Err(FetchError::Request(format!("unsupported method {other}"))),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let resp = match request.body {
                Some(body) => builder
                    .body(body)
                    .map_err(|e| FetchError::Request(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| FetchError::Transport(e.to_string()))?;

            resp.json::<serde_json::Value>()
                .await
                .map_err(|e| FetchError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(FetchError::Transport("not available on server".to_owned()))
        }
    }
}
