//! Host-supplied payload types and request/response DTOs.
//!
//! DESIGN
//! ======
//! Posts arrive from the host application as loosely structured JSON. Every
//! nested level the survey reads is optional and deserialized leniently, so a
//! malformed attachment degrades to "no action" instead of failing the whole
//! post.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A chat post as delivered by the host's post-rendering pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier.
    #[serde(default, deserialize_with = "deserialize_string_lenient")]
    pub id: String,
    /// Raw message text, rendered above the survey.
    #[serde(default, deserialize_with = "deserialize_string_lenient")]
    pub message: String,
    /// Structured post properties carrying attachments.
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub props: Option<PostProps>,
}

/// The `props` object of a post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostProps {
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub attachments: Option<Vec<Attachment>>,
}

/// A message attachment carrying interactive actions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub actions: Option<Vec<PostAction>>,
}

/// A server-registered interactive action on a post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAction {
    /// Action identifier registered by the plugin server.
    #[serde(default, deserialize_with = "deserialize_string_lenient")]
    pub id: String,
    /// Signed token the server needs to execute the action.
    #[serde(default, deserialize_with = "deserialize_string_lenient")]
    pub cookie: String,
    /// Previously chosen score, string-encoded.
    #[serde(default, deserialize_with = "deserialize_option_string_lenient")]
    pub default_option: Option<String>,
}

/// Subset of the host theme used to color the survey card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub center_channel_bg: Option<String>,
    pub center_channel_color: Option<String>,
    pub link_color: Option<String>,
    pub sidebar_bg: Option<String>,
}

/// Arguments handed to the host's post-action callback when a score is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostActionSubmission {
    pub post_id: String,
    pub action_id: String,
    pub action_cookie: String,
    pub value: String,
}

/// Failure captured by the API client instead of being raised.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be constructed (e.g. unsupported method).
    #[error("request build failed: {0}")]
    Request(String),
    /// The network call itself failed.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not valid JSON.
    #[error("response parse failed: {0}")]
    Parse(String),
}

/// Normalized outcome of a fetch: parsed body or captured failure, never both.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchResult {
    Data(serde_json::Value),
    Error(FetchError),
}

impl FetchResult {
    #[must_use]
    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Data(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Data(_) => None,
            Self::Error(err) => Some(err),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl From<Result<serde_json::Value, FetchError>> for FetchResult {
    fn from(result: Result<serde_json::Value, FetchError>) -> Self {
        match result {
            Ok(value) => Self::Data(value),
            Err(err) => Self::Error(err),
        }
    }
}

/// Deserialize any value, mapping a shape mismatch to `None` instead of an error.
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize a list element by element. Entries of the wrong shape become
/// `T::default()` so their siblings keep their positions; a non-list is `None`.
fn deserialize_lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
    ))
}

fn scalar_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accept a string or a bare number for string-encoded fields.
fn deserialize_option_string_lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value))
}

/// Like [`deserialize_option_string_lenient`], with null and other shapes as `""`.
fn deserialize_string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value).unwrap_or_default())
}
