//! Plugin identity and API routing configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_PLUGIN_ID: &str = "com.mattermost.nps";
pub const DEFAULT_API_VERSION: &str = "v1";

/// Where the plugin server's HTTP API lives on the host.
///
/// Defaults match the plugin manifest; a host may override either field by
/// handing a JSON object to [`PluginConfig::from_json`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub plugin_id: String,
    pub api_version: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self { plugin_id: DEFAULT_PLUGIN_ID.to_owned(), api_version: DEFAULT_API_VERSION.to_owned() }
    }
}

impl PluginConfig {
    /// Parse overrides from a JSON object. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the serde error if `raw` is not a JSON object of strings.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[must_use]
    pub fn with_plugin_id(mut self, plugin_id: impl Into<String>) -> Self {
        self.plugin_id = plugin_id.into();
        self
    }

    /// Base path all plugin API routes hang off, e.g. `/plugins/com.mattermost.nps/api/v1`.
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/plugins/{}/api/{}", self.plugin_id, self.api_version)
    }

    /// Full path for a route under [`Self::base_path`].
    #[must_use]
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}/{}", self.base_path(), route.trim_start_matches('/'))
    }
}
