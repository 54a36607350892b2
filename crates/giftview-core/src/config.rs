//! Client configuration.

use serde::{Deserialize, Serialize};

/// Default API prefix, relative to the page origin.
pub const DEFAULT_API_BASE: &str = "/api";

/// Where the gift API lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix joined with `/gifts/{slug}`; a trailing slash is ignored
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
