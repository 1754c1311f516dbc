//! Backend API connection settings.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("taskdeck/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every resource path is appended to (no trailing slash needed).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Base URL without surrounding whitespace or a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Check if the base URL looks usable.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        let url = self.base_url.trim();
        url.starts_with("http://") || url.starts_with("https://")
    }
}
