//! # deck-client
//!
//! REST client for the tasks-with-comments backend.
//!
//! Every request is scoped to the account of the stored credential and
//! carries `Authorization: Bearer <token>`:
//! - `/accounts/{account_id}/tasks[/{task_id}]`
//! - `/accounts/{account_id}/tasks/{task_id}/comments[/{comment_id}]`
//!
//! Request bodies are the validated input types from `deck-core`, so nothing
//! unvalidated reaches the wire.

pub mod comments;
pub mod tasks;

mod error;
mod http;
mod wire;

pub use error::ClientError;

use std::time::Duration;

use deck_auth::AccessToken;
use deck_config::ApiConfig;

/// HTTP client bound to one backend and one account.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: AccessToken,
}

impl ApiClient {
    /// Create a client from explicit settings and credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] if `base_url` is not an
    /// http(s) URL, or [`ClientError::Http`] if the underlying
    /// `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig, credentials: AccessToken) -> Result<Self, ClientError> {
        if !config.is_configured() {
            return Err(ClientError::InvalidConfig(format!(
                "base_url must start with http:// or https://, got '{}'",
                config.base_url
            )));
        }
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            credentials,
        })
    }

    /// Create a client using the stored credential.
    ///
    /// Fails before any request is built when no credential is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Auth`] if no credential is available, or
    /// [`ClientError::Http`] if the client fails to build.
    pub fn from_stored_credentials(config: &ApiConfig) -> Result<Self, ClientError> {
        let credentials = deck_auth::require_token()?;
        Self::new(config, credentials)
    }

    /// Account every request is scoped to.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.credentials.account_id
    }

    /// Build `{base}/accounts/{account}/{segments...}` with each segment
    /// percent-encoded.
    fn account_url(&self, segments: &[&str]) -> String {
        let mut url = format!(
            "{}/accounts/{}",
            self.base_url,
            urlencoding::encode(self.account_id())
        );
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        tracing::debug!(%method, url, "api request");
        self.http
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, self.credentials.bearer())
    }
}
