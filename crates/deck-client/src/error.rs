//! Client error types.

use deck_auth::AuthError;
use thiserror::Error;

/// Errors that can occur when talking to the tasks API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Backend error code (e.g. `TASK_ERR_01`), when the body carried one.
        code: Option<String>,
        /// Error message or raw response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// No usable credential was available.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The API settings cannot produce a client.
    #[error("invalid API config: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Whether the API reported the addressed entity as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
