use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// A bearer token and the account it was issued for.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,
    pub account_id: String,
}

impl AccessToken {
    /// Build a credential, rejecting blank parts.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Malformed`] if the token or account id is blank.
    pub fn new(token: impl Into<String>, account_id: impl Into<String>) -> Result<Self, AuthError> {
        let token = token.into().trim().to_string();
        let account_id = account_id.into().trim().to_string();
        if token.is_empty() {
            return Err(AuthError::Malformed("token is empty".into()));
        }
        if account_id.is_empty() {
            return Err(AuthError::Malformed("account id is empty".into()));
        }
        Ok(Self { token, account_id })
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub(crate) fn to_json(&self) -> Result<String, AuthError> {
        serde_json::to_string(self).map_err(|e| AuthError::Malformed(e.to_string()))
    }

    pub(crate) fn from_json(raw: &str) -> Result<Self, AuthError> {
        let parsed: Self =
            serde_json::from_str(raw.trim()).map_err(|e| AuthError::Malformed(e.to_string()))?;
        Self::new(parsed.token, parsed.account_id)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}
