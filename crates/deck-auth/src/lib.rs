//! # deck-auth
//!
//! Bearer token storage for the taskdeck client.
//!
//! The stored credential pairs the bearer token with the account it belongs
//! to. Lookup goes OS keychain (`keyring`) → environment → credentials file.
//! There is no login flow here: tokens are issued by the backend and handed
//! to [`token_store::store`].

pub mod credentials;
pub mod error;
pub mod token_store;

pub use credentials::AccessToken;
pub use error::AuthError;

/// Resolve the best available credential without failing.
#[must_use]
pub fn resolve_token() -> Option<AccessToken> {
    token_store::load()
}

/// Resolve the stored credential or fail before any request is built.
///
/// # Errors
///
/// Returns [`AuthError::NotAuthenticated`] if no tier holds a credential.
pub fn require_token() -> Result<AccessToken, AuthError> {
    token_store::load().ok_or(AuthError::NotAuthenticated)
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
