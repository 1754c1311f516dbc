use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `deck auth login`")]
    NotAuthenticated,

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("malformed credential: {0}")]
    Malformed(String),
}
