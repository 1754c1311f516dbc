use deck_client::ClientError;
use deck_core::ValidationErrors;
use thiserror::Error;

/// Failure of a store operation.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The draft was rejected locally; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The request was sent and failed.
    #[error(transparent)]
    Request(#[from] ClientError),
}

impl SyncError {
    /// Field errors, when the failure was local validation.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Request(_) => None,
        }
    }
}
