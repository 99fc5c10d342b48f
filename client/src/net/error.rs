use thiserror::Error;

use super::types::CardId;

/// Why a repository call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The server could not be reached at all.
    #[error("server unreachable: {0}")]
    Connectivity(String),
    /// The server (or a local pre-check) rejected the request body.
    #[error("invalid card: {0}")]
    Validation(String),
    /// The server answered with a failure.
    #[error("server error ({status:?}): {message}")]
    Server { status: Option<u16>, message: String },
    #[error("card {0} not found")]
    NotFound(CardId),
    /// The response body was not the expected envelope.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl RepositoryError {
    /// Whether the failure was a transport problem rather than a server answer.
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }
}
