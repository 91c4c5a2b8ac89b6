use thiserror::Error;

/// A central error enum for connection-related errors.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// The connection-management collaborator reported a failure.
    #[error("Connection service error: {0}")]
    ServiceError(String),
    #[error("Other error: {0}")]
    Other(String),
}
