use async_trait::async_trait;

use super::errors::ConnectionError;
use super::profile::ConnectionProfile;

/// The connection-management side of the host application.
///
/// Implemented by the host; this crate only consumes it. The single
/// operation may suspend the caller while the host gathers its state.
#[async_trait]
pub trait ConnectionService: Send + Sync {
    /// All currently active connections, in the order the host tracks them.
    ///
    /// Failures propagate to the caller unchanged; this crate performs no
    /// retry or recovery of its own.
    async fn active_connections(&self) -> Result<Vec<ConnectionProfile>, ConnectionError>;
}
