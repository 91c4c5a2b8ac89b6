//! A deterministic **in‑process stand‑in** for the host application's
//! connection-management service.
//!
//! *  **From the test's perspective**
//!    * Seed it with the connections the "host" should report, or with a
//!      failure message.
//!    * Inspect how often the library actually fetched via `fetch_count()`,
//!      which is what the short-circuit tests assert on.
//!
//! *  **Why this exists**: It lets integration tests exercise the *real*
//!    async selection path without a running connection manager behind it.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use notebook_contexts::connections::{ConnectionError, ConnectionProfile, ConnectionService};
use uuid::Uuid;

pub struct FakeConnectionService {
    /// What `active_connections` will answer: a list, or a failure message.
    outcome: Result<Vec<ConnectionProfile>, String>,
    /// How many times the library called `active_connections`.
    fetch_count: AtomicUsize,
}

impl FakeConnectionService {
    pub fn with_connections(connections: Vec<ConnectionProfile>) -> Self {
        Self {
            outcome: Ok(connections),
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConnectionService for FakeConnectionService {
    async fn active_connections(&self) -> Result<Vec<ConnectionProfile>, ConnectionError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(connections) => Ok(connections.clone()),
            Err(message) => Err(ConnectionError::ServiceError(message.clone())),
        }
    }
}

/// A profile with a fresh unique id, the way the host hands them out.
pub fn profile(provider: &str, server: &str) -> ConnectionProfile {
    ConnectionProfile::new(provider, Uuid::new_v4().to_string(), server)
}
