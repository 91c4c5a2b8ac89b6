use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Id the connection service uses for its own "none selected" placeholder.
/// Entries carrying it are never surfaced to the picker.
pub const SELECT_CONNECTION_ID: &str = "-1";
/// Id presented for the synthetic "Add new connection" entry.
pub const ADD_NEW_CONNECTION_ID: &str = "-2";

/// Provider shown on placeholder entries.
pub const MSSQL_PROVIDER: &str = "MSSQL";
/// Provider shown on the "Add new connection" entry.
pub const SQL_PROVIDER: &str = "SQL";

/// A connection as reported by the host's connection-management service.
///
/// Created and owned elsewhere; this crate only reads and re-wraps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionProfile {
    pub provider_name: String,
    pub connection_id: String,
    pub server_name: String,
    /// Extra provider-specific options, used only for matching.
    #[serde(default)]
    pub options: HashMap<String, Value>,
}

impl ConnectionProfile {
    pub fn new(
        provider_name: impl Into<String>,
        connection_id: impl Into<String>,
        server_name: impl Into<String>,
    ) -> Self {
        Self {
            provider_name: provider_name.into(),
            connection_id: connection_id.into(),
            server_name: server_name.into(),
            options: HashMap::new(),
        }
    }

    /// True for the service's own "none selected" placeholder entries.
    pub fn is_placeholder(&self) -> bool {
        self.connection_id == SELECT_CONNECTION_ID
    }
}

/// An entry of the connection picker.
///
/// The enum is `#[serde(tag = "kind")]` so JSON looks like:
/// `{ "kind":"Connection", "profile": { "provider_name":"MSSQL", ... } }`
///
/// Placeholder and synthetic entries are distinct variants rather than
/// profiles with magic ids, so callers match on the variant instead of
/// comparing id strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Context {
    /// A live connection reported by the connection service.
    Connection { profile: ConnectionProfile },
    /// "Select connection" entry shown when no real connection qualifies.
    SelectConnection,
    /// "Localhost" entry shown when any provider is acceptable.
    Localhost,
    /// Synthetic entry prompting the user to create a connection.
    AddNewConnection,
}

impl Context {
    /// The label the picker renders for this entry.
    pub fn display_name(&self) -> &str {
        match self {
            Context::Connection { profile } => &profile.server_name,
            Context::SelectConnection => "Select connection",
            Context::Localhost => "Localhost",
            Context::AddNewConnection => "Add new connection",
        }
    }

    pub fn provider_name(&self) -> &str {
        match self {
            Context::Connection { profile } => &profile.provider_name,
            Context::SelectConnection | Context::Localhost => MSSQL_PROVIDER,
            Context::AddNewConnection => SQL_PROVIDER,
        }
    }

    pub fn connection_id(&self) -> &str {
        match self {
            Context::Connection { profile } => &profile.connection_id,
            Context::SelectConnection | Context::Localhost => SELECT_CONNECTION_ID,
            Context::AddNewConnection => ADD_NEW_CONNECTION_ID,
        }
    }

    /// The underlying profile, if this entry is a real connection.
    pub fn profile(&self) -> Option<&ConnectionProfile> {
        match self {
            Context::Connection { profile } => Some(profile),
            _ => None,
        }
    }
}
