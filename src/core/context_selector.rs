use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::connections::errors::ConnectionError;
use crate::connections::profile::{ConnectionProfile, Context};
use crate::connections::service::ConnectionService;
use crate::core::kernel_defaults::KernelChangeEvent;

/// The outcome of context selection: the connection to pre-select plus every
/// selectable alternative for the picker.
///
/// When `default_connection` is a real connection it is also present in
/// `other_connections`; ordering follows whatever the connection service
/// reported, with no secondary sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultConnectionResult {
    pub default_connection: Context,
    pub other_connections: Vec<Context>,
}

/// The "Select connection" placeholder result.
pub fn default_context() -> DefaultConnectionResult {
    DefaultConnectionResult {
        default_connection: Context::SelectConnection,
        other_connections: vec![Context::SelectConnection],
    }
}

/// The "Localhost" placeholder result, used when any provider is acceptable.
pub fn local_context() -> DefaultConnectionResult {
    DefaultConnectionResult {
        default_connection: Context::Localhost,
        other_connections: vec![Context::Localhost],
    }
}

/// Entry point for kernel-selection changes.
///
/// Decides cheaply whether recomputing contexts is warranted at all; when it
/// is not (the kernel did not really change, or no provider may serve it),
/// the placeholder result is returned without touching the connection
/// service. Otherwise delegates to [`active_contexts`].
pub async fn contexts_for_kernel(
    connection_service: &dyn ConnectionService,
    allowed_provider_ids: &[String],
    kernel_change: Option<&KernelChangeEvent>,
    current_profile: Option<&ConnectionProfile>,
) -> Result<DefaultConnectionResult, ConnectionError> {
    if current_profile.is_none() {
        let kernel_unchanged = match kernel_change {
            None => true,
            Some(event) => match (&event.old_value, &event.new_value) {
                (_, None) => true,
                (Some(old), Some(new)) => old.name == new.name,
                (None, Some(_)) => false,
            },
        };
        if kernel_unchanged {
            debug!("Kernel unchanged and no profile given; keeping placeholder context.");
            return Ok(default_context());
        }
    }

    let new_kernel_named = kernel_change
        .and_then(|event| event.new_value.as_ref())
        .is_some_and(|kernel| !kernel.name.is_empty());
    if new_kernel_named && allowed_provider_ids.is_empty() {
        debug!("New kernel has no allowed providers; keeping placeholder context.");
        return Ok(default_context());
    }

    active_contexts(connection_service, allowed_provider_ids, current_profile).await
}

/// Fetches the active connections and ranks them into a picker result.
///
/// Provider filtering is applied first, then the current profile may
/// override the default by server name; first match by list order wins in
/// both steps. Fetch failures propagate unchanged.
pub async fn active_contexts(
    connection_service: &dyn ConnectionService,
    allowed_provider_ids: &[String],
    current_profile: Option<&ConnectionProfile>,
) -> Result<DefaultConnectionResult, ConnectionError> {
    let mut default_connection = Context::SelectConnection;

    let mut active_connections = connection_service.active_connections().await?;
    info!(
        "Connection service reported {} active connection(s).",
        active_connections.len()
    );
    active_connections.retain(|connection| !connection.is_placeholder());

    if active_connections.is_empty() {
        return Ok(if allowed_provider_ids.is_empty() {
            local_context()
        } else {
            default_context()
        });
    }

    let connections: Vec<ConnectionProfile> = active_connections
        .into_iter()
        .filter(|connection| {
            allowed_provider_ids
                .iter()
                .any(|provider| *provider == connection.provider_name)
        })
        .collect();
    debug!(
        "{} connection(s) remain after provider filtering.",
        connections.len()
    );

    if let Some(first) = connections.first() {
        default_connection = Context::Connection {
            profile: first.clone(),
        };
        if let Some(profile) = current_profile.filter(|p| !p.options.is_empty()) {
            if let Some(matching) = connections
                .iter()
                .find(|connection| connection.server_name == profile.server_name)
            {
                debug!(
                    "Current profile overrides default via server '{}'.",
                    matching.server_name
                );
                default_connection = Context::Connection {
                    profile: matching.clone(),
                };
            }
        }
    }

    let mut other_connections: Vec<Context> = connections
        .into_iter()
        .map(|profile| Context::Connection { profile })
        .collect();

    // No allowed-provider connection exists; prompt the user to add one.
    if default_connection == Context::SelectConnection {
        other_connections.push(Context::AddNewConnection);
    }

    Ok(DefaultConnectionResult {
        default_connection,
        other_connections,
    })
}
