use serde::{Deserialize, Serialize};

use crate::connections::profile::ConnectionProfile;
use crate::storage::saved_kernel::KernelInfo;

/// An executable notebook backend as advertised by the kernel API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelSpec {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl KernelSpec {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            language: None,
        }
    }

    /// The built-in fallback kernel. Returned when no spec list is available
    /// or nothing in it matches; not expected to be reached in normal
    /// operation.
    pub fn sql() -> Self {
        Self::new("SQL", "SQL")
    }
}

/// The kernel-spec list the kernel API reports for a notebook, plus the
/// name of the kernel it considers the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllKernels {
    pub kernels: Vec<KernelSpec>,
    pub default_kernel: String,
}

/// A kernel transition raised by the notebook toolbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelChangeEvent {
    pub old_value: Option<KernelSpec>,
    pub new_value: Option<KernelSpec>,
}

/// Picks the kernel spec to pre-select when a notebook opens.
///
/// The spec named by `specs.default_kernel` wins, unless a connection is
/// already known (`connection_profile`) and a previously saved selection
/// resolves to a kernel in the list, in which case the saved one wins.
/// Always returns a usable spec; when nothing resolves it falls back to
/// [`KernelSpec::sql`]. Name matching is exact, first match by list order.
pub fn default_kernel(
    specs: Option<&AllKernels>,
    connection_profile: Option<&ConnectionProfile>,
    saved_kernel: Option<&KernelInfo>,
) -> KernelSpec {
    let mut chosen: Option<&KernelSpec> = None;
    if let Some(specs) = specs {
        chosen = specs.kernels.iter().find(|k| k.name == specs.default_kernel);
        if connection_profile.is_some() {
            if let Some(saved) = saved_kernel {
                if let Some(saved_spec) = specs.kernels.iter().find(|k| k.name == saved.name) {
                    chosen = Some(saved_spec);
                }
            }
        }
    }
    chosen.cloned().unwrap_or_else(KernelSpec::sql)
}
