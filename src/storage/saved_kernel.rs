use serde::{Deserialize, Serialize};

/// A previously saved kernel selection for a notebook.
///
/// JSON on disk looks like: `{ "name": "SQL" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelInfo {
    /// Kernel spec name, matched exactly against `AllKernels::kernels`.
    pub name: String,
}

impl KernelInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
