pub mod connections;
pub mod core;
pub mod storage;
pub mod utils;

// re‑export ergonomic entry points
pub use crate::core::context_selector::{
    active_contexts, contexts_for_kernel, default_context, local_context, DefaultConnectionResult,
};
pub use crate::core::kernel_defaults::{default_kernel, AllKernels, KernelChangeEvent, KernelSpec};
