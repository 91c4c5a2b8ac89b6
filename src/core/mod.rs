pub mod context_selector;
pub mod kernel_defaults;
