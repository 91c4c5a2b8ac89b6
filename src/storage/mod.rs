pub mod saved_kernel;
pub mod store;
