pub mod errors;
pub mod profile;
pub mod service;

// Re-export the modules here for easy import elsewhere.
pub use errors::*;
pub use profile::*;
pub use service::*;
