// Public modules
pub mod api;
pub mod batch;
pub mod config;
pub mod error;
pub mod rename;
pub mod router;

// Internal modules - not part of public API
pub(crate) mod io;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
