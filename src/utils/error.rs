//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while running the external symbolizer for one address
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{0}")]
    SpawnFailed(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
