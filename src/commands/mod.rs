//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod decode;

// Re-export main command functions
pub use decode::{decode_with, execute_decode, validate_args, DecodeArgs, DecodeOutcome};
