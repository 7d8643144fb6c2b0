//! Extraction of instruction/stack pointer pairs from a raw crash dump.

pub mod address;

// Re-export main types
pub use address::{extract_addresses, AddressPair};
