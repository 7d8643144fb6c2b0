//! Symbol resolution through an external `addr2line`-compatible tool.

pub mod frames;
pub mod symbolizer;

// Re-export main types
pub use frames::resolve_frames;
pub use symbolizer::{Addr2Line, Symbolizer};
