//! Path prefix normalization and printing of resolved frames.

pub mod prefix;

// Re-export main functions
pub use prefix::{candidate_paths, common_path, common_prefix, print_frames, strip_prefix};
