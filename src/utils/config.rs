//! Configuration and constants for the CLI.

/// Symbolizer used when `--addr2line` is not given, looked up on `PATH`
pub const DEFAULT_ADDR2LINE: &str = "addr2line";

/// Fixed symbolizer flags: function names, demangling, one-line pretty output.
/// The ELF path goes after `-e` and the address is appended last.
pub const ADDR2LINE_FLAGS: &[&str] = &["--functions", "--demangle", "--pretty-print"];

/// Marker that separates the function name from its source location
pub const LOCATION_MARKER: &str = " at ";

pub const NO_ADDRESSES_MSG: &str = "No addresses found in the stack trace.";
pub const NO_OUTPUT_MSG: &str = "No output received from addr2line.";
