//! Scan raw backtrace text for `ip:sp` address pairs.
//!
//! A pair is a single space followed by two `0x`-prefixed hex literals
//! joined by a colon, as printed by the ESP-IDF panic handler:
//!
//! ```text
//! Backtrace: 0x400d1234:0x3ffb1230 0x400d5678:0x3ffb1250
//! ```

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// One frame of the dump, both values kept exactly as they appeared
///
/// **Public** - consumed by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressPair {
    /// Instruction pointer, e.g. `0x400d1234`
    pub ip: String,

    /// Stack pointer; required for a match but not used for resolution
    pub sp: String,
}

impl AddressPair {
    pub fn new(ip: impl Into<String>, sp: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            sp: sp.into(),
        }
    }
}

fn pair_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r" (0x[0-9a-fA-F]+):(0x[0-9a-fA-F]+)").expect("address pattern is valid")
    })
}

/// Extract every address pair in order of appearance
///
/// **Public** - first stage of the decode pipeline
///
/// Duplicates are kept; each occurrence is decoded on its own.
/// An empty result means the dump had nothing recognisable.
pub fn extract_addresses(raw_trace: &str) -> Vec<AddressPair> {
    let pairs: Vec<AddressPair> = pair_pattern()
        .captures_iter(raw_trace)
        .map(|caps| AddressPair::new(&caps[1], &caps[2]))
        .collect();

    debug!("Extracted {} address pairs from {} bytes of input", pairs.len(), raw_trace.len());

    pairs
}
