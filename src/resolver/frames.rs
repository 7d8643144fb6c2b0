//! Resolve every extracted address, tolerating individual failures.

use super::symbolizer::Symbolizer;
use crate::extractor::AddressPair;
use log::debug;
use std::io::{self, Write};

/// Resolve addresses one by one, in order
///
/// **Public** - second stage of the decode pipeline
///
/// # Arguments
/// * `symbolizer` - Tool used for each instruction pointer
/// * `pairs` - Extracted address pairs, in dump order
/// * `out` - Where per-address failure diagnostics are written
///
/// # Returns
/// Resolved frames in the same order as `pairs`. Failed addresses and
/// addresses with empty output contribute nothing.
///
/// # Errors
/// Only when writing a diagnostic to `out` fails.
pub fn resolve_frames<W: Write>(
    symbolizer: &dyn Symbolizer,
    pairs: &[AddressPair],
    out: &mut W,
) -> io::Result<Vec<String>> {
    let mut frames = Vec::with_capacity(pairs.len());

    for pair in pairs {
        match symbolizer.symbolize(&pair.ip) {
            Ok(frame) if frame.is_empty() => {
                debug!("No symbolizer output for {}", pair.ip);
            }
            Ok(frame) => {
                debug!("{} -> {}", pair.ip, frame);
                frames.push(frame);
            }
            Err(e) => {
                writeln!(out, "Error decoding address {}: {}", pair.ip, e)?;
            }
        }
    }

    debug!("Resolved {}/{} addresses", frames.len(), pairs.len());

    Ok(frames)
}
