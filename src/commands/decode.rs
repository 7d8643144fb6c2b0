//! Decode command implementation.
//!
//! The decode command:
//! 1. Extracts `ip:sp` pairs from the raw dump
//! 2. Resolves each instruction pointer with addr2line
//! 3. Strips the common path prefix and prints the frames

use crate::extractor::extract_addresses;
use crate::normalizer::{candidate_paths, common_prefix, print_frames};
use crate::resolver::{resolve_frames, Addr2Line, Symbolizer};
use crate::utils::config::{DEFAULT_ADDR2LINE, NO_ADDRESSES_MSG, NO_OUTPUT_MSG};
use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the decode command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct DecodeArgs {
    /// ELF file with debug symbols for the crashed firmware
    pub elf_file: PathBuf,

    /// addr2line executable (bare name is looked up on PATH)
    pub addr2line: PathBuf,
}

impl Default for DecodeArgs {
    fn default() -> Self {
        Self {
            elf_file: PathBuf::new(),
            addr2line: PathBuf::from(DEFAULT_ADDR2LINE),
        }
    }
}

/// How a decode run ended
///
/// **Public** - returned by `execute_decode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The input held no address pairs
    NoAddresses,

    /// Addresses were found but none resolved to any output
    NoOutput,

    /// Frames were printed
    Printed { frames: usize },
}

/// Validate decode arguments
///
/// **Public** - can be called before execute_decode for early validation
///
/// A missing ELF file is only warned about: addr2line reports it per address.
/// The empty-path check is for library callers starting from
/// `DecodeArgs::default()`; clap already rejects an empty positional.
pub fn validate_args(args: &DecodeArgs) -> Result<()> {
    if args.elf_file.as_os_str().is_empty() {
        anyhow::bail!("ELF file path cannot be empty");
    }

    if !args.elf_file.exists() {
        warn!("ELF file does not exist: {}", args.elf_file.display());
    }

    Ok(())
}

/// Execute the decode command with the system addr2line
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Decode command arguments
/// * `raw_trace` - Complete crash dump text
/// * `out` - Destination for frames and messages
///
/// # Errors
/// Only when writing to `out` fails. Resolution problems are reported
/// inline and never abort the run.
pub fn execute_decode<W: Write>(args: &DecodeArgs, raw_trace: &str, out: &mut W) -> Result<DecodeOutcome> {
    let symbolizer = Addr2Line::new(&args.addr2line, &args.elf_file);

    debug!(
        "Symbolizer: {}, ELF: {}",
        symbolizer.program().display(),
        symbolizer.elf_file().display()
    );

    decode_with(&symbolizer, raw_trace, out)
}

/// Run the full pipeline against any symbolizer
///
/// **Public** - lets callers supply their own `Symbolizer`
pub fn decode_with<W: Write>(
    symbolizer: &dyn Symbolizer,
    raw_trace: &str,
    out: &mut W,
) -> Result<DecodeOutcome> {
    let pairs = extract_addresses(raw_trace);
    if pairs.is_empty() {
        writeln!(out, "{}", NO_ADDRESSES_MSG)?;
        return Ok(DecodeOutcome::NoAddresses);
    }

    debug!("Decoding {} addresses", pairs.len());

    let frames = resolve_frames(symbolizer, &pairs, out)
        .context("Failed to write decode diagnostics")?;
    if frames.is_empty() {
        writeln!(out, "{}", NO_OUTPUT_MSG)?;
        return Ok(DecodeOutcome::NoOutput);
    }

    let cwd = match std::env::current_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            warn!("Cannot determine current directory: {}", e);
            None
        }
    };

    let paths = candidate_paths(&frames);
    let prefix = common_prefix(&paths, cwd.as_deref());
    debug!("Stripping prefix {:?}", prefix);

    print_frames(&frames, &prefix, out).context("Failed to write decoded frames")?;

    Ok(DecodeOutcome::Printed { frames: frames.len() })
}
