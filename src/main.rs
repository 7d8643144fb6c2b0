//! esp32decode CLI
//!
//! Decodes a firmware crash backtrace read from stdin into
//! `function at file:line` frames using addr2line.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use std::io::{self, Read};
use std::path::PathBuf;

use esp32decode::commands::{execute_decode, validate_args, DecodeArgs};
use esp32decode::utils::config::DEFAULT_ADDR2LINE;

/// Decode stack trace using addr2line.
#[derive(Parser, Debug)]
#[command(name = "esp32decode")]
#[command(about, long_about = None)]
struct Cli {
    /// Path to the ELF file.
    elf_file: PathBuf,

    /// Path to the addr2line tool (default is addr2line in system path)
    #[arg(short, long, default_value = DEFAULT_ADDR2LINE)]
    addr2line: PathBuf,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (RUST_LOG=debug for step-by-step output)
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = DecodeArgs {
        elf_file: cli.elf_file,
        addr2line: cli.addr2line,
    };

    validate_args(&args)?;

    let mut raw_trace = String::new();
    io::stdin()
        .read_to_string(&mut raw_trace)
        .context("Failed to read stack trace from stdin")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_decode(&args, &raw_trace, &mut out)?;

    Ok(())
}
