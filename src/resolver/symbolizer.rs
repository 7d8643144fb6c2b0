//! Process boundary to the symbolizer executable.

use crate::utils::config::ADDR2LINE_FLAGS;
use crate::utils::error::ResolveError;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Anything that can turn an instruction pointer into a frame description
///
/// **Public** - implemented by [`Addr2Line`]; tests provide in-memory versions
pub trait Symbolizer {
    /// Resolve one address, returning the tool's trimmed output
    fn symbolize(&self, ip: &str) -> Result<String, ResolveError>;
}

/// Runs `addr2line` once per address
///
/// **Public** - constructed by the decode command from CLI args
#[derive(Debug, Clone)]
pub struct Addr2Line {
    program: PathBuf,
    elf_file: PathBuf,
}

impl Addr2Line {
    /// `program` is either an explicit path or a bare name looked up on `PATH`
    pub fn new(program: impl Into<PathBuf>, elf_file: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            elf_file: elf_file.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn elf_file(&self) -> &Path {
        &self.elf_file
    }

    /// Build the command line for a single address
    ///
    /// **Private** - exposed to tests through `symbolize`
    fn command(&self, ip: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-e").arg(&self.elf_file).args(ADDR2LINE_FLAGS).arg(ip);
        cmd
    }
}

impl Symbolizer for Addr2Line {
    fn symbolize(&self, ip: &str) -> Result<String, ResolveError> {
        debug!("Running {} for {}", self.program.display(), ip);

        // Exit status is not checked: whatever reached stdout is still used.
        let output = self.command(ip).output()?;

        if !output.status.success() {
            debug!(
                "{} exited with {} for {}: {}",
                self.program.display(),
                output.status,
                ip,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
