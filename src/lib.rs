//! esp32decode
//!
//! Firmware crash backtrace decoding for embedded targets.
//!
//! Reads `ip:sp` address pairs from a panic dump, resolves each
//! instruction pointer with an external `addr2line` and prints
//! the frames with the shared source path prefix removed.
//!
//! ## Getting Started
//!
//! ```bash
//! esp32decode build/app.elf < crash.txt
//! esp32decode -a xtensa-esp32-elf-addr2line build/app.elf < crash.txt
//! ```

pub mod commands;
pub mod extractor;
pub mod normalizer;
pub mod resolver;
pub mod utils;
