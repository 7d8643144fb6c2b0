//! Shorten the file paths in resolved frames.
//!
//! `addr2line --pretty-print` output looks like
//! `app_main at /home/user/esp/proj/main/main.c:42`. Build trees are deep, so a
//! shared leading directory is removed from every line before printing.
//!
//! The prefix is whichever is longer of:
//! 1. the common directory of all absolute file paths in the output
//! 2. the current working directory

use crate::utils::config::LOCATION_MARKER;
use log::debug;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

/// Collect the location part of every frame that has one
///
/// **Public** - input for `common_prefix`
///
/// The location is everything after the last space, so it still carries
/// the `:line` suffix.
pub fn candidate_paths(frames: &[String]) -> Vec<&str> {
    frames
        .iter()
        .filter(|frame| frame.contains(LOCATION_MARKER))
        .filter_map(|frame| frame.rsplit(' ').next())
        .collect()
}

/// Longest common path shared by all of `paths`, compared component-wise
///
/// **Public** - building block of `common_prefix`
///
/// Returns `None` for an empty input. Absolute and relative paths should
/// not be mixed; a mix yields a relative result at best.
pub fn common_path(paths: &[&str]) -> Option<PathBuf> {
    let (first, rest) = paths.split_first()?;

    let mut common = components(first);
    for path in rest {
        let other = components(path);
        let shared = common
            .iter()
            .zip(other.iter())
            .take_while(|(a, b)| a == b)
            .count();
        common.truncate(shared);
    }

    let mut result = if Path::new(first).has_root() {
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };
    result.extend(common);

    Some(result)
}

/// Path components that take part in the comparison
///
/// **Private** - root and `.` components are dropped
fn components(path: &str) -> Vec<&OsStr> {
    Path::new(path)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            Component::ParentDir => Some(OsStr::new("..")),
            Component::RootDir | Component::CurDir | Component::Prefix(_) => None,
        })
        .collect()
}

/// Choose the prefix to strip from every frame
///
/// **Public** - third stage of the decode pipeline
///
/// # Arguments
/// * `paths` - Candidate paths from `candidate_paths`
/// * `cwd` - Current working directory, if it could be determined
///
/// # Returns
/// The longer of the common absolute path and `cwd`, with a trailing `/`.
/// The common path wins ties. Returns an empty string when neither is known.
pub fn common_prefix(paths: &[&str], cwd: Option<&Path>) -> String {
    let absolute: Vec<&str> = paths
        .iter()
        .copied()
        .filter(|p| Path::new(p).is_absolute())
        .collect();

    let computed = common_path(&absolute)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let cwd = cwd
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!("Common path of {} absolute paths: {:?}, cwd: {:?}", absolute.len(), computed, cwd);

    let chosen = if cwd.len() > computed.len() { cwd } else { computed };

    if chosen.is_empty() {
        String::new()
    } else {
        format!("{}/", chosen)
    }
}

/// Remove every literal occurrence of `prefix` from `frame`
///
/// **Public** - frames without the prefix come back unchanged
pub fn strip_prefix(frame: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        frame.to_string()
    } else {
        frame.replace(prefix, "")
    }
}

/// Write each frame on its own line with `prefix` removed
///
/// **Public** - final output of the decode pipeline
pub fn print_frames<W: Write>(frames: &[String], prefix: &str, out: &mut W) -> io::Result<()> {
    for frame in frames {
        writeln!(out, "{}", strip_prefix(frame, prefix))?;
    }
    Ok(())
}
