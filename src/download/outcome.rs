//! Interpreting the downloader's log output.
//!
//! The downloader has no machine-readable result, so the outcome is read off
//! marker substrings in its verbose log. A downloader release that rewords
//! these lines breaks this parsing.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Stderr lines reporting a failure start with this.
const ERROR_MARKER: &str = "ERROR";

/// Stdout line emitted when the converted file is already on disk.
const POST_PROCESS_MARKER: &str = "Post-process file";
const SKIPPING_SUFFIX: &str = "skipping";

/// Stdout line emitted by the audio conversion step with the output path.
const DESTINATION_MARKER: &str = "[ffmpeg] Destination:";

/// Result of one conversion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The tool exited cleanly. Holds the written file when the log named it.
    Success(Option<PathBuf>),
    /// The target file already existed and the tool left it alone.
    SkippedExisting(PathBuf),
    /// The tool exited non-zero.
    Failed(Vec<String>),
}

impl ConversionOutcome {
    /// Convert into a `Result`. An existing file counts as an error.
    pub fn into_result(self) -> Result<Option<PathBuf>> {
        match self {
            ConversionOutcome::Success(path) => Ok(path),
            ConversionOutcome::SkippedExisting(path) => Err(Error::AlreadyExists(path)),
            ConversionOutcome::Failed(lines) => Err(Error::ConversionFailed(lines)),
        }
    }
}

/// Map a finished downloader run to its outcome.
pub fn parse_outcome(exit_code: Option<i32>, stdout: &str, stderr: &str) -> ConversionOutcome {
    if exit_code != Some(0) {
        return ConversionOutcome::Failed(error_lines(stderr));
    }

    for line in stdout.lines() {
        if line.contains(POST_PROCESS_MARKER) && line.ends_with(SKIPPING_SUFFIX) {
            if let Some(path) = existing_path(line) {
                return ConversionOutcome::SkippedExisting(PathBuf::from(path));
            }
        } else if line.contains(DESTINATION_MARKER) {
            if let Some((_, path)) = line.split_once(": ") {
                return ConversionOutcome::Success(Some(PathBuf::from(path)));
            }
        }
    }

    ConversionOutcome::Success(None)
}

/// Lines of stderr starting with the error marker, or every non-empty line
/// when none do.
fn error_lines(stderr: &str) -> Vec<String> {
    let marked: Vec<String> = stderr
        .lines()
        .filter(|line| line.starts_with(ERROR_MARKER))
        .map(str::to_string)
        .collect();

    if !marked.is_empty() {
        return marked;
    }

    stderr
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// The token right before ` exists` in a post-process line.
fn existing_path(line: &str) -> Option<&str> {
    line.split(" exists").next()?.split_whitespace().last()
}
