//! Download module for audio conversion.
//!
//! This module provides:
//! - Downloader binary lookup
//! - Child process execution
//! - Extractor domain checks
//! - Downloader output parsing
//! - The subreddit to mp3 pipeline

pub mod command;
pub mod convert;
pub mod extractors;
pub mod outcome;
pub mod tools;

pub use command::{CommandOutput, CommandRunner, ProcessRunner};
pub use convert::{build_downloader_command, run_conversion, Converter};
pub use extractors::{domain_of, is_domain_supported, list_supported_domains, parse_extractor_list};
pub use outcome::{parse_outcome, ConversionOutcome};
pub use tools::{resolve_downloader, DOWNLOADER_NAME};
