//! Configuration module for radioreddit.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Listing type definitions
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, DownloaderConfig, OutputConfig, RedditConfig, ServerConfig};
pub use modes::ListingType;
pub use validation::{validate_api_base, validate_config, validate_subreddits};
