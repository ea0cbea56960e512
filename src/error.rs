//! Error types for the radioreddit application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Listing errors
    #[error("Unable to fetch response from {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Unable to decode JSON response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Listing type {0} not supported.")]
    UnsupportedListingType(String),

    #[error("Unable to index into {listing_type} listing data: {message}")]
    MalformedListingData {
        listing_type: String,
        message: String,
    },

    #[error("Unable to determine listing URL from {0}")]
    MissingUrlField(String),

    // External tool errors
    #[error("Failed to run {command}: {message}")]
    ToolInvocation { command: String, message: String },

    #[error("File not found: {0}")]
    ToolNotFound(String),

    #[error("{} is not executable", .0.display())]
    NotExecutable(PathBuf),

    #[error("Extraction domain {0} is not supported.")]
    UnsupportedDomain(String),

    #[error("Conversion failed: {}", .0.join("\n"))]
    ConversionFailed(Vec<String>),

    #[error("{} already exists, skipping.", .0.display())]
    AlreadyExists(PathBuf),

    // File system errors
    #[error("Failed to create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} exists, not overwriting.", .0.display())]
    PlaylistExists(PathBuf),

    #[error("Failed to write out playlist file {}: {source}", .path.display())]
    PlaylistWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const CONVERSION_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const SOME_SUBREDDITS_FAILED: i32 = 6;
}
