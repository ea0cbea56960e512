//! Configuration structures and loading logic.

use crate::config::modes::ListingType;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default Reddit API root.
pub const DEFAULT_API_BASE: &str = "https://www.reddit.com";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reddit: RedditConfig,

    #[serde(default)]
    pub downloader: DownloaderConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Reddit listing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditConfig {
    /// Reddit API root, without trailing slash.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Listing query used to pick a post.
    #[serde(default)]
    pub listing_type: ListingType,

    /// Subreddits to convert from.
    #[serde(default)]
    pub subreddits: Vec<String>,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            listing_type: ListingType::default(),
            subreddits: Vec::new(),
        }
    }
}

/// External downloader configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloaderConfig {
    /// Path to the youtube-dl binary. Looked up on PATH when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output locations for mp3 files and playlists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory mp3 files are written to.
    #[serde(default)]
    pub mp3_dir: Option<PathBuf>,

    /// Whether to create the mp3 directory when it is missing.
    #[serde(default = "default_true")]
    pub create_mp3_dir: bool,

    /// Playlist path. Defaults to `<mp3_dir>/<basename>.pls`.
    #[serde(default)]
    pub playlist_file: Option<PathBuf>,

    /// Whether an existing playlist may be replaced.
    #[serde(default = "default_true")]
    pub overwrite_playlist: bool,

    /// Whether to search subdirectories of the mp3 directory.
    #[serde(default)]
    pub recurse: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mp3_dir: None,
            create_mp3_dir: true,
            playlist_file: None,
            overwrite_playlist: true,
            recurse: false,
        }
    }
}

/// File server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective mp3 directory.
    pub fn mp3_dir(&self) -> PathBuf {
        self.output
            .mp3_dir
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Get the effective playlist path.
    pub fn playlist_file(&self) -> PathBuf {
        self.output
            .playlist_file
            .clone()
            .unwrap_or_else(|| crate::fs::default_playlist_path(&self.mp3_dir()))
    }

    /// Address the file server binds to.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}
