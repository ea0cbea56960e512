//! RadioReddit - subreddit posts in, mp3 files and playlists out.
//!
//! This library provides the pieces behind the `radioreddit` CLI.
//!
//! # Features
//!
//! - Pick a random or top post from a subreddit listing
//! - Check the linked domain against youtube-dl's extractors
//! - Convert the linked media to mp3 with youtube-dl
//! - Write PLS playlists of a directory of mp3 files
//! - Serve playlists and mp3 files over HTTP
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use radioreddit::{Config, Converter, ListingType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("radioreddit.toml"))?;
//!     let converter = Converter::from_config(&config)?;
//!
//!     let mp3 = converter
//!         .create_mp3_from_subreddit("jazznoir", ListingType::Random)
//!         .await?;
//!     println!("{:?}", mp3);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod server;

// Re-exports for convenience
pub use api::{ListingResult, RedditApi};
pub use config::{Config, ListingType};
pub use download::{ConversionOutcome, Converter};
pub use error::{Error, Result};
pub use fs::{write_playlist, Playlist};
