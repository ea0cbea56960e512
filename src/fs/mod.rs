//! Filesystem module.
//!
//! Provides:
//! - mp3 directory management
//! - Playlist discovery and writing

pub mod paths;
pub mod playlist;

pub use paths::{default_playlist_path, ensure_mp3_dir};
pub use playlist::{find_files, write_playlist, Playlist, PlaylistEntry};
