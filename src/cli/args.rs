//! Command-line argument definitions using clap.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, ListingType};

/// Subreddit to mp3 converter, playlist writer and file server.
#[derive(Parser, Debug)]
#[command(
    name = "radioreddit",
    version,
    about = "Turn subreddit posts into mp3 files and PLS playlists",
    long_about = "Fetches a random or top post from a subreddit, converts the media it links to \
                  into an mp3 with youtube-dl, writes PLS playlists of the results and serves \
                  them over HTTP."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, default_value = "radioreddit.toml", global = true)]
    pub config: PathBuf,

    /// Path to the youtube-dl binary.
    #[arg(long = "ytdl-bin", env = "RADIOREDDIT_YTDL_BIN", global = true)]
    pub ytdl_bin: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a post from each subreddit into an mp3.
    Convert(ConvertArgs),
    /// Convert a single media URL into an mp3.
    ConvertUrl(ConvertUrlArgs),
    /// Write a PLS playlist of the mp3 files in a directory.
    Playlist(PlaylistArgs),
    /// Serve files over HTTP.
    Serve(ServeArgs),
}

/// Output options shared by the conversion subcommands.
#[derive(ClapArgs, Debug, Default)]
pub struct OutputArgs {
    /// Directory mp3 files are written to.
    #[arg(short = 'd', long = "directory")]
    pub mp3_dir: Option<PathBuf>,

    /// Don't create the mp3 directory when it is missing.
    #[arg(long)]
    pub no_create_dir: bool,

    /// Rewrite the playlist after converting.
    #[arg(long)]
    pub playlist: bool,
}

/// Arguments for `convert`.
#[derive(ClapArgs, Debug)]
pub struct ConvertArgs {
    /// Subreddit(s) to pick posts from.
    #[arg(short, long, num_args = 1..)]
    pub subreddit: Option<Vec<String>>,

    /// Listing query used to pick a post.
    #[arg(short, long, value_enum)]
    pub listing: Option<ListingType>,

    /// Reddit API root.
    #[arg(long)]
    pub api_base: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `convert-url`.
#[derive(ClapArgs, Debug)]
pub struct ConvertUrlArgs {
    /// Media URL to convert.
    pub url: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `playlist`.
#[derive(ClapArgs, Debug)]
pub struct PlaylistArgs {
    /// Directory to search for mp3 files.
    #[arg(short = 'd', long = "directory")]
    pub mp3_dir: Option<PathBuf>,

    /// Playlist file to write.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail instead of replacing an existing playlist.
    #[arg(long)]
    pub no_overwrite: bool,

    /// Search subdirectories too.
    #[arg(short, long)]
    pub recurse: bool,
}

/// Arguments for `serve`.
#[derive(ClapArgs, Debug)]
pub struct ServeArgs {
    /// Address to bind to.
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on.
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl OutputArgs {
    fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.mp3_dir {
            config.output.mp3_dir = Some(dir.clone());
        }

        if self.no_create_dir {
            config.output.create_mp3_dir = false;
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(ytdl_bin) = &self.ytdl_bin {
            config.downloader.path = Some(ytdl_bin.clone());
        }

        match &self.command {
            Command::Convert(args) => {
                if let Some(subreddits) = &args.subreddit {
                    config.reddit.subreddits = subreddits.clone();
                }

                if let Some(listing) = args.listing {
                    config.reddit.listing_type = listing;
                }

                if let Some(api_base) = &args.api_base {
                    config.reddit.api_base = api_base.clone();
                }

                args.output.merge_into_config(config);
            }
            Command::ConvertUrl(args) => args.output.merge_into_config(config),
            Command::Playlist(args) => {
                if let Some(dir) = &args.mp3_dir {
                    config.output.mp3_dir = Some(dir.clone());
                }

                if let Some(output) = &args.output {
                    config.output.playlist_file = Some(output.clone());
                }

                if args.no_overwrite {
                    config.output.overwrite_playlist = false;
                }

                if args.recurse {
                    config.output.recurse = true;
                }
            }
            Command::Serve(args) => {
                if let Some(bind) = &args.bind {
                    config.server.bind = bind.clone();
                }

                if let Some(port) = args.port {
                    config.server.port = port;
                }
            }
        }
    }
}
