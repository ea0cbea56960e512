//! Subreddit to mp3 conversion pipeline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::RedditApi;
use crate::config::{Config, ListingType};
use crate::download::command::{CommandRunner, ProcessRunner};
use crate::download::extractors::{domain_of, is_domain_supported};
use crate::download::outcome::{parse_outcome, ConversionOutcome};
use crate::download::tools::resolve_downloader;
use crate::error::Result;
use crate::fs::ensure_mp3_dir;

/// Build the downloader command line for one URL.
///
/// The first element is the downloader itself and the last is the URL.
pub fn build_downloader_command(url: &str, dest_dir: &Path, downloader: &Path) -> Vec<String> {
    let command = vec![
        downloader.display().to_string(),
        "--extract-audio".to_string(),
        "--audio-format=mp3".to_string(),
        format!("--output={}/%(title)s.%(ext)s", dest_dir.display()),
        "--restrict-filenames".to_string(),
        "--verbose".to_string(),
        url.to_string(),
    ];
    tracing::debug!("youtube-dl command defined as: {}", command.join(" "));
    command
}

/// Run the downloader for `url` and interpret its output.
///
/// When `create_dest_dir` is false a missing `dest_dir` is left for the
/// downloader to fail on.
pub async fn run_conversion(
    runner: &dyn CommandRunner,
    url: &str,
    dest_dir: &Path,
    downloader: &Path,
    create_dest_dir: bool,
) -> Result<ConversionOutcome> {
    ensure_mp3_dir(dest_dir, create_dest_dir)?;

    let command = build_downloader_command(url, dest_dir, downloader);
    let output = runner.run(&command).await?;
    let outcome = parse_outcome(output.exit_code, &output.stdout, &output.stderr);

    match &outcome {
        ConversionOutcome::Failed(lines) => {
            for line in lines {
                tracing::error!("{}", line);
            }
        }
        ConversionOutcome::SkippedExisting(path) => {
            tracing::warn!("{} already exists, skipping", path.display());
        }
        ConversionOutcome::Success(Some(path)) => {
            tracing::debug!("Successfully wrote mp3 file {}", path.display());
        }
        ConversionOutcome::Success(None) => {
            tracing::warn!("Downloader finished without reporting an output file");
        }
    }

    Ok(outcome)
}

/// Ties the listing client, extractor gate and downloader together.
pub struct Converter {
    api: RedditApi,
    runner: Arc<dyn CommandRunner>,
    downloader: PathBuf,
    mp3_dir: PathBuf,
    create_mp3_dir: bool,
}

impl Converter {
    /// Build a converter from configuration, resolving the downloader binary.
    pub fn from_config(config: &Config) -> Result<Self> {
        let downloader = resolve_downloader(config.downloader.path.as_deref())?;
        let api = RedditApi::new(config.reddit.api_base.clone())?;

        Ok(Self::new(
            api,
            Arc::new(ProcessRunner),
            downloader,
            config.mp3_dir(),
            config.output.create_mp3_dir,
        ))
    }

    /// Build a converter from explicit parts.
    pub fn new(
        api: RedditApi,
        runner: Arc<dyn CommandRunner>,
        downloader: PathBuf,
        mp3_dir: PathBuf,
        create_mp3_dir: bool,
    ) -> Self {
        tracing::debug!("Destination directory defined as {}", mp3_dir.display());
        Self {
            api,
            runner,
            downloader,
            mp3_dir,
            create_mp3_dir,
        }
    }

    /// Convert a media URL to an mp3 in the mp3 directory.
    ///
    /// Fails with `UnsupportedDomain` before running the conversion when the
    /// downloader has no extractor for the URL's domain. An already existing
    /// output file is reported as `AlreadyExists`.
    pub async fn create_mp3(&self, url: &str) -> Result<Option<PathBuf>> {
        let domain = domain_of(url)?;
        is_domain_supported(self.runner.as_ref(), &domain, &self.downloader).await?;

        run_conversion(
            self.runner.as_ref(),
            url,
            &self.mp3_dir,
            &self.downloader,
            self.create_mp3_dir,
        )
        .await?
        .into_result()
    }

    /// Pick a post from `subreddit` and convert the media it links to.
    pub async fn create_mp3_from_subreddit(
        &self,
        subreddit: &str,
        listing_type: ListingType,
    ) -> Result<Option<PathBuf>> {
        let listing = self.api.listing(subreddit, listing_type).await?;
        if let Some(title) = listing.title() {
            tracing::info!("Picked post \"{}\" from r/{}", title, subreddit);
        }
        self.create_mp3(&listing.target_url).await
    }
}
