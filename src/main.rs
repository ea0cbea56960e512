//! RadioReddit - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use radioreddit::{
    cli::{Args, Command},
    config::{validate_config, validate_subreddits, Config},
    download::Converter,
    error::{exit_codes, Error, Result},
    fs::write_playlist,
    output::{
        create_spinner, print_banner, print_config_summary, print_error, print_info,
        print_run_stats, print_success, print_warning, RunStats,
    },
    server,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Fetch { .. }
                | Error::Decode { .. }
                | Error::UnsupportedListingType(_)
                | Error::MalformedListingData { .. }
                | Error::MissingUrlField(_)
                | Error::Http(_) => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::ToolInvocation { .. }
                | Error::ToolNotFound(_)
                | Error::NotExecutable(_)
                | Error::UnsupportedDomain(_)
                | Error::ConversionFailed(_)
                | Error::AlreadyExists(_)
                | Error::CreateDir { .. } => ExitCode::from(exit_codes::CONVERSION_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            args.config.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    match &args.command {
        Command::Convert(cmd) => {
            print_banner();
            let stats = convert_subreddits(&config).await?;
            if cmd.output.playlist {
                playlist(&config)?;
            }
            if stats.failed > 0 {
                return Ok(exit_codes::SOME_SUBREDDITS_FAILED);
            }
        }
        Command::ConvertUrl(cmd) => {
            let converter = Converter::from_config(&config)?;
            let spinner = create_spinner(&format!("Converting {}", cmd.url));
            let result = converter.create_mp3(&cmd.url).await;
            spinner.finish_and_clear();

            report_mp3(result?.as_deref());
            if cmd.output.playlist {
                playlist(&config)?;
            }
        }
        Command::Playlist(_) => playlist(&config)?,
        Command::Serve(_) => server::serve(&config).await?,
    }

    Ok(exit_codes::SUCCESS)
}

/// Convert one post from every configured subreddit.
async fn convert_subreddits(config: &Config) -> Result<RunStats> {
    let subreddits = &config.reddit.subreddits;
    validate_subreddits(subreddits)?;

    print_config_summary(
        subreddits,
        config.reddit.listing_type.as_str(),
        &config.mp3_dir().display().to_string(),
    );

    let converter = Converter::from_config(config)?;
    let mut stats = RunStats::default();

    for subreddit in subreddits {
        print_info(&format!("Processing subreddit: r/{}", subreddit));

        let spinner = create_spinner(&format!("Converting a post from r/{}", subreddit));
        let result = converter
            .create_mp3_from_subreddit(subreddit, config.reddit.listing_type)
            .await;
        spinner.finish_and_clear();

        match result {
            Ok(mp3) => {
                report_mp3(mp3.as_deref());
                stats.mark_converted();
            }
            Err(Error::AlreadyExists(path)) => {
                print_warning(&format!("{} already exists, skipping", path.display()));
                stats.mark_skipped();
            }
            Err(e) => {
                print_error(&format!("Failed to process r/{}: {}", subreddit, e));
                stats.mark_failed();
            }
        }
    }

    print_run_stats(&stats);
    Ok(stats)
}

fn report_mp3(mp3: Option<&std::path::Path>) {
    match mp3 {
        Some(path) => print_success(&format!("Wrote {}", path.display())),
        None => print_warning("Downloader finished without naming an output file"),
    }
}

fn playlist(config: &Config) -> Result<()> {
    let pls = write_playlist(
        &config.mp3_dir(),
        &config.playlist_file(),
        config.output.overwrite_playlist,
        config.output.recurse,
    )?;
    print_success(&format!("Wrote playlist {}", pls.display()));
    Ok(())
}
