//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Validate the settings every subcommand relies on.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_api_base(&config.reddit.api_base)?;

    if config.server.port == 0 {
        return Err(Error::ConfigValidation {
            field: "server.port".to_string(),
            message: "Port must be non-zero".to_string(),
        });
    }

    Ok(())
}

/// Validate the Reddit API root.
pub fn validate_api_base(api_base: &str) -> Result<()> {
    let url = url::Url::parse(api_base).map_err(|e| Error::ConfigValidation {
        field: "reddit.api_base".to_string(),
        message: format!("'{}' is not a valid URL: {}", api_base, e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::ConfigValidation {
            field: "reddit.api_base".to_string(),
            message: format!("Unsupported scheme '{}', expected http or https", scheme),
        }),
    }
}

/// Validate subreddit names.
pub fn validate_subreddits<S: AsRef<str>, I: IntoIterator<Item = S>>(subreddits: I) -> Result<()> {
    let subreddits: Vec<_> = subreddits.into_iter().collect();

    if subreddits.is_empty() {
        return Err(Error::ConfigValidation {
            field: "reddit.subreddits".to_string(),
            message: "At least one subreddit is required".to_string(),
        });
    }

    let subreddit_pattern = Regex::new(r"^[A-Za-z0-9_]{2,21}$")
        .map_err(|e| Error::Config(format!("Invalid subreddit pattern: {}", e)))?;

    for subreddit in subreddits {
        let subreddit = subreddit.as_ref();

        if !subreddit_pattern.is_match(subreddit) {
            return Err(Error::ConfigValidation {
                field: "reddit.subreddits".to_string(),
                message: format!(
                    "Subreddit '{}' is invalid. Use 2-21 alphanumeric characters or underscores.",
                    subreddit
                ),
            });
        }
    }

    Ok(())
}
