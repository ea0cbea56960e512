//! Checking candidate URLs against the downloader's extractor list.

use std::path::Path;

use crate::download::command::CommandRunner;
use crate::error::{Error, Result};

/// Parse `--list-extractors` output into lowercased extractor names.
///
/// Each line looks like `youtube:playlist` or `AdultSwim`; only the part
/// before the first `:` is kept.
pub fn parse_extractor_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.split(':').next().unwrap_or(line).to_lowercase())
        .collect()
}

/// Ask the downloader which extractor domains it supports.
///
/// The tool is queried on every call; nothing is cached.
pub async fn list_supported_domains(
    runner: &dyn CommandRunner,
    downloader: &Path,
) -> Result<Vec<String>> {
    let command = vec![
        downloader.display().to_string(),
        "--list-extractors".to_string(),
    ];
    let output = runner.run(&command).await?;
    let domains = parse_extractor_list(&output.stdout);

    if !output.success() && domains.is_empty() {
        return Err(Error::ToolInvocation {
            command: command.join(" "),
            message: format!(
                "exited with {:?}: {}",
                output.exit_code,
                output.stderr.trim()
            ),
        });
    }

    Ok(domains)
}

/// Whether `domain` matches any of the given extractor names.
///
/// Dots are removed from the candidate first so shorteners such as
/// `youtu.be` still match `youtube`.
pub fn match_domain<'a>(domain: &str, extractors: &'a [String]) -> Option<&'a str> {
    let stripped = domain.replace('.', "");
    extractors
        .iter()
        .inspect(|extractor| tracing::trace!("Checking if {} in {}", extractor, domain))
        .find(|extractor| stripped.contains(extractor.as_str()))
        .map(String::as_str)
}

/// Check that the downloader supports `domain`.
///
/// Returns `Ok(true)` on a match and fails with `UnsupportedDomain`
/// otherwise.
pub async fn is_domain_supported(
    runner: &dyn CommandRunner,
    domain: &str,
    downloader: &Path,
) -> Result<bool> {
    tracing::debug!("Checking if domain {} is supported", domain);
    let extractors = list_supported_domains(runner, downloader).await?;

    match match_domain(domain, &extractors) {
        Some(extractor) => {
            tracing::debug!("Extraction domain {} is supported by {}", domain, extractor);
            Ok(true)
        }
        None => Err(Error::UnsupportedDomain(domain.to_string())),
    }
}

/// Network location of a URL: the host, plus the port when one is explicit.
///
/// A URL that cannot be parsed has no domain to extract from and fails with
/// `UnsupportedDomain`.
pub fn domain_of(url: &str) -> Result<String> {
    let parsed = url::Url::parse(url).map_err(|e| {
        tracing::debug!("Cannot parse {}: {}", url, e);
        Error::UnsupportedDomain(url.to_string())
    })?;
    let host = parsed.host_str().unwrap_or_default();

    Ok(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::command::stub::RunnerStub;

    const EXTRACTORS: &str = "abc.net.au\nAdultSwim\nyoutube\nyoutube:playlist\nYoutube:tab\nsoundcloud:set\n";

    #[test]
    fn test_parse_extractor_list() {
        let domains = parse_extractor_list(EXTRACTORS);
        assert_eq!(
            domains,
            vec!["abc.net.au", "adultswim", "youtube", "youtube", "youtube", "soundcloud"]
        );
    }

    #[test]
    fn test_match_domain_strips_dots() {
        let extractors = parse_extractor_list(EXTRACTORS);
        assert_eq!(match_domain("youtu.be", &extractors), Some("youtube"));
        assert_eq!(match_domain("www.youtube.com", &extractors), Some("youtube"));
        assert_eq!(match_domain("asdf.asdf", &extractors), None);
    }

    #[tokio::test]
    async fn test_domain_supported() {
        let runner = RunnerStub::new().respond("--list-extractors", 0, EXTRACTORS, "");
        let supported = is_domain_supported(&runner, "youtube.com", Path::new("/bin/youtube-dl"))
            .await
            .unwrap();
        assert!(supported);
        assert_eq!(
            runner.calls(),
            vec![vec!["/bin/youtube-dl".to_string(), "--list-extractors".to_string()]]
        );
    }

    #[tokio::test]
    async fn test_domain_not_supported() {
        let runner = RunnerStub::new().respond("--list-extractors", 0, EXTRACTORS, "");
        let err = is_domain_supported(&runner, "asdf.asdf", Path::new("youtube-dl"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedDomain(ref d) if d == "asdf.asdf"));
    }

    #[tokio::test]
    async fn test_failed_listing_without_output() {
        let runner = RunnerStub::new().respond("--list-extractors", 2, "", "boom");
        let err = list_supported_domains(&runner, Path::new("youtube-dl"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ToolInvocation { .. }));
    }

    #[tokio::test]
    async fn test_failed_listing_with_output_is_usable() {
        let runner = RunnerStub::new().respond("--list-extractors", 1, "youtube\n", "warning");
        let domains = list_supported_domains(&runner, Path::new("youtube-dl"))
            .await
            .unwrap();
        assert_eq!(domains, vec!["youtube"]);
    }

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of("https://youtu.be/abc").unwrap(), "youtu.be");
        assert_eq!(
            domain_of("http://www.youtube.com:8080/watch?v=1").unwrap(),
            "www.youtube.com:8080"
        );
        let err = domain_of("youtu.be/abc").unwrap_err();
        assert!(matches!(err, Error::UnsupportedDomain(ref u) if u == "youtu.be/abc"));
    }
}
