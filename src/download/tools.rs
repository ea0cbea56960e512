//! Locating the external downloader binary.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Executable name looked up on PATH when no explicit path is configured.
pub const DOWNLOADER_NAME: &str = "youtube-dl";

/// Resolve the downloader binary.
///
/// Uses `explicit` when given, otherwise searches PATH. The result must be an
/// existing, executable regular file.
pub fn resolve_downloader(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => which::which(DOWNLOADER_NAME)
            .map_err(|_| Error::ToolNotFound(DOWNLOADER_NAME.to_string()))?,
    };

    if !path.is_file() {
        return Err(Error::ToolNotFound(path.display().to_string()));
    }

    if !is_executable(&path)? {
        return Err(Error::NotExecutable(path));
    }

    tracing::debug!("{} binary defined as {}", DOWNLOADER_NAME, path.display());
    Ok(path)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(path)?.permissions().mode();
    Ok(mode & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> Result<bool> {
    Ok(path.is_file())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tokio_test::assert_err;

    fn write_file(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn test_explicit_executable() {
        let dir = tempfile::tempdir().unwrap();
        let bin = write_file(dir.path(), "youtube-dl", 0o755);
        assert_eq!(resolve_downloader(Some(&bin)).unwrap(), bin);
    }

    #[test]
    fn test_explicit_not_executable() {
        let dir = tempfile::tempdir().unwrap();
        let bin = write_file(dir.path(), "youtube-dl", 0o644);
        let err = assert_err!(resolve_downloader(Some(&bin)));
        assert!(matches!(err, Error::NotExecutable(_)));
    }

    #[test]
    fn test_explicit_missing() {
        let err = resolve_downloader(Some(Path::new("/nonexistent/youtube-dl"))).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound(_)));
    }

    #[test]
    fn test_directory_is_not_a_downloader() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_downloader(Some(dir.path())).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound(_)));
    }
}
