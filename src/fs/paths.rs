//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default playlist location: `<mp3_dir>/<basename of mp3_dir>.pls`.
pub fn default_playlist_path(mp3_dir: &Path) -> PathBuf {
    let name = mp3_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let path = mp3_dir.join(format!("{}.pls", name));
    tracing::debug!("Playlist file defined as {}", path.display());
    path
}

/// Make sure the mp3 directory exists.
///
/// Returns `true` when the directory exists or was created, `false` when it is
/// missing and `create` is off.
pub fn ensure_mp3_dir(mp3_dir: &Path, create: bool) -> Result<bool> {
    if mp3_dir.is_dir() {
        return Ok(true);
    }

    tracing::warn!("Destination directory {} does not exist", mp3_dir.display());
    if !create {
        return Ok(false);
    }

    std::fs::create_dir_all(mp3_dir).map_err(|source| Error::CreateDir {
        path: mp3_dir.to_path_buf(),
        source,
    })?;
    tracing::debug!("Created directory {}", mp3_dir.display());

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[test]
    fn test_default_playlist_path() {
        assert_eq!(
            default_playlist_path(Path::new("/srv/music")),
            PathBuf::from("/srv/music/music.pls")
        );
        assert_eq!(
            default_playlist_path(Path::new("/tmp")),
            PathBuf::from("/tmp/tmp.pls")
        );
    }

    #[test]
    fn test_existing_dir() {
        assert!(ensure_mp3_dir(Path::new("/"), false).unwrap());
    }

    #[test]
    fn test_missing_dir_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("DOES_NOT_EXIST");
        assert!(!ensure_mp3_dir(&missing, false).unwrap());
        assert!(!missing.exists());
    }

    #[test]
    fn test_missing_dir_created() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b");
        assert!(assert_ok!(ensure_mp3_dir(&target, true)));
        assert!(target.is_dir());
    }
}
