//! PLS playlist discovery and writing.
//!
//! <https://en.wikipedia.org/wiki/PLS_(file_format)>

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// One `File<index>=<path>` line of a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    /// 1-based position in the playlist.
    pub index: usize,
    pub path: PathBuf,
}

/// An in-memory PLS playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    pub entries: Vec<PlaylistEntry>,
}

impl Playlist {
    /// Build a playlist keeping the order of `paths`.
    pub fn from_paths<I: IntoIterator<Item = PathBuf>>(paths: I) -> Self {
        let entries = paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| PlaylistEntry { index: i + 1, path })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[playlist]")?;
        writeln!(f, "NumberOfEntries={}", self.len())?;
        for entry in &self.entries {
            writeln!(f, "File{}={}", entry.index, entry.path.display())?;
        }
        Ok(())
    }
}

/// Find files named `*.{extension}` under `root`.
///
/// Files of a directory come in directory iteration order and before its
/// subdirectories. With `recurse` each subdirectory's files follow, depth
/// first. Without it only `root` itself is scanned. Symlinked directories are
/// not followed. Unreadable or missing directories are skipped with a warning.
pub fn find_files(root: &Path, extension: &str, recurse: bool) -> Vec<PathBuf> {
    tracing::debug!("Searching for files in {}", root.display());
    let suffix = format!(".{}", extension);

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));
    if !recurse {
        walker = walker.max_depth(1);
    }

    walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| {
            let file_type = entry.file_type();
            file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
        })
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(&suffix))
        .map(|entry| {
            tracing::debug!("Found file {}", entry.path().display());
            entry.into_path()
        })
        .collect()
}

/// Write a playlist of the mp3 files in `mp3_dir` to `playlist_path`.
///
/// With `overwrite` off an existing playlist is left untouched and
/// `PlaylistExists` is returned.
pub fn write_playlist(
    mp3_dir: &Path,
    playlist_path: &Path,
    overwrite: bool,
    recurse: bool,
) -> Result<PathBuf> {
    if !overwrite && playlist_path.is_file() {
        return Err(Error::PlaylistExists(playlist_path.to_path_buf()));
    }

    let playlist = Playlist::from_paths(find_files(mp3_dir, "mp3", recurse));

    tracing::debug!(
        "Writing {} entries out to {}",
        playlist.len(),
        playlist_path.display()
    );
    fs::write(playlist_path, playlist.to_string()).map_err(|source| Error::PlaylistWrite {
        path: playlist_path.to_path_buf(),
        source,
    })?;

    Ok(playlist_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"ID3").unwrap();
    }

    #[test]
    fn test_render() {
        let playlist = Playlist::from_paths(vec![
            PathBuf::from("/music/a.mp3"),
            PathBuf::from("/music/b.mp3"),
        ]);
        assert_eq!(
            playlist.to_string(),
            "[playlist]\nNumberOfEntries=2\nFile1=/music/a.mp3\nFile2=/music/b.mp3\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            Playlist::default().to_string(),
            "[playlist]\nNumberOfEntries=0\n"
        );
    }

    #[test]
    fn test_find_files_matches_extension_case_sensitively() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.mp3"));
        touch(&dir.path().join("b.MP3"));
        touch(&dir.path().join("c.mp3.part"));
        touch(&dir.path().join("notes.txt"));

        let files = find_files(dir.path(), "mp3", false);
        assert_eq!(files, vec![dir.path().join("a.mp3")]);
    }

    #[test]
    fn test_find_files_recursion() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("album").join("disc1");
        fs::create_dir_all(&nested).unwrap();
        touch(&dir.path().join("top.mp3"));
        touch(&nested.join("deep.mp3"));

        let flat = find_files(dir.path(), "mp3", false);
        assert_eq!(flat, vec![dir.path().join("top.mp3")]);

        let all = find_files(dir.path(), "mp3", true);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], dir.path().join("top.mp3"));
        assert_eq!(all[1], nested.join("deep.mp3"));
    }

    #[test]
    fn test_find_files_lists_files_before_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        for sub in ["a_album", "m_album"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
            touch(&dir.path().join(sub).join("track.mp3"));
        }
        touch(&dir.path().join("b_single.mp3"));
        touch(&dir.path().join("z_single.mp3"));

        let all = find_files(dir.path(), "mp3", true);
        assert_eq!(all.len(), 4);
        assert!(all[..2].iter().all(|p| p.parent() == Some(dir.path())));
        assert!(all[2..].iter().all(|p| p.parent() != Some(dir.path())));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_files_skips_symlinked_directories() {
        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        touch(&outside.path().join("elsewhere.mp3"));
        std::os::unix::fs::symlink(outside.path(), dir.path().join("linked.mp3")).unwrap();
        std::os::unix::fs::symlink(
            outside.path().join("elsewhere.mp3"),
            dir.path().join("alias.mp3"),
        )
        .unwrap();

        let files = find_files(dir.path(), "mp3", true);
        assert_eq!(files, vec![dir.path().join("alias.mp3")]);
    }

    #[test]
    fn test_find_files_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_files(&dir.path().join("no_such_dir"), "mp3", true).is_empty());
    }

    #[test]
    fn test_write_playlist_for_missing_mp3_dir() {
        let dir = tempfile::tempdir().unwrap();
        let pls = dir.path().join("out.pls");

        let written = write_playlist(&dir.path().join("no_such_dir"), &pls, true, false).unwrap();
        assert_eq!(written, pls);
        assert_eq!(
            fs::read_to_string(&pls).unwrap(),
            "[playlist]\nNumberOfEntries=0\n"
        );
    }

    #[test]
    fn test_write_playlist() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["one.mp3", "two.mp3", "three.mp3"] {
            touch(&dir.path().join(name));
        }
        let pls = dir.path().join("music.pls");

        let written = write_playlist(dir.path(), &pls, true, false).unwrap();
        assert_eq!(written, pls);

        let content = fs::read_to_string(&pls).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "[playlist]");
        assert_eq!(lines[1], "NumberOfEntries=3");
        assert_eq!(lines.len(), 5);
        for (i, line) in lines[2..].iter().enumerate() {
            let prefix = format!("File{}=", i + 1);
            assert!(line.starts_with(&prefix), "{}", line);
            assert!(line.ends_with(".mp3"));
        }
    }

    #[test]
    fn test_write_playlist_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("one.mp3"));
        let pls = dir.path().join("music.pls");
        fs::write(&pls, b"keep me").unwrap();

        let err = write_playlist(dir.path(), &pls, false, false).unwrap_err();
        assert!(matches!(err, Error::PlaylistExists(_)));
        assert_eq!(fs::read(&pls).unwrap(), b"keep me");
    }

    #[test]
    fn test_write_playlist_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let pls = dir.path().join("music.pls");
        fs::write(&pls, b"old").unwrap();

        write_playlist(dir.path(), &pls, true, false).unwrap();
        assert_eq!(
            fs::read_to_string(&pls).unwrap(),
            "[playlist]\nNumberOfEntries=0\n"
        );
    }

    #[test]
    fn test_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let pls = dir.path().join("missing").join("music.pls");

        let err = write_playlist(dir.path(), &pls, true, false).unwrap_err();
        assert!(matches!(err, Error::PlaylistWrite { .. }));
    }
}
