//! Filesystem probes for the host: directory listing, path resolution,
//! and file stat.
//!
//! Failures are reported per operation: listing a directory that cannot be
//! opened is an error, while resolution and stat report absence.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use lume_common::error::{LumeError, Result};
use lume_common::types::{FileInfo, FileKind};

/// Lists the entry names of a directory in the order the platform returns
/// them, without `.` and `..`.
///
/// # Errors
///
/// Returns `Io` if the directory cannot be opened or read.
pub fn list_dir(path: &Path) -> Result<Vec<String>> {
    tracing::debug!(path = %path.display(), "listing directory");
    let entries = std::fs::read_dir(path).map_err(|e| LumeError::io(path, e))?;
    entries
        .map(|entry| {
            entry
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .map_err(|e| LumeError::io(path, e))
        })
        .filter(|name| !matches!(name.as_deref(), Ok("." | "..")))
        .collect()
}

/// Resolves `path` to an absolute path, or `None` if it cannot be resolved.
///
/// On Unix the path must exist and symlinks are resolved. On Windows the
/// path is made absolute against the current directory without touching
/// the filesystem.
pub fn absolute_path(path: &Path) -> Option<PathBuf> {
    #[cfg(windows)]
    let resolved = std::path::absolute(path);
    #[cfg(not(windows))]
    let resolved = std::fs::canonicalize(path);

    resolved
        .inspect_err(|e| tracing::debug!(path = %path.display(), error = %e, "cannot resolve path"))
        .ok()
}

/// Returns size, modification time, and kind for `path`, or `None` if it
/// cannot be stat'ed.
pub fn file_info(path: &Path) -> Option<FileInfo> {
    let meta = std::fs::metadata(path)
        .inspect_err(|e| tracing::debug!(path = %path.display(), error = %e, "cannot stat"))
        .ok()?;

    let kind = if meta.is_file() {
        FileKind::File
    } else if meta.is_dir() {
        FileKind::Dir
    } else {
        FileKind::Unknown
    };
    let modified = meta.modified().map_or(0, |time| match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_secs()).map_or(i64::MIN, |s| -s),
    });

    Some(FileInfo {
        modified,
        size: meta.len(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_dir_returns_entry_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("a.txt"), "a").expect("write");
        std::fs::create_dir(dir.path().join("sub")).expect("mkdir");

        let mut names = list_dir(dir.path()).expect("list");
        names.sort();
        assert_eq!(names, vec!["a.txt", "sub"]);
    }

    #[test]
    fn list_dir_on_missing_directory_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = list_dir(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, LumeError::Io { .. }));
    }

    #[test]
    fn list_dir_on_empty_directory_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(list_dir(dir.path()).expect("list").is_empty());
    }

    #[test]
    fn absolute_path_resolves_relative_components() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("sub")).expect("mkdir");
        let dotted = dir.path().join("sub").join("..").join("sub");

        let resolved = absolute_path(&dotted).expect("resolve");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("sub"));
    }

    #[cfg(not(windows))]
    #[test]
    fn absolute_path_of_missing_file_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(absolute_path(&dir.path().join("nope")).is_none());
    }

    #[test]
    fn file_info_reports_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("f.txt");
        std::fs::write(&path, "hello").expect("write");

        let info = file_info(&path).expect("stat");
        assert_eq!(info.kind, FileKind::File);
        assert_eq!(info.size, 5);
        assert!(info.modified > 0);
    }

    #[test]
    fn file_info_reports_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let info = file_info(dir.path()).expect("stat");
        assert_eq!(info.kind, FileKind::Dir);
    }

    #[test]
    fn file_info_of_missing_path_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(file_info(&dir.path().join("missing")).is_none());
    }
}
