/*!
 * Filesystem access used by the scanner
 */

use std::fs;
use std::io;
use std::path::Path;

/// Stat and read capabilities needed to render a directory
pub trait FileSystem {
    /// Whether `path` itself is a directory. Symlinks are not followed and
    /// any failure reads as `false`.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read the whole file
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_dir_on_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(OsFileSystem.is_dir(dir.path()));
        assert!(!OsFileSystem.is_dir(&dir.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_dir_does_not_follow_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target");
        fs::create_dir(&target).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(OsFileSystem.is_dir(&target));
        assert!(!OsFileSystem.is_dir(&link));
    }

    #[test]
    fn test_read_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hi").unwrap();
        assert_eq!(OsFileSystem.read_bytes(&path).unwrap(), b"hi");
    }
}
