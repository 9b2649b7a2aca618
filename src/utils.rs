/*!
 * Utility functions for codeclip
 */

use std::fs;
use std::path::{Component, Path};

/// Join the normal components of `path` with `/`, whatever the platform separator
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::RootDir => Some("".into()),
            Component::Normal(s) => Some(s.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Name of the project rooted at `root`.
///
/// Uses the final component of the canonical path so that `.` resolves to
/// the directory name. Falls back to the path as given when it cannot be
/// canonicalized.
pub fn project_name(root: &Path) -> String {
    let resolved = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| resolved.to_string_lossy().to_string())
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_to_slash() {
        let path: PathBuf = ["sub", "dir", "c.txt"].iter().collect();
        assert_eq!(to_slash(&path), "sub/dir/c.txt");
        assert_eq!(to_slash(Path::new("./a.txt")), "a.txt");
        #[cfg(unix)]
        assert_eq!(to_slash(Path::new("/tmp/a.txt")), "/tmp/a.txt");
    }

    #[test]
    fn test_project_name_resolves_dot() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("my-project");
        fs::create_dir(&project).unwrap();

        assert_eq!(project_name(&project), "my-project");
        assert_eq!(project_name(&project.join(".")), "my-project");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }
}
