/*!
 * Tracked-file listing
 *
 * A lister answers "which files belong to the project under this directory",
 * returning paths relative to that directory in a stable order.
 */

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use ignore::WalkBuilder;
use strum::Display;
use walkdir::WalkDir;

use crate::error::Result;
use crate::git::GitIndexLister;

/// Source of the tracked-file list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ListSource {
    /// Files in the git index (what `git ls-files` shows)
    #[default]
    Git,
    /// Files on disk, honouring .gitignore and skipping hidden entries
    Gitignore,
    /// Every file on disk except .git directories
    All,
}

impl ListSource {
    /// Build the lister for this source
    pub fn lister(self) -> Box<dyn TrackedFileLister> {
        match self {
            Self::Git => Box::new(GitIndexLister),
            Self::Gitignore => Box::new(GitignoreWalkLister),
            Self::All => Box::new(AllFilesLister),
        }
    }
}

/// Lists the files considered part of the project under a directory
pub trait TrackedFileLister {
    /// Paths relative to `dir`; failure means `dir` cannot be listed at all
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>>;
}

/// Filesystem walk that applies .gitignore, .ignore and git exclude rules
#[derive(Debug, Clone, Copy, Default)]
pub struct GitignoreWalkLister;

impl TrackedFileLister for GitignoreWalkLister {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut walker = WalkBuilder::new(dir);
        walker
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        let mut files = Vec::new();
        for entry in walker.build() {
            let entry = entry?;
            if !entry.file_type().map_or(false, |ft| ft.is_file()) {
                continue;
            }
            if let Ok(rel) = entry.path().strip_prefix(dir) {
                files.push(rel.to_path_buf());
            }
        }
        Ok(files)
    }
}

/// Plain filesystem walk of every file
#[derive(Debug, Clone, Copy, Default)]
pub struct AllFilesLister;

impl TrackedFileLister for AllFilesLister {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.file_name() != ".git");

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(rel) = entry.path().strip_prefix(dir) {
                files.push(rel.to_path_buf());
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git").join("HEAD"), "ref: refs/heads/main\n").unwrap();
        fs::write(dir.path().join(".gitignore"), "*.log\n").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("debug.log"), "noise").unwrap();
        fs::write(dir.path().join("src").join("main.rs"), "fn main() {}").unwrap();
        dir
    }

    fn names(paths: Vec<PathBuf>) -> Vec<String> {
        paths.iter().map(|p| crate::utils::to_slash(p)).collect()
    }

    #[test]
    fn test_all_files_lister() {
        let dir = setup();
        let files = AllFilesLister.list(dir.path()).unwrap();
        assert_eq!(
            names(files),
            vec![".gitignore", "a.txt", "b.txt", "debug.log", "src/main.rs"]
        );
    }

    #[test]
    fn test_gitignore_lister_applies_rules() {
        let dir = setup();
        let files = GitignoreWalkLister.list(dir.path()).unwrap();
        assert_eq!(names(files), vec!["a.txt", "b.txt", "src/main.rs"]);
    }

    #[test]
    fn test_walk_of_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(AllFilesLister.list(&missing).is_err());
    }

    #[test]
    fn test_list_source_display() {
        assert_eq!(ListSource::Git.to_string(), "git");
        assert_eq!(ListSource::Gitignore.to_string(), "gitignore");
        assert_eq!(ListSource::default(), ListSource::Git);
    }
}
