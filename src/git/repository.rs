/*!
 * Git repository operations
 */

use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository as Git2Repository;

use super::error::{GitError, GitResult};

/// A discovered repository with a work tree
pub struct Repository {
    /// Inner git2 repository instance
    inner: Git2Repository,
    /// Canonical work tree root
    workdir: PathBuf,
}

impl Repository {
    /// Find the repository containing `path`, searching parent directories
    pub fn discover(path: &Path) -> GitResult<Self> {
        let inner = Git2Repository::discover(path).map_err(|source| GitError::NotARepository {
            path: path.to_path_buf(),
            source,
        })?;

        let workdir = match inner.workdir() {
            Some(dir) => fs::canonicalize(dir)?,
            None => return Err(GitError::BareRepository(inner.path().to_path_buf())),
        };

        Ok(Self { inner, workdir })
    }

    /// Get path to the work tree
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Index entries below `dir`, relative to `dir`, in index order.
    ///
    /// Conflicted paths appear once even though the index holds one entry
    /// per stage. A submodule shows up as a single path.
    pub fn tracked_files(&self, dir: &Path) -> GitResult<Vec<PathBuf>> {
        let dir = fs::canonicalize(dir)?;
        let prefix = dir
            .strip_prefix(&self.workdir)
            .map_err(|_| GitError::OutsideWorkTree {
                path: dir.clone(),
                workdir: self.workdir.clone(),
            })?;

        let index = self.inner.index().map_err(GitError::IndexError)?;

        let mut files: Vec<PathBuf> = Vec::with_capacity(index.len());
        for entry in index.iter() {
            let path = String::from_utf8_lossy(&entry.path);
            let Ok(rel) = Path::new(path.as_ref()).strip_prefix(prefix) else {
                continue;
            };
            if rel.as_os_str().is_empty() {
                continue;
            }
            if files.last().map_or(false, |last| last == rel) {
                continue;
            }
            files.push(rel.to_path_buf());
        }

        Ok(files)
    }
}
