/*!
 * Git index as the source of tracked files
 */

mod error;
mod repository;

// Re-export public items
pub use error::{GitError, GitResult};
pub use repository::Repository;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::lister::TrackedFileLister;

/// Lists the files `git ls-files` would show when run inside a directory
#[derive(Debug, Clone, Copy, Default)]
pub struct GitIndexLister;

impl TrackedFileLister for GitIndexLister {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let repo = Repository::discover(dir)?;
        let files = repo.tracked_files(dir)?;
        log::debug!(
            "git index lists {} files under {} (work tree {})",
            files.len(),
            dir.display(),
            repo.workdir().display()
        );
        Ok(files)
    }
}
