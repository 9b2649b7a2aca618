/*!
 * Error types for Git operations
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a repository
#[derive(Error, Debug)]
pub enum GitError {
    /// The directory is not inside a git work tree
    #[error("Not a git repository: {}", .path.display())]
    NotARepository {
        /// Directory that was asked for
        path: PathBuf,
        /// Underlying libgit2 error
        source: git2::Error,
    },

    /// The repository has no work tree to resolve paths against
    #[error("Bare repository has no work tree: {}", .0.display())]
    BareRepository(PathBuf),

    /// The directory lies outside the repository's work tree
    #[error("{} is outside the work tree {}", .path.display(), .workdir.display())]
    OutsideWorkTree {
        /// Directory that was asked for
        path: PathBuf,
        /// Work tree of the discovered repository
        workdir: PathBuf,
    },

    /// Error reading the index
    #[error("Failed to read index: {0}")]
    IndexError(git2::Error),

    /// IO error during Git operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Specialized Result type for Git operations
pub type GitResult<T> = Result<T, GitError>;
