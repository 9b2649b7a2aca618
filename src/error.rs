//! Global error handling for codeclip
//!
//! Every fallible operation in the crate funnels into [`CodeClipError`] so the
//! binary can report a single human-readable message at the boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::git::GitError;

/// Global error type for codeclip operations
#[derive(Error, Debug)]
pub enum CodeClipError {
    /// The tracked-file lister could not read the git index
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// The gitignore-aware walker failed
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// The plain directory walker failed
    #[error("Walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Copying to the clipboard failed
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Settings file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A directory was required but something else was given
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for codeclip operations
pub type Result<T> = std::result::Result<T, CodeClipError>;

/// Creates a CodeClipError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::CodeClipError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_directory_message() {
        let err = CodeClipError::NotADirectory(PathBuf::from("notes.txt"));
        assert_eq!(err.to_string(), "Not a directory: notes.txt");
    }

    #[test]
    fn test_macros_build_string_variants() {
        fn check(flag: bool) -> Result<()> {
            ensure!(flag, Config, "flag was {}", flag);
            Ok(())
        }

        assert!(check(true).is_ok());
        let err = check(false).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: flag was false");
    }
}
