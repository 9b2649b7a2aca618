/*!
 * Core types and data structures for codeclip
 */

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use strum::Display;

use crate::tree::TreeNode;
use crate::utils::to_slash;

/// Kind of a listed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    /// Regular file (or anything that is not a directory)
    File,
    /// Directory, typically a submodule in a git listing
    Directory,
}

/// A listed path relative to the render root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Relative path from the render root
    pub path: PathBuf,
    /// Whether the entry is a file or a directory
    pub kind: EntryKind,
}

impl FileEntry {
    /// Create a new entry
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Path segments in order, skipping `.` and root components
    pub fn segments(&self) -> Vec<String> {
        self.path
            .components()
            .filter_map(|c| match c {
                std::path::Component::Normal(s) => Some(s.to_string_lossy().to_string()),
                _ => None,
            })
            .collect()
    }
}

/// One fenced block in the "File Contents" section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSection {
    /// Slash-separated path shown in the section header
    pub path: String,
    /// File contents decoded as UTF-8
    pub content: String,
}

impl FileSection {
    /// Build a section for `path` with `content`
    pub fn new(path: &Path, content: String) -> Self {
        Self {
            path: to_slash(path),
            content,
        }
    }
}

/// Per-file numbers shown in the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReportInfo {
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

impl FileReportInfo {
    /// Measure a decoded file
    pub fn measure(content: &str) -> Self {
        Self {
            lines: content.lines().count(),
            chars: content.chars().count(),
        }
    }
}

/// Counters gathered while scanning
#[derive(Debug, Clone, Default)]
pub struct ScannerStatistics {
    /// Paths returned by the lister, before exclusion
    pub files_listed: usize,
    /// Paths dropped by exclude patterns
    pub files_excluded: usize,
    /// Files whose contents were included
    pub files_included: usize,
    /// Files left out of the contents (binary or unreadable)
    pub files_skipped: usize,
    /// Total number of lines across included files
    pub total_lines: usize,
    /// Total number of characters across included files
    pub total_chars: usize,
    /// Details for each included file
    pub file_details: HashMap<String, FileReportInfo>,
}

impl ScannerStatistics {
    /// Record an included section
    pub fn record_included(&mut self, section: &FileSection) {
        let info = FileReportInfo::measure(&section.content);
        self.files_included += 1;
        self.total_lines += info.lines;
        self.total_chars += info.chars;
        self.file_details.insert(section.path.clone(), info);
    }
}

/// Everything a directory scan produces
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Name of the project, used in the title and as the tree root
    pub project_name: String,
    /// Directory structure in listing order
    pub root: TreeNode,
    /// Included text files in listing order
    pub sections: Vec<FileSection>,
    /// Counters for the report
    pub statistics: ScannerStatistics,
}
