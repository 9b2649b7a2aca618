/*!
 * Directory and file scanning functionality
 *
 * The scanner walks the tracked files of a directory, drops excluded paths,
 * builds the directory structure and reads every text file into a section.
 * Rendering the result is left to the writer.
 */

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use log::{debug, trace, warn};

use crate::classifier;
use crate::error::{CodeClipError, Result};
use crate::exclude::ExcludeSet;
use crate::fs::FileSystem;
use crate::lister::TrackedFileLister;
use crate::tree::TreeNode;
use crate::types::{EntryKind, FileEntry, FileSection, ScanResult, ScannerStatistics};
use crate::utils::{project_name, to_slash};

/// Scanner for directory contents
pub struct Scanner {
    /// Source of tracked paths
    lister: Box<dyn TrackedFileLister>,
    /// Stat and read access
    fs: Box<dyn FileSystem>,
    /// Patterns removing paths from the render
    excludes: ExcludeSet,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(
        lister: Box<dyn TrackedFileLister>,
        fs: Box<dyn FileSystem>,
        excludes: ExcludeSet,
        progress: Arc<ProgressBar>,
    ) -> Self {
        Self {
            lister,
            fs,
            excludes,
            progress,
        }
    }

    /// Scan the directory at `root`.
    ///
    /// Fails when `root` is not a directory or cannot be listed. Files that
    /// cannot be read are kept in the structure and left out of the sections.
    pub fn scan(&self, root: &Path) -> Result<ScanResult> {
        if !self.fs.is_dir(root) {
            return Err(CodeClipError::NotADirectory(root.to_path_buf()));
        }

        let project_name = project_name(root);
        let mut tree = TreeNode::directory(project_name.clone());
        let mut sections = Vec::new();
        let mut statistics = ScannerStatistics::default();

        self.scan_directory(
            root,
            Path::new(""),
            &mut tree,
            &mut sections,
            &mut statistics,
        )?;

        Ok(ScanResult {
            project_name,
            root: tree,
            sections,
            statistics,
        })
    }

    /// Read explicit files, keeping only readable text files.
    ///
    /// Section headers show each path as given.
    pub fn read_files(&self, paths: &[PathBuf]) -> (Vec<FileSection>, ScannerStatistics) {
        let mut sections = Vec::new();
        let mut statistics = ScannerStatistics::default();

        for path in paths {
            statistics.files_listed += 1;
            if self.fs.is_dir(path) {
                warn!("Skipping directory {}", path.display());
                statistics.files_skipped += 1;
                continue;
            }
            match self.read_section(path, path) {
                Some(section) => {
                    statistics.record_included(&section);
                    sections.push(section);
                }
                None => statistics.files_skipped += 1,
            }
        }

        (sections, statistics)
    }

    /// List one directory and fold its entries into `tree` and `sections`.
    ///
    /// `prefix` is the path of `dir` relative to the scan root. Directory
    /// entries (submodules) are listed in turn and nested under their node.
    fn scan_directory(
        &self,
        dir: &Path,
        prefix: &Path,
        tree: &mut TreeNode,
        sections: &mut Vec<FileSection>,
        statistics: &mut ScannerStatistics,
    ) -> Result<()> {
        let listed = self.lister.list(dir)?;
        self.progress.inc_length(listed.len() as u64);

        for rel in listed {
            statistics.files_listed += 1;
            let rel_path = prefix.join(&rel);

            if self.excludes.is_match(&rel_path) {
                debug!("Excluded {}", to_slash(&rel_path));
                statistics.files_excluded += 1;
                self.progress.inc(1);
                continue;
            }

            let abs_path = dir.join(&rel);
            let kind = if self.fs.is_dir(&abs_path) {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            trace!("Listed {} {}", kind, to_slash(&rel_path));
            tree.insert(&FileEntry::new(rel_path.clone(), kind));
            self.progress.inc(1);

            match kind {
                EntryKind::Directory => {
                    self.scan_directory(&abs_path, &rel_path, tree, sections, statistics)?;
                }
                EntryKind::File => {
                    match self.read_section(&abs_path, &rel_path) {
                        Some(section) => {
                            statistics.record_included(&section);
                            sections.push(section);
                        }
                        None => statistics.files_skipped += 1,
                    }
                }
            }
        }

        Ok(())
    }

    /// Read and classify a single file, returning its section if it is text
    fn read_section(&self, abs_path: &Path, rel_path: &Path) -> Option<FileSection> {
        self.progress
            .set_message(format!("Current file: {}", to_slash(rel_path)));

        classifier::read_text_file(&*self.fs, abs_path)
            .map(|content| FileSection::new(rel_path, content))
    }
}
