/*!
 * Markdown writer for codeclip
 *
 * Produces the document pasted into chat tools:
 *
 * ```text
 * # <project>
 *
 * ## Directory Structure
 *
 * - <project>/
 *   - <entry>
 *
 * ## File Contents
 *
 * ### <relative/path>
 * ...
 * ```
 */

use std::fmt;

use crate::types::{FileSection, ScanResult};

/// Fence delimiting each file's contents
const FENCE: &str = "```";

/// A rendered document, split into its fixed-order blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Title line, `# <project>`
    pub title: String,
    /// `## Directory Structure` block
    pub structure: String,
    /// `## File Contents` block, absent for structure-only documents
    pub contents: Option<String>,
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)?;
        f.write_str(&self.structure)?;
        if let Some(contents) = &self.contents {
            f.write_str(contents)?;
        }
        Ok(())
    }
}

/// Markdown writer for scan results and file lists
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownWriter;

impl MarkdownWriter {
    /// Create a new Markdown writer
    pub fn new() -> Self {
        Self
    }

    /// Title, directory structure and file contents
    pub fn render_document(&self, scan: &ScanResult) -> RenderedDocument {
        RenderedDocument {
            title: self.render_title(scan),
            structure: self.render_structure_block(scan),
            contents: Some(self.render_contents_block(&scan.sections)),
        }
    }

    /// Title and directory structure only
    pub fn render_structure(&self, scan: &ScanResult) -> RenderedDocument {
        RenderedDocument {
            title: self.render_title(scan),
            structure: self.render_structure_block(scan),
            contents: None,
        }
    }

    /// Sections for explicitly chosen files, without any headers above them
    pub fn render_files(&self, sections: &[FileSection]) -> String {
        sections.iter().map(|s| self.render_section(s)).collect()
    }

    fn render_title(&self, scan: &ScanResult) -> String {
        format!("# {}\n\n", scan.project_name)
    }

    fn render_structure_block(&self, scan: &ScanResult) -> String {
        format!("## Directory Structure\n\n{}\n", scan.root.render_with_root())
    }

    fn render_contents_block(&self, sections: &[FileSection]) -> String {
        format!("## File Contents\n\n{}", self.render_files(sections))
    }

    fn render_section(&self, section: &FileSection) -> String {
        format!(
            "### {}\n\n{FENCE}\n{}\n{FENCE}\n\n",
            section.path, section.content
        )
    }
}
