/*!
 * codeclip - Copy files and directory trees as Markdown for LLM chats
 *
 * The library renders a directory as a Markdown document made of a directory
 * structure list followed by one fenced block per text file. Listing,
 * filesystem access and the clipboard sit behind traits so the rendering
 * core can run against any source.
 */

pub mod classifier;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod exclude;
pub mod fs;
pub mod git;
pub mod lister;
pub mod report;
pub mod scanner;
pub mod tree;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use classifier::{is_text, read_text_file};
pub use config::Config;
pub use error::{CodeClipError, Result};
pub use exclude::ExcludeSet;
pub use fs::{FileSystem, OsFileSystem};
pub use lister::{ListSource, TrackedFileLister};
pub use report::{ReportFormat, Reporter, ScanReport};
pub use scanner::Scanner;
pub use tree::TreeNode;
pub use types::{EntryKind, FileEntry, FileSection, ScanResult};
pub use writer::{MarkdownWriter, RenderedDocument};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
