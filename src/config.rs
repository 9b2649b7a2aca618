//! Configuration handling for codeclip
//!
//! Command-line arguments are merged with an optional JSON settings file:
//!
//! ```json
//! { "exclude": ["*.lock", "docs/**"] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use serde::Deserialize;

use crate::error::{CodeClipError, Result};
use crate::exclude::ExcludeSet;
use crate::lister::ListSource;
use crate::{bail, ensure};

/// Settings file looked up in the directory being copied
pub const PROJECT_SETTINGS_FILE: &str = ".codeclip.json";

/// Command-line arguments for codeclip
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "codeclip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy files and directory trees as Markdown for LLM chats",
    long_about = "Serializes files or a directory tree into Markdown (a directory structure list followed by fenced file contents) and puts the result on the clipboard, ready to paste into chat-based AI tools."
)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Option<Command>,

    /// Comma-separated list of glob patterns to exclude
    #[clap(long, value_delimiter = ',', global = true)]
    pub exclude: Vec<String>,

    /// Where the list of project files comes from
    #[clap(long, value_enum, default_value_t = ListSource::default(), global = true)]
    pub source: ListSource,

    /// Path to a JSON settings file
    #[clap(long, global = true)]
    pub config: Option<String>,

    /// Print the Markdown to stdout instead of copying it
    #[clap(long, global = true)]
    pub print: bool,

    /// Write the Markdown to a file instead of copying it
    #[clap(long, short, global = true)]
    pub output: Option<String>,

    /// Do not print the summary report
    #[clap(long, short, global = true)]
    pub quiet: bool,

    /// Log skipped and excluded files
    #[clap(long, short, global = true)]
    pub verbose: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// What to copy
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Copy several files, e.g. the files open in an editor
    ///
    /// Each file gets a `### <path as given>` heading; no title or
    /// directory structure is emitted.
    Files {
        /// Files to copy
        #[clap(required = true)]
        paths: Vec<String>,
    },
    /// Copy a single file under a `### <path as given>` heading
    File {
        /// File to copy
        path: String,
    },
    /// Copy a directory's structure and the contents of its text files
    Dir {
        /// Directory to copy
        #[clap(default_value = ".")]
        path: String,
    },
    /// Copy a directory's structure only
    Tree {
        /// Directory to copy
        #[clap(default_value = ".")]
        path: String,
    },
}

/// Resolved operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Sections for explicit files
    Files(Vec<PathBuf>),
    /// Full document for a directory
    Directory(PathBuf),
    /// Structure-only document for a directory
    Structure(PathBuf),
}

impl Mode {
    /// Directory whose project settings apply
    fn settings_root(&self) -> PathBuf {
        match self {
            Self::Files(_) => PathBuf::from("."),
            Self::Directory(dir) | Self::Structure(dir) => dir.clone(),
        }
    }
}

/// Where the rendered Markdown goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// System clipboard
    Clipboard,
    /// Standard output
    Stdout,
    /// A file on disk
    File(PathBuf),
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clipboard => write!(f, "clipboard"),
            Self::Stdout => write!(f, "stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Contents of a settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Glob patterns excluded from directory renders
    pub exclude: Vec<String>,
}

impl Settings {
    /// Parse a settings file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            CodeClipError::Config(format!("Cannot read settings {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Find the settings that apply to `root`.
    ///
    /// An explicit path must exist. Otherwise the project file in `root` is
    /// used, then the user-wide file; no file at all yields empty settings.
    pub fn discover(explicit: Option<&Path>, root: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            ensure!(
                path.is_file(),
                Config,
                "Settings file not found: {}",
                path.display()
            );
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidates = [Some(root.join(PROJECT_SETTINGS_FILE)), user_settings_path()];
        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                return Ok((Self::load(&path)?, Some(path)));
            }
        }

        Ok((Self::default(), None))
    }
}

/// `<config dir>/codeclip/config.json`
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("codeclip").join("config.json"))
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// What to copy
    pub mode: Mode,

    /// Settings patterns followed by command-line patterns
    pub exclude_patterns: Vec<String>,

    /// Where tracked files are listed from
    pub source: ListSource,

    /// Where the output goes
    pub destination: Destination,

    /// Settings file that was applied, if any
    pub settings_path: Option<PathBuf>,

    /// Skip the report
    pub quiet: bool,
}

impl Config {
    /// Create configuration from command-line arguments and settings files
    pub fn from_args(args: Args) -> Result<Self> {
        let mode = match args.command.unwrap_or(Command::Dir {
            path: ".".to_string(),
        }) {
            Command::Files { paths } => Mode::Files(paths.into_iter().map(PathBuf::from).collect()),
            Command::File { path } => Mode::Files(vec![PathBuf::from(path)]),
            Command::Dir { path } => Mode::Directory(PathBuf::from(path)),
            Command::Tree { path } => Mode::Structure(PathBuf::from(path)),
        };

        let destination = match (args.print, args.output) {
            (true, Some(_)) => bail!(InvalidArgument, "--print and --output cannot be combined"),
            (true, None) => Destination::Stdout,
            (false, Some(path)) => Destination::File(PathBuf::from(path)),
            (false, None) => Destination::Clipboard,
        };

        let explicit = args.config.map(PathBuf::from);
        let (settings, settings_path) =
            Settings::discover(explicit.as_deref(), &mode.settings_root())?;

        let mut exclude_patterns = settings.exclude;
        exclude_patterns.extend(args.exclude);

        Ok(Self {
            mode,
            exclude_patterns,
            source: args.source,
            destination,
            settings_path,
            quiet: args.quiet,
        })
    }

    /// Exclude patterns as a matcher
    pub fn excludes(&self) -> ExcludeSet {
        ExcludeSet::new(self.exclude_patterns.iter().cloned())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match &self.mode {
            Mode::Directory(dir) | Mode::Structure(dir) => {
                if !dir.is_dir() {
                    return Err(CodeClipError::NotADirectory(dir.clone()));
                }
            }
            Mode::Files(paths) => {
                ensure!(!paths.is_empty(), InvalidArgument, "No files given");
            }
        }

        // Check if output file directory exists
        if let Destination::File(path) = &self.destination {
            if let Some(parent) = path.parent() {
                ensure!(
                    parent.as_os_str().is_empty() || parent.is_dir(),
                    Config,
                    "Output directory not found: {}",
                    parent.display()
                );
            }
        }

        Ok(())
    }
}
