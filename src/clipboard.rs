/*!
 * Clipboard support for codeclip
 *
 * Pipes the rendered document into whichever clipboard command the system
 * provides.
 */

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Destination for a finished document
pub trait Clipboard {
    /// Copy text to the clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
}

/// Clipboard commands known to work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardProvider {
    /// tmux paste buffer, forwarded to the outer clipboard with -w
    Tmux,
    /// Wayland
    Wayland,
    /// X11 via xsel
    Xsel,
    /// X11 via xclip
    Xclip,
    /// macOS
    MacOS,
    /// Windows, also reachable from WSL
    Windows,
    /// Termux on Android
    Termux,
}

impl ClipboardProvider {
    /// Program and arguments that read the text from stdin
    pub fn command(self) -> (&'static str, Vec<&'static str>) {
        match self {
            Self::Tmux => ("tmux", vec!["load-buffer", "-w", "-"]),
            Self::Wayland => ("wl-copy", vec![]),
            Self::Xsel => ("xsel", vec!["-b", "-i"]),
            Self::Xclip => ("xclip", vec!["-selection", "clipboard", "-in"]),
            Self::MacOS => ("pbcopy", vec![]),
            Self::Windows => ("clip.exe", vec![]),
            Self::Termux => ("termux-clipboard-set", vec![]),
        }
    }
}

impl Clipboard for ClipboardProvider {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let (cmd, args) = self.command();
        execute_clipboard_command(cmd, &args, text)
    }
}

/// The first usable clipboard command on this machine
#[derive(Debug, Clone, Copy)]
pub struct SystemClipboard {
    provider: ClipboardProvider,
}

impl SystemClipboard {
    /// Pick the preferred available provider
    pub fn detect() -> Result<Self> {
        candidate_providers()
            .into_iter()
            .find(|provider| command_exists(provider.command().0))
            .map(|provider| Self { provider })
            .ok_or(ClipboardError::NoClipboardFound)
    }
}

impl Clipboard for SystemClipboard {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        log::debug!("Copying {} bytes with {:?}", text.len(), self.provider);
        self.provider.copy_to_clipboard(text)
    }
}

/// Copy text with the detected system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    SystemClipboard::detect()?.copy_to_clipboard(text)
}

/// Check whether `command` is an existing file in one of the PATH directories
pub fn command_exists(command: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| is_file(&dir.join(command))))
        .unwrap_or(false)
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}

/// Providers to try, in order of preference for the current platform
fn candidate_providers() -> Vec<ClipboardProvider> {
    let mut providers = Vec::with_capacity(4);

    // An active tmux session wins so the copy also lands in tmux buffers
    if env::var_os("TMUX").is_some() {
        providers.push(ClipboardProvider::Tmux);
    }

    if cfg!(target_os = "macos") {
        providers.push(ClipboardProvider::MacOS);
    } else if cfg!(target_os = "windows") || env::var_os("WSL_DISTRO_NAME").is_some() {
        providers.push(ClipboardProvider::Windows);
    } else if cfg!(target_os = "android") {
        providers.push(ClipboardProvider::Termux);
    } else {
        if env::var_os("WAYLAND_DISPLAY").is_some() {
            providers.push(ClipboardProvider::Wayland);
        }
        providers.push(ClipboardProvider::Xsel);
        providers.push(ClipboardProvider::Xclip);
    }

    providers
}

/// Spawn `cmd`, write `text` to its stdin and wait for it to exit
fn execute_clipboard_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("Failed to spawn {}: {}", cmd, e)))?;

    {
        let stdin = child.stdin.as_mut().ok_or_else(|| {
            ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd))
        })?;
        stdin.write_all(text.as_bytes())?;
    }
    // Close stdin so the command sees EOF
    drop(child.stdin.take());

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}
