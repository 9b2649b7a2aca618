/*!
 * Text/binary classification
 *
 * Decides whether a file can be embedded in a Markdown code block.
 */

use std::path::Path;

use crate::fs::FileSystem;

/// UTF-8 byte-order mark
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// ESC is allowed so that files with ANSI colour codes still count as text
const ESCAPE: u8 = 0x1B;

/// Whether `bytes` read from `path` are text.
///
/// SVG files are always treated as binary even though they are XML.
pub fn is_text(path: &Path, bytes: &[u8]) -> bool {
    if has_svg_extension(path) {
        return false;
    }
    is_text_content(bytes)
}

/// Content-only half of [`is_text`]
pub fn is_text_content(bytes: &[u8]) -> bool {
    if bytes.is_empty() || bytes.starts_with(&UTF8_BOM) {
        return true;
    }
    !bytes.iter().copied().any(is_binary_byte)
}

/// Read `path` through `fs` and return its contents if it is text.
///
/// Read failures count as binary. Invalid UTF-8 sequences are replaced.
pub fn read_text_file(fs: &dyn FileSystem, path: &Path) -> Option<String> {
    let bytes = match fs.read_bytes(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Skipping unreadable {}: {}", path.display(), e);
            return None;
        }
    };

    if !is_text(path, &bytes) {
        log::debug!("Skipping binary {}", path.display());
        return None;
    }

    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// NUL and C0 controls other than BEL..CR and ESC
fn is_binary_byte(b: u8) -> bool {
    b < 0x07 || ((0x0E..0x20).contains(&b) && b != ESCAPE)
}

fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}
