//! System clipboard access for sharing the winner announcement.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Clipboard unavailable: {0}")]
pub struct ClipboardError(#[from] arboard::Error);

/// Replace the clipboard contents with `text`.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
