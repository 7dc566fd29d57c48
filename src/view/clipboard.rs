//! Clipboard functionality

use crate::utils::error::{FormatGrabError, Result};
use arboard::Clipboard;

/// Get clipboard content, trimmed
pub fn get_clipboard_content() -> Result<String> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| FormatGrabError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .get_text()
        .map(|text| text.trim().to_string())
        .map_err(|e| FormatGrabError::Clipboard(format!("Failed to read clipboard: {}", e)))
}
