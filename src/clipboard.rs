//! Clipboard access for copying the visible wish or a photo path.

use arboard::Clipboard;

/// Handler for clipboard operations.
///
/// Copies are fire-and-forget: on environments without a clipboard the
/// handler simply fails to construct and every copy becomes a silent
/// no-op at the call site.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to set clipboard text: {}", e))
    }
}
