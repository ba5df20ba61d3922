//! Clipboard hand-off for the copy-source action.

use crate::error::Error;

/// Platform clipboard abstraction. Copying is fire-and-forget: the only
/// contract is whether the hand-off succeeded.
pub trait ClipboardProvider: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), Error>;
}

/// System clipboard backed by arboard
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), Error> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}
