//! src/operators/clipboard.rs
//! ============================================================================
//! # Clipboard sink
//!
//! The copy-URL action only needs "write this text". The system clipboard is
//! opened lazily and kept alive, since some platforms drop the contents when
//! the owning handle goes away.

use tracing::{debug, warn};

use crate::error::ActionError;

pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ActionError>;
}

#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ActionError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| {
                warn!(marker = "CLIPBOARD_UNAVAILABLE", error = %e, "Cannot open clipboard");
                ActionError::Clipboard(e.to_string())
            })?;
            self.inner = Some(clipboard);
        }

        self.inner
            .as_mut()
            .ok_or_else(|| ActionError::Clipboard("clipboard not initialised".into()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ActionError> {
        self.handle()?
            .set_text(text.to_owned())
            .map_err(|e| ActionError::Clipboard(e.to_string()))?;

        debug!(marker = "CLIPBOARD_WRITE", len = text.len(), "Copied text to clipboard");
        Ok(())
    }
}
