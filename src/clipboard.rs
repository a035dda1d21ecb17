//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Holds the clipboard connection open; on X11 the copied value is served
/// for as long as this lives.
pub struct Clipboard {
    ctx: ClipboardContext,
}

impl Clipboard {
    pub fn open() -> Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { ctx })
    }

    /// Copy `text`, then read it back and zeroize the read-back copy.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        self.ctx
            .set_contents(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))?;

        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        debug!("copied {} chars to clipboard", text.chars().count());
        Ok(())
    }
}
