//! Clipboard seam
//!
//! Copy actions write through this trait; the embedding surface (desktop
//! shell, console, tests) decides what a clipboard actually is. A failed
//! write surfaces as [`crate::ClientError::Clipboard`] and never affects
//! the guest collection.

use crate::ClientResult;

/// Destination for copied invitation text and share links
pub trait Clipboard {
    /// Write text to the clipboard
    fn write_text(&self, text: &str) -> ClientResult<()>;
}
