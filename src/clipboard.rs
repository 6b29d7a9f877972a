//! Clipboard capability.
//!
//! The session only needs to push text, so the seam is a one-method trait.
//! [`SystemClipboard`] backs it with `arboard`. On some platforms or in headless
//! CI environments clipboard initialization fails; callers treat errors as
//! non-fatal.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard init: {0}")]
    Init(String),
    #[error("clipboard set: {0}")]
    Write(String),
}

/// Somewhere a generated password can be copied to.
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<T: Clipboard + ?Sized> Clipboard for &mut T {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write(text)
    }
}

/// The host clipboard, via `arboard`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut ctx =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Init(e.to_string()))?;
        ctx.set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_copy_no_panic() {
        // Best-effort: CI may have no display, we only check nothing panics.
        let _ = SystemClipboard::new().write("test");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ClipboardError::Init("no display".into()).to_string(),
            "clipboard init: no display"
        );
        assert_eq!(
            ClipboardError::Write("denied".into()).to_string(),
            "clipboard set: denied"
        );
    }
}
