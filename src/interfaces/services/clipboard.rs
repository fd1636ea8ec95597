use crate::errors::ClipboardError;

/// Host-provided clipboard. The browser owns the real one; the backend only
/// drives the panel state that reacts to it.
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
