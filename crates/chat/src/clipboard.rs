use snafu::{ResultExt, Snafu};

#[derive(Debug, Snafu)]
pub enum ClipboardError {
    #[snafu(display("clipboard unavailable: {source}"))]
    Unavailable { source: arboard::Error },
    #[snafu(display("failed to write clipboard text: {source}"))]
    WriteText { source: arboard::Error },
}

pub type ClipboardResult = Result<(), ClipboardError>;

/// Capability contract for the copy-link intent.
///
/// The controller only ever writes; success is UI feedback, never a
/// correctness concern.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> ClipboardResult;
}

/// System clipboard backed by `arboard`.
///
/// A fresh context per write; on X11 a long-lived context owns the
/// selection for its whole lifetime.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> ClipboardResult {
        arboard::Clipboard::new()
            .context(UnavailableSnafu)?
            .set_text(text)
            .context(WriteTextSnafu)
    }
}
