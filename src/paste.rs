//! Editor paste integration.
//!
//! The host editor supplies the clipboard and the document; this module only
//! decides what text ends up in the document. Two entry points mirror the
//! two ways a host can hook a paste:
//!
//! - [`preprocess_on_paste`] rewrites text on its way into the document and
//!   falls back to the pasted text on any failure.
//! - [`paste_as_jss`] is an explicit action that writes into a [`TextSink`]
//!   and leaves the document untouched on failure.

use tracing::{debug, warn};

use crate::convert::{ConvertError, Converter};

/// Failure to read text from the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Failure to write into the target document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not replace selection: {0}")]
pub struct SinkError(pub String);

/// Errors from [`paste_as_jss`].
#[derive(Debug, thiserror::Error)]
pub enum PasteError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error("conversion failed: {0}")]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Source of the text being pasted.
pub trait ClipboardSource {
    fn text(&self) -> Result<String, ClipboardError>;
}

impl<F> ClipboardSource for F
where
    F: Fn() -> Result<String, ClipboardError>,
{
    fn text(&self) -> Result<String, ClipboardError> {
        self()
    }
}

/// Destination document.
///
/// Implementations are expected to perform the replacement as a single
/// undoable edit.
pub trait TextSink {
    fn replace_selection(&mut self, text: &str) -> Result<(), SinkError>;
}

/// What [`paste_as_jss`] inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteOutcome {
    /// Byte length of the inserted text.
    pub inserted: usize,
}

/// Text to insert for a paste of `pasted`: the converted clipboard contents,
/// or `pasted` itself when the clipboard cannot be read or does not convert.
///
/// Conversion goes through [`Converter::parse_complete`], so a fragment that
/// would be truncated falls back as well.
pub fn preprocess_on_paste<C>(converter: &Converter, clipboard: &C, pasted: &str) -> String
where
    C: ClipboardSource + ?Sized,
{
    let css = match clipboard.text() {
        Ok(css) => css,
        Err(e) => {
            debug!(error = %e, "clipboard read failed, pasting as is");
            return pasted.to_string();
        }
    };

    match converter.parse_complete(&css) {
        Ok(jss) => jss,
        Err(e) => {
            debug!(error = %e, "conversion failed, pasting as is");
            pasted.to_string()
        }
    }
}

/// Convert the clipboard contents and replace the sink's selection with the
/// result. Nothing is written unless the conversion succeeds.
pub fn paste_as_jss<C, S>(
    converter: &Converter,
    clipboard: &C,
    sink: &mut S,
) -> Result<PasteOutcome, PasteError>
where
    C: ClipboardSource + ?Sized,
    S: TextSink + ?Sized,
{
    let jss = clipboard
        .text()
        .map_err(PasteError::from)
        .and_then(|css| converter.parse_complete(&css).map_err(PasteError::from))
        .inspect_err(|e| warn!(error = %e, "paste as JSS aborted"))?;

    sink.replace_selection(&jss)?;
    debug!(bytes = jss.len(), "pasted as JSS");

    Ok(PasteOutcome {
        inserted: jss.len(),
    })
}
