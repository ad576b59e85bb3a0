//! System clipboard integration.

use arboard::Clipboard;
use tracing::{debug, instrument, warn};

/// Copies the given text to the system clipboard.
///
/// Returns `true` on success. Failure is reported through the return
/// value alone: headless environments routinely have no clipboard and
/// the password is already printed, so callers just skip their
/// confirmation message. Empty text is not copied.
#[instrument(skip(text))]
pub fn copy_to_clipboard(text: &str) -> bool {
    if text.is_empty() {
        debug!("Nothing to copy");
        return false;
    }

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => {
                debug!("Copied to clipboard");
                true
            }
            Err(e) => {
                warn!(error = %e, "Clipboard write failed");
                false
            }
        },
        Err(e) => {
            warn!(error = %e, "Clipboard unavailable");
            false
        }
    }
}
