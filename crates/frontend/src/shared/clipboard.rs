//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. Failures (missing permission, insecure
//! context) are swallowed.

use wasm_bindgen_futures::spawn_local;

/// Copy text to clipboard with a callback on success
///
/// The callback is not invoked when the write is rejected.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
                Ok(_) => on_success(),
                Err(e) => log::debug!("clipboard write rejected: {:?}", e),
            }
        }
    });
}
