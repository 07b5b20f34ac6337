//! Clipboard access for copy buttons. Browser-only; SSR paths no-op.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Copy `text` to the system clipboard and wait for the browser to accept
/// it. Returns `false` outside the browser or when the write is rejected.
#[allow(clippy::unused_async)]
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(text);
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => true,
            Err(err) => {
                log::warn!("clipboard write rejected: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Label of the copy button.
pub fn copy_label(copied: bool) -> &'static str {
    if copied { "Copié" } else { "Copier" }
}
