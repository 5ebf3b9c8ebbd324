//! On-load title rewrite for error pages

use upload_gate_core::title;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// Prefix the document title with `Error: ` when the page was reached
/// through an error redirect. Re-running on an already-prefixed title is a
/// no-op.
pub fn apply_error_title(window: &Window, document: &Document) -> Result<(), JsValue> {
    let query = window.location().search()?;
    if !title::query_names_error(&query) {
        return Ok(());
    }
    if let Some(updated) = title::error_title(&document.title()) {
        document.set_title(&updated);
    }
    Ok(())
}
