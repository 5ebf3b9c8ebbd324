//! WASM bindings for the upload form's client-side behavior
//!
//! The page loads this module and calls `bind_page()` once the DOM is
//! ready. All branching logic lives in Rust; JavaScript only loads the
//! module and hands over control.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { bind_page } from './pkg/upload_gate_wasm.js';
//!
//! await init();
//! document.addEventListener('DOMContentLoaded', () => bind_page());
//! ```

pub mod gate;
pub mod navigation;
pub mod page_title;
pub mod spinner;

use wasm_bindgen::prelude::*;

// Re-export main types for JavaScript
pub use gate::{GateError, UploadAttempt, UploadGate};
pub use upload_gate_core::{ErrorKind, ValidationReport};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Validate a filename without touching the DOM. `None` means no file is
/// selected. Returns `{ is_valid, error_kind }`.
#[wasm_bindgen]
pub fn validate_file_name(file_name: Option<String>) -> Result<JsValue, JsValue> {
    let report =
        ValidationReport::from(upload_gate_core::validate_file_name(file_name.as_deref()));
    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Wire the whole page: resubmit-warning squash, back and print links, the
/// error-title rewrite, and the upload gate itself. Pages without the
/// upload form get the navigation behavior only.
#[wasm_bindgen]
pub fn bind_page() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document object available"))?;

    navigation::squash_resubmit_warning(&window)?;
    navigation::wire_back_link(&window, &document)?;
    navigation::wire_print_link(&window, &document)?;
    page_title::apply_error_title(&window, &document)?;

    if document.get_element_by_id(gate::UPLOAD_FORM_ID).is_none() {
        return Ok(());
    }
    UploadGate::new(window, document)?.install()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn version_is_reported() {
        assert!(!get_version().is_empty());
    }

    #[wasm_bindgen_test]
    fn bind_page_tolerates_a_page_without_the_form() {
        // The harness page has no #uploadForm; only the navigation and
        // title behaviors run.
        bind_page().unwrap();
    }

    #[wasm_bindgen_test]
    fn validate_file_name_reports_rejections() {
        let report = validate_file_name(Some("bad<name>.xml".to_string())).unwrap();
        let report: serde_json::Value = serde_wasm_bindgen::from_value(report).unwrap();
        assert_eq!(report["is_valid"], false);
        assert_eq!(report["error_kind"], "DisallowedCharacters");
    }
}
