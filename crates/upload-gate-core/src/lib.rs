//! Pre-submission validation for the file-upload form
//!
//! This crate holds the DOM-free half of the upload gate: the filename
//! validation rules, the error redirect URL builder, and the error-page
//! title rewrite. The browser wiring lives in `upload-gate-wasm`, which
//! calls into these functions from its submit handler.

pub mod redirect;
pub mod title;
pub mod validation;

pub use redirect::{ErrorRedirect, ERROR_CODE};
pub use title::{error_title, query_names_error};
pub use validation::{
    stripped_file_name, validate_file_name, ErrorKind, ValidationReport, DISALLOWED_CHARS,
    MAX_STEM_LEN,
};
