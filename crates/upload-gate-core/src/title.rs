//! Error-page title rewriting
//!
//! When the page was reached through an error redirect, the document title
//! gains an `Error: ` prefix so the failure is announced before the heading.
//! The rewrite is idempotent: an already-prefixed title is left alone.

/// Prefix applied to the document title on error pages.
pub const ERROR_TITLE_PREFIX: &str = "Error:";

/// Whether a URL query string names an error code.
pub fn query_names_error(query: &str) -> bool {
    query.contains("errorCode")
}

/// The rewritten title, or `None` when the title is already prefixed.
pub fn error_title(current: &str) -> Option<String> {
    if current.starts_with(ERROR_TITLE_PREFIX) {
        None
    } else {
        Some(format!("{ERROR_TITLE_PREFIX} {current}"))
    }
}
