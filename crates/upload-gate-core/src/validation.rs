//! Filename validation for the upload form
//!
//! Rules run in a fixed order and the first match wins. Validation is a pure
//! function of the selection state and the filename, so the same selection
//! always produces the same outcome.

use serde::Serialize;
use thiserror::Error;

/// Maximum length of the stripped filename, in characters.
pub const MAX_STEM_LEN: usize = 100;

/// Characters rejected anywhere in the stripped filename.
pub const DISALLOWED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Reason a submission was rejected client-side.
///
/// The `Display` form is the wire code carried in the error redirect's
/// `errorMessage` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum ErrorKind {
    #[error("FileNotSelected")]
    FileNotSelected,
    #[error("InvalidFileNameLength")]
    InvalidFileNameLength,
    #[error("DisallowedCharacters")]
    DisallowedCharacters,
}

impl ErrorKind {
    /// Stable wire code, identical to the `Display` form.
    pub fn as_code(&self) -> &'static str {
        match self {
            ErrorKind::FileNotSelected => "FileNotSelected",
            ErrorKind::InvalidFileNameLength => "InvalidFileNameLength",
            ErrorKind::DisallowedCharacters => "DisallowedCharacters",
        }
    }
}

/// Validation outcome in the shape surfaced to JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub error_kind: Option<ErrorKind>,
}

impl From<Result<(), ErrorKind>> for ValidationReport {
    fn from(result: Result<(), ErrorKind>) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: true,
                error_kind: None,
            },
            Err(kind) => Self {
                is_valid: false,
                error_kind: Some(kind),
            },
        }
    }
}

/// Remove a trailing `.xml` suffix, at most once, case-sensitively.
pub fn stripped_file_name(file_name: &str) -> &str {
    file_name.strip_suffix(".xml").unwrap_or(file_name)
}

/// Validate the selected filename. `None` means no file is selected.
///
/// Rule order (first match wins):
/// 1. `FileNotSelected` - nothing selected
/// 2. `InvalidFileNameLength` - stripped filename longer than 100 characters
/// 3. `DisallowedCharacters` - stripped filename contains `< > : " / \ | ? *`
pub fn validate_file_name(selected: Option<&str>) -> Result<(), ErrorKind> {
    let file_name = selected.ok_or(ErrorKind::FileNotSelected)?;
    let stem = stripped_file_name(file_name);

    if stem.chars().count() > MAX_STEM_LEN {
        return Err(ErrorKind::InvalidFileNameLength);
    }
    if stem.contains(DISALLOWED_CHARS) {
        return Err(ErrorKind::DisallowedCharacters);
    }
    Ok(())
}
