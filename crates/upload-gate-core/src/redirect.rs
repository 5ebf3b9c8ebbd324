//! Error redirect URL construction
//!
//! A rejected submission navigates to the error page named by the hidden
//! `upScanErrorRedirectUrl` field, carrying the rejection as query
//! parameters. Values are percent-encoded before they reach the query
//! string.

use crate::validation::ErrorKind;

/// Fixed `errorCode` value carried on every client-side rejection.
pub const ERROR_CODE: &str = "InvalidArgument";

/// A fully-determined error redirect, ready to render as a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRedirect<'a> {
    base: &'a str,
    kind: ErrorKind,
    request_id: Option<&'a str>,
}

impl<'a> ErrorRedirect<'a> {
    /// `base` is the redirect URL without a query string; a missing request
    /// id renders as an empty (but present) `errorRequestId` parameter.
    pub fn new(base: &'a str, kind: ErrorKind, request_id: Option<&'a str>) -> Self {
        Self {
            base,
            kind,
            request_id,
        }
    }

    /// Render `{base}?errorCode=InvalidArgument&errorMessage={kind}&errorRequestId={id}`.
    pub fn to_url(&self) -> String {
        let message = urlencoding::encode(self.kind.as_code());
        let request_id = urlencoding::encode(self.request_id.unwrap_or(""));
        format!(
            "{}?errorCode={}&errorMessage={}&errorRequestId={}",
            self.base, ERROR_CODE, message, request_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_all_three_parameters() {
        let url = ErrorRedirect::new(
            "https://errors.example/upload-failed",
            ErrorKind::FileNotSelected,
            Some("req-123"),
        )
        .to_url();
        assert_eq!(
            url,
            "https://errors.example/upload-failed\
             ?errorCode=InvalidArgument\
             &errorMessage=FileNotSelected\
             &errorRequestId=req-123"
        );
    }

    #[test]
    fn missing_request_id_renders_empty_parameter() {
        let url = ErrorRedirect::new("/errors", ErrorKind::InvalidFileNameLength, None).to_url();
        assert_eq!(
            url,
            "/errors?errorCode=InvalidArgument&errorMessage=InvalidFileNameLength&errorRequestId="
        );
    }

    #[test]
    fn request_id_is_percent_encoded() {
        let url = ErrorRedirect::new(
            "/errors",
            ErrorKind::DisallowedCharacters,
            Some("id with spaces&ampersand"),
        )
        .to_url();
        assert!(url.ends_with("errorRequestId=id%20with%20spaces%26ampersand"));
        // The encoded value must not introduce extra parameters.
        assert_eq!(url.matches('&').count(), 2);
    }
}
