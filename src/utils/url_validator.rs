//! Syntactic validation of target URLs.

use url::Url;

/// Errors returned by [`validate_full_url`].
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
}

/// Checks that `input` parses as an absolute URL.
///
/// Any scheme is accepted (`https:`, `ftp:`, `mailto:` ...); relative
/// references such as `/path` or `example.com` are rejected. The input is
/// stored as given, not in its parsed form.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] when the URL does not parse.
pub fn validate_full_url(input: &str) -> Result<(), UrlValidationError> {
    Url::parse(input)?;
    Ok(())
}
