//! URL canonicalization.
//!
//! The canonical form is the key used to find an existing mapping for a long
//! URL, so that trivially different spellings of one address share an alias.

use url::Url;

/// Errors that can occur during URL canonicalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlCanonicalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Parses `input` and re-serializes it to its canonical string form.
///
/// The `url` crate already applies the rules that matter here:
///
/// 1. **Scheme and host**: lowercased
/// 2. **Default ports**: removed (80 for HTTP, 443 for HTTPS)
/// 3. **Empty path**: becomes `/`
/// 4. **Percent-encoding**: normalized for characters that require it
///
/// Path, query and fragment are otherwise preserved, since they can change
/// where a redirect lands.
///
/// # Errors
///
/// Returns [`UrlCanonicalizationError::InvalidFormat`] for input the parser rejects,
/// such as `"not a url"` or a bare `"example.com"`.
/// Returns [`UrlCanonicalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlCanonicalizationError::MissingHost`] when no host is present.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     canonicalize_url("HTTP://Example.COM:80").unwrap(),
///     "http://example.com/"
/// );
/// ```
pub fn canonicalize_url(input: &str) -> Result<String, UrlCanonicalizationError> {
    let url =
        Url::parse(input).map_err(|e| UrlCanonicalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlCanonicalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlCanonicalizationError::MissingHost);
    }

    Ok(url.to_string())
}
