//! URI components and the request target.

use crate::ensure;
use crate::error::InvalidArgument;
use crate::normalize::SUPPORTED_URI_SCHEMES;
use crate::normalize::encoding::{PATH, QUERY_OR_FRAGMENT, encode_preserving_escapes};

/// Lowercases a scheme, drops any `://` and checks it against [`SUPPORTED_URI_SCHEMES`].
pub fn normalize_uri_scheme(scheme: &str) -> Result<String, InvalidArgument> {
    let normalized = scheme.to_ascii_lowercase().replace("://", "");
    ensure!(SUPPORTED_URI_SCHEMES.contains(&normalized.as_str()), InvalidArgument::uri_scheme(scheme));
    Ok(normalized)
}

/// Accepts an absent port or one in `1..=65535`.
pub fn normalize_uri_port(port: Option<i64>) -> Result<Option<u16>, InvalidArgument> {
    match port {
        None => Ok(None),
        Some(value) => u16::try_from(value)
            .ok()
            .filter(|port| *port != 0)
            .map(Some)
            .ok_or(InvalidArgument::UriPort { value }),
    }
}

/// Percent-encodes a URI path without double-encoding existing escapes.
pub fn normalize_uri_path(path: &str) -> String {
    encode_preserving_escapes(path, PATH)
}

/// Percent-encodes a query string after removing a leading `?`.
pub fn normalize_uri_query(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    encode_preserving_escapes(query, QUERY_OR_FRAGMENT)
}

/// Percent-encodes a fragment after removing a leading `#`.
pub fn normalize_uri_fragment(fragment: &str) -> String {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    encode_preserving_escapes(fragment, QUERY_OR_FRAGMENT)
}

/// Rejects a request target containing ASCII whitespace; otherwise returns it unchanged.
///
/// Non-ASCII whitespace such as U+00A0 is left for the URI layer to encode.
pub fn normalize_request_target(target: &str) -> Result<&str, InvalidArgument> {
    ensure!(!target.bytes().any(is_target_whitespace), InvalidArgument::request_target(target));
    Ok(target)
}

/// ASCII whitespace including vertical tab, which `u8::is_ascii_whitespace` leaves out.
fn is_target_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}
