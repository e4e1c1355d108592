use http::HeaderName;

use crate::error::InvalidArgument;

/// Prefix the server environment puts in front of request header variables.
const ENV_HEADER_PREFIX: &str = "http-";

/// Rewrites a header name into its lookup form.
///
/// The name is lowercased, underscores become hyphens and any leading `http-`
/// prefix is removed, so `HTTP_CONTENT_TYPE`, `Content-Type` and `content_type`
/// all map to `content-type`.
pub fn normalize_header_name(name: &str) -> String {
    let lowered: String =
        name.chars().map(|c| if c == '_' { '-' } else { c.to_ascii_lowercase() }).collect();

    let mut stripped = lowered.as_str();
    while let Some(rest) = stripped.strip_prefix(ENV_HEADER_PREFIX) {
        stripped = rest;
    }

    if stripped.len() == lowered.len() { lowered } else { stripped.to_string() }
}

/// Normalizes a header name and validates it as an RFC 7230 field name.
pub fn header_name(name: &str) -> Result<HeaderName, InvalidArgument> {
    let normalized = normalize_header_name(name);
    HeaderName::from_bytes(normalized.as_bytes()).map_err(|e| InvalidArgument::header_name(name, e))
}
