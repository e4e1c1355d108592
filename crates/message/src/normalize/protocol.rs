//! Request line and status line elements: protocol version, method, status code.

use http::{Method, StatusCode, Version};

use crate::ensure;
use crate::error::InvalidArgument;
use crate::normalize::{SUPPORTED_HTTP_METHODS, SUPPORTED_HTTP_VERSIONS};

/// Validates an HTTP protocol version.
///
/// Accepts exactly `"1.0"`, `"1.1"` and `"2.0"`; the returned value is the
/// matching entry of [`SUPPORTED_HTTP_VERSIONS`].
pub fn normalize_version(version: &str) -> Result<&'static str, InvalidArgument> {
    SUPPORTED_HTTP_VERSIONS
        .iter()
        .find(|supported| **supported == version)
        .copied()
        .ok_or_else(|| InvalidArgument::version(version))
}

/// Validates a protocol version and converts it into [`http::Version`].
pub fn http_version(version: &str) -> Result<Version, InvalidArgument> {
    match normalize_version(version)? {
        "1.0" => Ok(Version::HTTP_10),
        "1.1" => Ok(Version::HTTP_11),
        _ => Ok(Version::HTTP_2),
    }
}

/// Validates a request method, case-insensitively.
///
/// An unset method (`None`) is a valid state and passes through.
pub fn normalize_method(method: Option<&str>) -> Result<Option<Method>, InvalidArgument> {
    let Some(method) = method else {
        return Ok(None);
    };

    let upper = method.to_ascii_uppercase();
    ensure!(SUPPORTED_HTTP_METHODS.contains(&upper.as_str()), InvalidArgument::method(upper));

    Method::from_bytes(upper.as_bytes()).ok().map(Some).ok_or_else(|| InvalidArgument::method(&upper))
}

/// Validates a response status code in the `100..=599` range.
pub fn normalize_status_code(status: i64) -> Result<StatusCode, InvalidArgument> {
    ensure!((100..=599).contains(&status), InvalidArgument::StatusCode { value: status });

    u16::try_from(status)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or(InvalidArgument::StatusCode { value: status })
}
