//! RFC 3986 percent-encoding that leaves existing escapes alone.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped in a path: everything outside unreserved, sub-delims subset and pchar.
///
/// `%` is kept out of the set and handled by [`encode_preserving_escapes`].
pub(crate) const PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'-')
    .remove(b'.')
    .remove(b'~')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'/')
    .remove(b';')
    .remove(b'%');

/// Bytes escaped in a query or fragment.
pub(crate) const QUERY_OR_FRAGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'-')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b'%')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// Percent-encodes `input` against `set`.
///
/// A `%` that starts a valid `%XX` escape is copied as is; a stray `%` becomes `%25`.
/// Applying the function to its own output yields the same output.
pub(crate) fn encode_preserving_escapes(input: &str, set: &'static AsciiSet) -> String {
    let bytes = input.as_bytes();
    let mut encoded = String::with_capacity(input.len());
    let mut start = 0;

    for (index, _) in input.match_indices('%') {
        encoded.extend(utf8_percent_encode(&input[start..index], set));
        if is_escape(&bytes[index..]) {
            encoded.push('%');
        } else {
            encoded.push_str("%25");
        }
        start = index + 1;
    }

    encoded.extend(utf8_percent_encode(&input[start..], set));
    encoded
}

/// Checks whether `bytes` starts with `%` followed by two hex digits.
fn is_escape(bytes: &[u8]) -> bool {
    matches!(bytes, [b'%', high, low, ..] if high.is_ascii_hexdigit() && low.is_ascii_hexdigit())
}
