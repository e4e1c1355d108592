//! Validation and canonicalization of HTTP protocol elements.
//!
//! Every function in this module is pure: it either returns the single accepted
//! representation of its input or fails with [`InvalidArgument`](crate::InvalidArgument).
//! The only exception is [`normalize_header_name`], which is a rewrite with no
//! failure path.
//!
//! Message and URI builders call these before storing a value, e.g. a request
//! builder runs [`normalize_method`] and a URI builder runs
//! [`normalize_uri_scheme`], [`normalize_uri_path`] and friends.
//!
//! # Example
//!
//! ```
//! use micro_message::normalize::{normalize_header_name, normalize_method, normalize_uri_path};
//!
//! assert_eq!(normalize_method(Some("get")).unwrap(), Some(http::Method::GET));
//! assert_eq!(normalize_header_name("HTTP_CONTENT_TYPE"), "content-type");
//! assert_eq!(normalize_uri_path("/a b/%7Euser"), "/a%20b/%7Euser");
//! ```

mod encoding;
mod header;
mod protocol;
mod uri;

pub use header::header_name;
pub use header::normalize_header_name;

pub use protocol::http_version;
pub use protocol::normalize_method;
pub use protocol::normalize_status_code;
pub use protocol::normalize_version;

pub use uri::normalize_request_target;
pub use uri::normalize_uri_fragment;
pub use uri::normalize_uri_path;
pub use uri::normalize_uri_port;
pub use uri::normalize_uri_query;
pub use uri::normalize_uri_scheme;

/// HTTP protocol versions a message may carry.
pub const SUPPORTED_HTTP_VERSIONS: [&str; 3] = ["1.0", "1.1", "2.0"];

/// Request methods accepted by [`normalize_method`].
pub const SUPPORTED_HTTP_METHODS: [&str; 9] =
    ["CONNECT", "DELETE", "GET", "HEAD", "OPTIONS", "PATCH", "POST", "PUT", "TRACE"];

/// URI schemes accepted by [`normalize_uri_scheme`]; the empty scheme marks a relative reference.
pub const SUPPORTED_URI_SCHEMES: [&str; 3] = ["", "http", "https"];
