use std::fmt;
use std::io;
use thiserror::Error;

use crate::normalize::{SUPPORTED_HTTP_METHODS, SUPPORTED_HTTP_VERSIONS, SUPPORTED_URI_SCHEMES};

/// Rejection of a raw protocol value by one of the normalizers.
///
/// Every variant carries the offending value; the rendered message names the
/// accepted set or range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("invalid http version {value:?}, must be one of: {}", SUPPORTED_HTTP_VERSIONS.join(", "))]
    Version { value: String },

    #[error("unsupported http method {value:?}, must be one of: {}", SUPPORTED_HTTP_METHODS.join(", "))]
    Method { value: String },

    #[error("invalid http status code {value}, must be an integer between 100 and 599 (inclusive)")]
    StatusCode { value: i64 },

    #[error("invalid header name {value:?}: {reason}")]
    HeaderName { value: String, reason: String },

    #[error("unsupported uri scheme {value:?}, must be one of: \"{}\"", SUPPORTED_URI_SCHEMES.join("\", \""))]
    UriScheme { value: String },

    #[error("invalid uri port {value}, must be null or an integer between 1 and 65535 (inclusive)")]
    UriPort { value: i64 },

    #[error("invalid request target {value:?}, cannot contain whitespace")]
    RequestTarget { value: String },
}

impl InvalidArgument {
    pub fn version<S: ToString>(value: S) -> Self {
        Self::Version { value: value.to_string() }
    }

    pub fn method<S: ToString>(value: S) -> Self {
        Self::Method { value: value.to_string() }
    }

    pub fn header_name<S: ToString, R: ToString>(value: S, reason: R) -> Self {
        Self::HeaderName { value: value.to_string(), reason: reason.to_string() }
    }

    pub fn uri_scheme<S: ToString>(value: S) -> Self {
        Self::UriScheme { value: value.to_string() }
    }

    pub fn request_target<S: ToString>(value: S) -> Self {
        Self::RequestTarget { value: value.to_string() }
    }
}

/// The capability a stream operation requires.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Capability {
    Readable,
    Writable,
    Seekable,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Readable => "readable",
            Capability::Writable => "writable",
            Capability::Seekable => "seekable",
        };
        f.write_str(name)
    }
}

/// The stream operation that hit an I/O failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StreamOp {
    Open,
    Tell,
    Seek,
    Rewind,
    Read,
    Write,
    Contents,
    Close,
}

impl fmt::Display for StreamOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StreamOp::Open => "open",
            StreamOp::Tell => "get the position of the pointer in",
            StreamOp::Seek => "seek in",
            StreamOp::Rewind => "rewind",
            StreamOp::Read => "read from",
            StreamOp::Write => "write to",
            StreamOp::Contents => "get contents of",
            StreamOp::Close => "close",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("invalid stream handle: {reason}")]
    InvalidHandle { reason: String },

    #[error("invalid stream mode {mode:?}")]
    InvalidMode { mode: String },

    #[error("no handle is attached to the stream")]
    Detached,

    #[error("stream is not {capability}")]
    NotCapable { capability: Capability },

    #[error("could not {op} stream: {source}")]
    Io {
        op: StreamOp,
        #[source]
        source: io::Error,
    },
}

impl StreamError {
    pub fn invalid_handle<S: ToString>(str: S) -> Self {
        Self::InvalidHandle { reason: str.to_string() }
    }

    pub fn invalid_mode<S: ToString>(mode: S) -> Self {
        Self::InvalidMode { mode: mode.to_string() }
    }

    pub fn not_capable(capability: Capability) -> Self {
        Self::NotCapable { capability }
    }

    pub fn io<E: Into<io::Error>>(op: StreamOp, e: E) -> Self {
        Self::Io { op, source: e.into() }
    }

    /// Returns the failed operation if this error came from the underlying handle.
    pub fn op(&self) -> Option<StreamOp> {
        match self {
            StreamError::Io { op, .. } => Some(*op),
            _ => None,
        }
    }
}
