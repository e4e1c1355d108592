//! The core of a micro HTTP message layer
//!
//! This crate holds the two pieces request, response and URI value objects are
//! built on:
//!
//! - [`stream`]: a byte stream over an owned I/O handle, with lazily computed and
//!   cached size, metadata and capabilities
//! - [`normalize`]: pure validation and canonicalization of HTTP protocol elements
//!   (version, method, status code, header name, URI components, request target)
//!
//! # Example
//!
//! ```
//! use micro_message::normalize::{normalize_method, normalize_uri_query};
//! use micro_message::stream::{Handle, Stream};
//!
//! let method = normalize_method(Some("post")).unwrap();
//! assert_eq!(method, Some(http::Method::POST));
//! assert_eq!(normalize_uri_query("?q=micro http"), "q=micro%20http");
//!
//! let mut body = Stream::new(Handle::memory()).unwrap();
//! body.write(b"{\"hello\":\"world\"}").unwrap();
//! assert_eq!(body.to_text(), "{\"hello\":\"world\"}");
//! ```
//!
//! # Error Handling
//!
//! - [`InvalidArgument`]: a normalizer rejected its input
//! - [`StreamError`]: a stream operation failed or was not permitted
//!
//! Nothing is retried or recovered internally. The one lenient operation is
//! [`Stream::to_text`](stream::Stream::to_text), which turns any failure into an
//! empty string.
//!
//! # Logging
//!
//! Stream lifecycle events and cache recomputation are reported through
//! `tracing`; install a subscriber to see them.

pub mod error;
pub mod normalize;
pub mod stream;

pub use error::Capability;
pub use error::InvalidArgument;
pub use error::StreamError;
pub use error::StreamOp;

mod utils;
pub(crate) use utils::ensure;
