//! Byte streams over owned I/O handles.
//!
//! A [`Stream`] owns at most one [`Handle`], which in turn owns a [`Resource`]:
//! an in-memory buffer ([`MemoryResource`]), a file ([`FileResource`]), a one-way
//! pipe ([`PipeResource`]) or any custom implementation of the trait.
//!
//! # Lifecycle
//!
//! - [`Stream::new`] / [`Stream::attach`]: the stream takes the handle
//! - [`Stream::detach`]: the handle moves back to the caller, the stream is unusable for I/O
//! - [`Stream::close`]: detach and release the handle
//!
//! # Capabilities
//!
//! Whether a stream is readable, writable or seekable is derived from the
//! handle's [`Metadata`]: the mode string decides reading and writing, the
//! `seekable` entry decides seeking. Operations that need a capability the
//! stream lacks fail with [`StreamError::NotCapable`](crate::StreamError::NotCapable).

mod byte_stream;
mod cached;
mod file;
mod memory;
mod metadata;
mod mode;
mod pipe;
mod resource;

pub use byte_stream::DEFAULT_CHUNK_SIZE;
pub use byte_stream::Stream;
pub use byte_stream::StreamBuildError;
pub use byte_stream::StreamBuilder;

pub use file::FileResource;
pub use memory::MemoryResource;
pub use pipe::PipeResource;

pub use metadata::Metadata;
pub use metadata::MetadataValue;

pub use mode::OpenMode;

pub use resource::Handle;
pub use resource::Resource;
pub use resource::Stat;
