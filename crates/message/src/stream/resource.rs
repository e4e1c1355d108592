use std::fmt;
use std::fs;
use std::io;
use std::io::{Read, SeekFrom, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{StreamError, StreamOp};
use crate::stream::file::FileResource;
use crate::stream::memory::MemoryResource;
use crate::stream::metadata::Metadata;
use crate::stream::pipe::PipeResource;

/// Result of a stat-like query on a resource.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Stat {
    /// Length in bytes, `None` when the medium has no fixed size.
    pub size: Option<u64>,
}

impl Stat {
    pub fn sized(size: u64) -> Self {
        Self { size: Some(size) }
    }

    pub fn unknown() -> Self {
        Self { size: None }
    }
}

/// The I/O primitives a [`Stream`](crate::stream::Stream) drives.
///
/// Implementations report raw `io::Error`s; capability gating and caching are
/// done by the stream.
#[cfg_attr(test, mockall::automock)]
pub trait Resource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64>;

    fn tell(&mut self) -> io::Result<u64> {
        self.seek(SeekFrom::Current(0))
    }

    /// Whether the last read hit the end of the data.
    fn eof(&self) -> bool;

    fn stat(&self) -> io::Result<Stat>;

    fn metadata(&self) -> Metadata;

    /// Flushes and releases what the resource holds; the resource is dropped afterwards.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Whether the resource can still perform I/O.
    fn is_live(&self) -> bool {
        true
    }
}

/// Exclusive ownership of a [`Resource`].
///
/// A handle is move-only: attaching it to a stream moves it in, detaching moves
/// it back out. Dropping a handle releases the resource without reporting errors;
/// [`Handle::close`] releases it and reports them.
pub struct Handle {
    resource: Box<dyn Resource>,
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").field("live", &self.resource.is_live()).finish_non_exhaustive()
    }
}

impl Handle {
    pub fn from_resource<R: Resource + 'static>(resource: R) -> Self {
        Self { resource: Box::new(resource) }
    }

    /// An empty in-memory handle opened `"w+b"`.
    pub fn memory() -> Self {
        Self::from_resource(MemoryResource::new())
    }

    /// An in-memory handle holding `contents`, positioned after them as if they had just been written.
    pub fn memory_with<B: Into<Vec<u8>>>(mode: &str, contents: B) -> Result<Self, StreamError> {
        MemoryResource::with_contents(mode, contents).map(Self::from_resource)
    }

    /// Opens a file with an fopen-style mode string.
    pub fn open<P: AsRef<Path>>(path: P, mode: &str) -> Result<Self, StreamError> {
        FileResource::open(path, mode).map(Self::from_resource)
    }

    /// Wraps an already open file.
    ///
    /// `mode` must describe how `file` was opened. It is not verified: a mode
    /// claiming more access than the file has makes the stream report that
    /// capability, and the failure only surfaces as an I/O error on use.
    pub fn file(file: fs::File, mode: &str) -> Result<Self, StreamError> {
        FileResource::from_file(file, mode).map(Self::from_resource)
    }

    /// A read-only, non-seekable handle over any reader.
    pub fn reader<R: Read + 'static>(reader: R) -> Self {
        Self::from_resource(PipeResource::reader(reader))
    }

    /// A write-only, non-seekable handle over any writer.
    pub fn writer<W: Write + 'static>(writer: W) -> Self {
        Self::from_resource(PipeResource::writer(writer))
    }

    pub fn is_live(&self) -> bool {
        self.resource.is_live()
    }

    pub fn resource(&self) -> &dyn Resource {
        self.resource.as_ref()
    }

    pub fn resource_mut(&mut self) -> &mut dyn Resource {
        self.resource.as_mut()
    }

    pub fn into_inner(self) -> Box<dyn Resource> {
        self.resource
    }

    /// Releases the resource, reporting any error from the final flush.
    pub fn close(mut self) -> Result<(), StreamError> {
        debug!("closing stream handle");
        self.resource.close().map_err(|e| StreamError::io(StreamOp::Close, e))
    }
}
