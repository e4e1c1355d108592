use std::io;
use std::io::SeekFrom;

use bytes::{Bytes, BytesMut};
use thiserror::Error;
use tracing::{debug, trace};

use crate::ensure;
use crate::error::{Capability, StreamError, StreamOp};
use crate::stream::cached::Cached;
use crate::stream::metadata::{Metadata, MetadataValue};
use crate::stream::resource::{Handle, Resource};

/// Read size used by [`Stream::contents`] unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// A byte stream over an owned [`Handle`].
///
/// The stream is either attached (it owns a handle) or unattached. Every I/O
/// operation needs an attached handle and, depending on the operation, a
/// readable, writable or seekable one. The capabilities, the size and the
/// metadata are computed on first use and cached:
///
/// - replacing or detaching the handle forgets all of them
/// - a successful [`write`](Stream::write) forgets the size and the metadata
/// - seeking forgets nothing
///
/// # Example
///
/// ```
/// use micro_message::stream::{Handle, Stream};
///
/// let mut stream = Stream::new(Handle::memory_with("r+", "abc").unwrap()).unwrap();
/// stream.write(b"def").unwrap();
/// stream.rewind().unwrap();
/// assert_eq!(&stream.contents().unwrap()[..], b"abcdef");
/// assert_eq!(stream.size(), Some(6));
/// ```
#[derive(Debug)]
pub struct Stream {
    handle: Option<Handle>,
    meta: Cached<Metadata>,
    readable: Cached<bool>,
    writable: Cached<bool>,
    seekable: Cached<bool>,
    size: Cached<Option<u64>>,
    chunk_size: usize,
}

impl Stream {
    /// Creates a stream that owns `handle`.
    ///
    /// # Errors
    ///
    /// [`StreamError::InvalidHandle`] if the handle is no longer live.
    pub fn new(handle: Handle) -> Result<Self, StreamError> {
        let mut stream = Self::unattached(DEFAULT_CHUNK_SIZE);
        stream.attach(handle)?;
        Ok(stream)
    }

    pub fn builder() -> StreamBuilder {
        StreamBuilder::new()
    }

    fn unattached(chunk_size: usize) -> Self {
        Self {
            handle: None,
            meta: Cached::Unknown,
            readable: Cached::Unknown,
            writable: Cached::Unknown,
            seekable: Cached::Unknown,
            size: Cached::Unknown,
            chunk_size,
        }
    }

    /// Takes ownership of `handle`.
    ///
    /// A handle that was attached before is detached and handed back to the
    /// caller unclosed. All cached values are forgotten.
    ///
    /// # Errors
    ///
    /// [`StreamError::InvalidHandle`] if `handle` is no longer live; the current
    /// handle then stays attached.
    pub fn attach(&mut self, handle: Handle) -> Result<Option<Handle>, StreamError> {
        ensure!(handle.is_live(), StreamError::invalid_handle("the handle is not a live resource"));

        let previous = self.detach();
        self.handle = Some(handle);
        debug!(replaced = previous.is_some(), "attached stream handle");
        Ok(previous)
    }

    /// Gives up the handle, leaving the stream unattached.
    ///
    /// Returns `None` if nothing was attached.
    pub fn detach(&mut self) -> Option<Handle> {
        let handle = self.handle.take();
        self.meta.reset();
        self.readable.reset();
        self.writable.reset();
        self.seekable.reset();
        self.size.reset();

        if handle.is_some() {
            debug!("detached stream handle");
        }
        handle
    }

    /// Detaches the handle and releases it. Closing an unattached stream does nothing.
    pub fn close(&mut self) -> Result<(), StreamError> {
        match self.detach() {
            Some(handle) => handle.close(),
            None => Ok(()),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// The length in bytes, if known.
    ///
    /// `None` when unattached, when the medium has no fixed size, or when the
    /// stat query fails; a failed query is retried on the next call.
    pub fn size(&mut self) -> Option<u64> {
        let handle = self.handle.as_ref()?;

        if let Some(size) = self.size.get() {
            return *size;
        }

        match handle.resource().stat() {
            Ok(stat) => {
                trace!(size = ?stat.size, "computed stream size");
                self.size.set(stat.size);
                stat.size
            }
            Err(e) => {
                debug!(cause = %e, "failed to stat stream, size unknown");
                None
            }
        }
    }

    /// The current position of the cursor.
    pub fn tell(&mut self) -> Result<u64, StreamError> {
        let handle = self.handle.as_mut().ok_or(StreamError::Detached)?;
        handle.resource_mut().tell().map_err(|e| StreamError::io(StreamOp::Tell, e))
    }

    /// Whether the end of the data has been reached; always true when unattached.
    pub fn eof(&self) -> bool {
        self.handle.as_ref().is_none_or(|handle| handle.resource().eof())
    }

    pub fn is_readable(&mut self) -> bool {
        self.capability(Capability::Readable)
    }

    pub fn is_writable(&mut self) -> bool {
        self.capability(Capability::Writable)
    }

    pub fn is_seekable(&mut self) -> bool {
        self.capability(Capability::Seekable)
    }

    /// Moves the cursor and returns its new position.
    ///
    /// # Errors
    ///
    /// Fails if the stream is unattached or not seekable, or if the handle rejects the seek.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64, StreamError> {
        self.seek_as(pos, StreamOp::Seek)
    }

    /// Moves the cursor to the start; same as `seek(SeekFrom::Start(0))`.
    pub fn rewind(&mut self) -> Result<(), StreamError> {
        self.seek_as(SeekFrom::Start(0), StreamOp::Rewind).map(|_| ())
    }

    fn seek_as(&mut self, pos: SeekFrom, op: StreamOp) -> Result<u64, StreamError> {
        let resource = self.require(Capability::Seekable)?;
        let position = resource.seek(pos).map_err(|e| StreamError::io(op, e))?;
        trace!(?pos, position, "moved stream cursor");
        Ok(position)
    }

    /// Writes `buf` at the cursor, returning how many bytes were written.
    ///
    /// The count may be smaller than `buf.len()`. A successful write forgets the
    /// cached size and metadata, not the capabilities.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, StreamError> {
        let resource = self.require(Capability::Writable)?;
        let written = retry_interrupted(|| resource.write(buf)).map_err(|e| StreamError::io(StreamOp::Write, e))?;

        self.size.reset();
        self.meta.reset();
        trace!(written, "wrote to stream");
        Ok(written)
    }

    /// Reads up to `length` bytes from the cursor.
    ///
    /// Fewer bytes, possibly none, are returned when fewer are available. A single
    /// call never returns more than the configured chunk size.
    pub fn read(&mut self, length: usize) -> Result<Bytes, StreamError> {
        let chunk_size = self.chunk_size;
        let resource = self.require(Capability::Readable)?;

        let mut buf = BytesMut::zeroed(length.min(chunk_size));
        let read = retry_interrupted(|| resource.read(&mut buf)).map_err(|e| StreamError::io(StreamOp::Read, e))?;
        buf.truncate(read);

        trace!(requested = length, read, "read from stream");
        Ok(buf.freeze())
    }

    /// Reads everything from the cursor to the end.
    pub fn contents(&mut self) -> Result<Bytes, StreamError> {
        let chunk_size = self.chunk_size;
        let resource = self.require(Capability::Readable)?;

        let mut contents = BytesMut::new();
        loop {
            let start = contents.len();
            contents.resize(start + chunk_size, 0);
            let read = retry_interrupted(|| resource.read(&mut contents[start..]))
                .map_err(|e| StreamError::io(StreamOp::Contents, e))?;
            contents.truncate(start + read);

            if read == 0 {
                break;
            }
        }

        trace!(len = contents.len(), "read stream contents");
        Ok(contents.freeze())
    }

    /// Best-effort conversion of the whole stream into text.
    ///
    /// Rewinds and reads everything. Never fails: an unattached, unreadable or
    /// failing stream yields an empty string. Invalid UTF-8 is replaced lossily.
    /// Use [`rewind`](Stream::rewind) and [`contents`](Stream::contents) when the
    /// failure matters.
    pub fn to_text(&mut self) -> String {
        if !self.is_readable() {
            return String::new();
        }

        match self.rewind().and_then(|()| self.contents()) {
            Ok(contents) => String::from_utf8_lossy(&contents).into_owned(),
            Err(e) => {
                debug!(cause = %e, "stream could not be converted to text");
                String::new()
            }
        }
    }

    /// The metadata of the attached handle, fetched once and cached.
    pub fn metadata(&mut self) -> Option<&Metadata> {
        let handle = self.handle.as_ref()?;
        Some(self.meta.get_or_insert_with(|| {
            trace!("fetched stream metadata");
            handle.resource().metadata()
        }))
    }

    /// A single metadata entry, `None` if unattached or the key is absent.
    pub fn metadata_value(&mut self, key: &str) -> Option<MetadataValue> {
        self.metadata()?.get(key)
    }

    fn capability(&mut self, capability: Capability) -> bool {
        if self.handle.is_none() {
            return false;
        }

        if let Some(flag) = self.flag(capability).get() {
            return *flag;
        }

        let flag = self.metadata().is_some_and(|meta| meta.allows(capability));
        trace!(%capability, flag, "computed stream capability");
        self.flag(capability).set(flag);
        flag
    }

    fn flag(&mut self, capability: Capability) -> &mut Cached<bool> {
        match capability {
            Capability::Readable => &mut self.readable,
            Capability::Writable => &mut self.writable,
            Capability::Seekable => &mut self.seekable,
        }
    }

    /// Returns the resource if a handle is attached and has `capability`.
    fn require(&mut self, capability: Capability) -> Result<&mut dyn Resource, StreamError> {
        ensure!(self.handle.is_some(), StreamError::Detached);
        ensure!(self.capability(capability), StreamError::not_capable(capability));
        self.handle.as_mut().map(Handle::resource_mut).ok_or(StreamError::Detached)
    }
}

fn retry_interrupted<T, F: FnMut() -> io::Result<T>>(mut f: F) -> io::Result<T> {
    loop {
        match f() {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            result => return result,
        }
    }
}

/// Configuration for a [`Stream`].
#[derive(Debug)]
pub struct StreamBuilder {
    handle: Option<Handle>,
    chunk_size: usize,
}

#[derive(Error, Debug)]
pub enum StreamBuildError {
    #[error("handle must be set")]
    MissingHandle,

    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,

    #[error("attach error: {source}")]
    Attach {
        #[from]
        source: StreamError,
    },
}

impl StreamBuilder {
    fn new() -> Self {
        Self { handle: None, chunk_size: DEFAULT_CHUNK_SIZE }
    }

    #[must_use]
    pub fn handle(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Size of each read issued by [`Stream::contents`], and the most a single
    /// [`Stream::read`] returns.
    #[must_use]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn build(self) -> Result<Stream, StreamBuildError> {
        let handle = self.handle.ok_or(StreamBuildError::MissingHandle)?;
        if self.chunk_size == 0 {
            return Err(StreamBuildError::ZeroChunkSize);
        }

        let mut stream = Stream::unattached(self.chunk_size);
        stream.attach(handle)?;
        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::stream::resource::{MockResource, Stat};

    fn memory(mode: &str, contents: &str) -> Stream {
        Stream::new(Handle::memory_with(mode, contents).unwrap()).unwrap()
    }

    fn live_mock(mode: &'static str, seekable: bool) -> MockResource {
        let mut mock = MockResource::new();
        mock.expect_is_live().return_const(true);
        mock.expect_metadata().returning(move || Metadata::new(mode, seekable, "MOCK"));
        mock
    }

    #[test]
    fn test_write_rewind_contents() {
        let mut stream = memory("r+", "abc");

        assert_eq!(stream.write(b"def").unwrap(), 3);
        stream.rewind().unwrap();
        assert_eq!(&stream.contents().unwrap()[..], b"abcdef");
        assert!(stream.eof());
    }

    #[test]
    fn test_detach_resets_everything() {
        let mut stream = memory("r", "abc");
        assert!(stream.is_readable());
        assert!(!stream.is_writable());
        assert!(stream.is_seekable());
        assert_eq!(stream.size(), Some(3));

        let handle = stream.detach().unwrap();
        assert!(!stream.is_attached());
        assert!(!stream.is_readable());
        assert!(!stream.is_seekable());
        assert_eq!(stream.size(), None);
        assert!(stream.metadata().is_none());
        assert!(stream.detach().is_none());

        stream.attach(Handle::memory()).unwrap();
        assert!(stream.is_writable());
        assert_eq!(stream.size(), Some(0));

        // attaching the first handle again recomputes its flags
        let replaced = stream.attach(handle).unwrap();
        assert!(replaced.is_some());
        assert!(stream.is_readable());
        assert!(!stream.is_writable());
        assert_eq!(stream.size(), Some(3));
    }

    #[test]
    fn test_reattach_refetches_metadata() {
        let mut mock = MockResource::new();
        mock.expect_is_live().return_const(true);
        mock.expect_metadata().times(2).returning(|| Metadata::new("r", true, "MOCK"));

        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        assert!(stream.is_readable());
        assert!(stream.is_seekable());
        assert!(!stream.is_writable());

        let handle = stream.detach().unwrap();
        stream.attach(handle).unwrap();
        assert!(stream.is_readable());
        assert!(stream.is_seekable());
    }

    #[test]
    fn test_flags_are_cached() {
        let mut mock = MockResource::new();
        mock.expect_is_live().return_const(true);
        mock.expect_metadata().times(1).returning(|| Metadata::new("w", false, "MOCK"));
        mock.expect_write().returning(|buf| Ok(buf.len()));

        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        assert!(stream.is_writable());
        assert!(!stream.is_readable());
        assert!(!stream.is_seekable());
        stream.write(b"x").unwrap();
        // the write dropped the metadata but not the flags
        assert!(stream.is_writable());
        assert!(!stream.is_readable());
        assert!(!stream.is_seekable());
    }

    #[test]
    fn test_write_invalidates_size_and_metadata() {
        let mut mock = live_mock("w+", true);
        let mut size = 0;
        mock.expect_stat().times(2).returning(move || {
            size += 4;
            Ok(Stat::sized(size))
        });
        mock.expect_write().times(1).returning(|buf| Ok(buf.len()));

        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        assert_eq!(stream.size(), Some(4));
        assert_eq!(stream.size(), Some(4));

        stream.write(b"data").unwrap();
        assert_eq!(stream.size(), Some(8));
        assert_eq!(stream.size(), Some(8));
    }

    #[test]
    fn test_size_of_memory_follows_writes() {
        let mut stream = Stream::new(Handle::memory()).unwrap();
        assert_eq!(stream.size(), Some(0));
        stream.write(b"hello").unwrap();
        assert_eq!(stream.size(), Some(5));
    }

    #[test]
    fn test_size_unknown() {
        let mut stream = Stream::new(Handle::reader(Cursor::new(b"abc".to_vec()))).unwrap();
        assert_eq!(stream.size(), None);

        let mut mock = live_mock("r", false);
        mock.expect_stat().times(2).returning(|| Err(io::Error::other("stat failed")));
        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        // a failed stat is not cached
        assert_eq!(stream.size(), None);
        assert_eq!(stream.size(), None);
    }

    #[test]
    fn test_seek_and_rewind_agree() {
        let mut stream = memory("r+", "hello world");

        stream.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(stream.tell().unwrap(), 0);

        assert_eq!(stream.seek(SeekFrom::End(-5)).unwrap(), 6);
        assert_eq!(stream.tell().unwrap(), 6);
        assert_eq!(stream.seek(SeekFrom::Current(-1)).unwrap(), 5);

        stream.rewind().unwrap();
        assert_eq!(stream.tell().unwrap(), 0);
        assert_eq!(&stream.read(5).unwrap()[..], b"hello");
    }

    #[test]
    fn test_seek_failures() {
        let mut stream = Stream::new(Handle::reader(Cursor::new(Vec::new()))).unwrap();
        assert!(matches!(
            stream.seek(SeekFrom::Start(0)),
            Err(StreamError::NotCapable { capability: Capability::Seekable })
        ));
        assert!(matches!(stream.rewind(), Err(StreamError::NotCapable { .. })));

        let mut stream = memory("r", "abc");
        let err = stream.seek(SeekFrom::Start(10)).unwrap_err();
        assert_eq!(err.op(), Some(StreamOp::Seek));

        let mut mock = live_mock("r", true);
        mock.expect_seek().returning(|_| Err(io::Error::other("device gone")));
        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        assert_eq!(stream.rewind().unwrap_err().op(), Some(StreamOp::Rewind));
    }

    #[test]
    fn test_seek_to_zero_is_success() {
        let mut mock = live_mock("r", true);
        mock.expect_seek().times(1).returning(|_| Ok(0));
        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        assert_eq!(stream.seek(SeekFrom::Start(0)).unwrap(), 0);
    }

    #[test]
    fn test_unattached_operations() {
        let mut stream = memory("r+", "abc");
        drop(stream.detach());

        assert!(stream.eof());
        assert!(matches!(stream.tell(), Err(StreamError::Detached)));
        assert!(matches!(stream.read(1), Err(StreamError::Detached)));
        assert!(matches!(stream.write(b"x"), Err(StreamError::Detached)));
        assert!(matches!(stream.contents(), Err(StreamError::Detached)));
        assert!(matches!(stream.seek(SeekFrom::Start(0)), Err(StreamError::Detached)));
        assert_eq!(stream.metadata_value("mode"), None);
        stream.close().unwrap();
    }

    #[test]
    fn test_to_text_never_fails() {
        let mut stream = memory("r+", "abc");
        drop(stream.detach());
        assert_eq!(stream.to_text(), "");

        let mut stream = Stream::new(Handle::writer(Vec::new())).unwrap();
        stream.write(b"hidden").unwrap();
        assert_eq!(stream.to_text(), "");

        let mut stream = memory("w+", "hello");
        assert_eq!(stream.to_text(), "hello");
        // the cursor position does not matter
        assert_eq!(stream.to_text(), "hello");

        let mut stream = Stream::new(Handle::reader(Cursor::new(b"pipe".to_vec()))).unwrap();
        assert_eq!(stream.to_text(), "");

        let mut mock = live_mock("r", true);
        mock.expect_seek().returning(|_| Ok(0));
        mock.expect_read().returning(|_| Err(io::Error::other("read failed")));
        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        assert_eq!(stream.to_text(), "");
    }

    #[test]
    fn test_to_text_is_lossy() {
        let mut stream = Stream::new(Handle::memory_with("r", vec![b'a', 0xff, b'b']).unwrap()).unwrap();
        assert_eq!(stream.to_text(), "a\u{fffd}b");
    }

    #[test]
    fn test_read() {
        let mut stream = memory("r", "abc");
        stream.rewind().unwrap();

        assert_eq!(&stream.read(2).unwrap()[..], b"ab");
        assert!(!stream.eof());
        // a short read is not an error
        assert_eq!(&stream.read(10).unwrap()[..], b"c");
        assert!(stream.eof());
        assert!(stream.read(10).unwrap().is_empty());
        assert!(stream.read(0).unwrap().is_empty());
    }

    #[test]
    fn test_read_huge_length() {
        let mut stream = memory("r+", "abc");
        stream.rewind().unwrap();
        assert_eq!(&stream.read(usize::MAX).unwrap()[..], b"abc");

        stream.rewind().unwrap();
        assert_eq!(&stream.read(1 << 40).unwrap()[..], b"abc");
        assert!(stream.read(usize::MAX).unwrap().is_empty());
    }

    #[test]
    fn test_read_failures() {
        let mut stream = Stream::new(Handle::writer(Vec::new())).unwrap();
        assert!(matches!(stream.read(1), Err(StreamError::NotCapable { capability: Capability::Readable })));
        assert!(matches!(stream.contents(), Err(StreamError::NotCapable { .. })));

        let mut mock = live_mock("r", false);
        let mut interrupted = false;
        mock.expect_read().returning(move |_| {
            if interrupted {
                Err(io::Error::other("connection reset"))
            } else {
                interrupted = true;
                Err(io::Error::from(io::ErrorKind::Interrupted))
            }
        });
        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        assert_eq!(stream.read(4).unwrap_err().op(), Some(StreamOp::Read));
        assert_eq!(stream.contents().unwrap_err().op(), Some(StreamOp::Contents));
    }

    #[test]
    fn test_write_failures() {
        let mut stream = memory("r", "abc");
        assert!(matches!(stream.write(b"x"), Err(StreamError::NotCapable { capability: Capability::Writable })));

        let mut mock = live_mock("a", false);
        mock.expect_stat().times(1).returning(|| Ok(Stat::sized(1)));
        mock.expect_write().times(1).returning(|_| Err(io::Error::other("disk full")));
        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        assert_eq!(stream.size(), Some(1));
        assert_eq!(stream.write(b"x").unwrap_err().op(), Some(StreamOp::Write));
        // a failed write keeps the cached size
        assert_eq!(stream.size(), Some(1));
    }

    #[test]
    fn test_short_write() {
        let mut mock = live_mock("w", false);
        mock.expect_write().returning(|buf| Ok(buf.len().min(2)));
        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        assert_eq!(stream.write(b"abcdef").unwrap(), 2);
    }

    #[test]
    fn test_metadata() {
        let mut stream = memory("r+b", "abc");
        let meta = stream.metadata().unwrap();
        assert_eq!(meta.mode, "r+b");
        assert_eq!(meta.stream_type, "MEMORY");

        assert_eq!(stream.metadata_value("seekable"), Some(MetadataValue::Flag(true)));
        assert_eq!(stream.metadata_value("mode").as_ref().and_then(MetadataValue::as_text), Some("r+b"));
        assert_eq!(stream.metadata_value("missing"), None);
    }

    #[test]
    fn test_metadata_is_cached_until_write() {
        let mut mock = MockResource::new();
        mock.expect_is_live().return_const(true);
        mock.expect_metadata().times(2).returning(|| Metadata::new("w", false, "MOCK"));
        mock.expect_write().returning(|buf| Ok(buf.len()));

        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        assert!(stream.metadata().is_some());
        assert!(stream.metadata_value("mode").is_some());
        stream.write(b"x").unwrap();
        assert!(stream.metadata().is_some());
        assert!(stream.metadata().is_some());
    }

    #[test]
    fn test_attach_rejects_dead_handle() {
        let mut dead = MockResource::new();
        dead.expect_is_live().return_const(false);

        assert!(matches!(Stream::new(Handle::from_resource(dead)), Err(StreamError::InvalidHandle { .. })));

        let mut dead = MockResource::new();
        dead.expect_is_live().return_const(false);
        let mut stream = memory("r", "abc");
        assert!(matches!(stream.attach(Handle::from_resource(dead)), Err(StreamError::InvalidHandle { .. })));
        // the current handle stays attached
        assert!(stream.is_attached());
        assert_eq!(stream.to_text(), "abc");
    }

    #[test]
    fn test_close() {
        let mut mock = live_mock("r", false);
        mock.expect_close().times(1).returning(|| Ok(()));

        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        stream.close().unwrap();
        assert!(!stream.is_attached());
        // closing again is a no-op
        stream.close().unwrap();
    }

    #[test]
    fn test_close_reports_failure() {
        let mut mock = live_mock("w", false);
        mock.expect_close().times(1).returning(|| Err(io::Error::other("flush failed")));

        let mut stream = Stream::new(Handle::from_resource(mock)).unwrap();
        assert_eq!(stream.close().unwrap_err().op(), Some(StreamOp::Close));
        assert!(!stream.is_attached());
    }

    #[test]
    fn test_builder() {
        let handle = Handle::memory_with("r", "0123456789").unwrap();
        let mut stream = Stream::builder().handle(handle).chunk_size(3).build().unwrap();
        stream.rewind().unwrap();
        assert_eq!(&stream.contents().unwrap()[..], b"0123456789");

        assert!(stream.eof());
        assert_eq!(stream.to_text(), "0123456789");

        // the chunk size bounds a single read
        stream.rewind().unwrap();
        assert_eq!(&stream.read(5).unwrap()[..], b"012");

        assert!(matches!(Stream::builder().build(), Err(StreamBuildError::MissingHandle)));
        assert!(matches!(
            Stream::builder().handle(Handle::memory()).chunk_size(0).build(),
            Err(StreamBuildError::ZeroChunkSize)
        ));
    }

    #[test]
    fn test_file_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body");

        let mut stream = Stream::new(Handle::open(&path, "w+").unwrap()).unwrap();
        assert!(stream.is_readable());
        assert!(stream.is_writable());
        assert!(stream.is_seekable());

        stream.write(b"file body").unwrap();
        assert_eq!(stream.size(), Some(9));
        assert_eq!(stream.to_text(), "file body");
        stream.close().unwrap();

        let mut stream = Stream::new(Handle::open(&path, "r").unwrap()).unwrap();
        assert!(!stream.is_writable());
        assert_eq!(&stream.read(4).unwrap()[..], b"file");
        assert_eq!(stream.tell().unwrap(), 4);
        assert_eq!(&stream.contents().unwrap()[..], b" body");
    }
}
