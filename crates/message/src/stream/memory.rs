//! An in-memory resource, the usual backing for request and response bodies built in code.

use std::io;
use std::io::SeekFrom;

use crate::error::StreamError;
use crate::stream::metadata::Metadata;
use crate::stream::mode::OpenMode;
use crate::stream::resource::{Resource, Stat};

const DEFAULT_MODE: &str = "w+b";

/// A growable byte buffer with a cursor.
///
/// Seeking past the end of the buffer is rejected; writes at the cursor overwrite
/// and then extend the buffer, or always extend it in append mode.
#[derive(Debug, Clone)]
pub struct MemoryResource {
    data: Vec<u8>,
    position: usize,
    mode: OpenMode,
    eof: bool,
}

impl Default for MemoryResource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryResource {
    pub fn new() -> Self {
        Self { data: Vec::new(), position: 0, mode: Self::default_mode(), eof: false }
    }

    pub fn with_mode(mode: &str) -> Result<Self, StreamError> {
        Ok(Self { data: Vec::new(), position: 0, mode: OpenMode::parse(mode)?, eof: false })
    }

    /// Seeds the buffer; the cursor ends up after the seeded bytes.
    pub fn with_contents<B: Into<Vec<u8>>>(mode: &str, contents: B) -> Result<Self, StreamError> {
        let data = contents.into();
        let position = data.len();
        Ok(Self { data, position, mode: OpenMode::parse(mode)?, eof: false })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn default_mode() -> OpenMode {
        match OpenMode::parse(DEFAULT_MODE) {
            Ok(mode) => mode,
            Err(_) => unreachable!("the default memory mode is well formed"),
        }
    }

    fn remaining(&self) -> &[u8] {
        self.data.get(self.position..).unwrap_or_default()
    }
}

impl Resource for MemoryResource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.mode.is_readable() {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "memory stream is not opened for reading"));
        }

        let remaining = self.remaining();
        let len = remaining.len().min(buf.len());
        buf[..len].copy_from_slice(&remaining[..len]);
        self.position += len;
        self.eof = self.position >= self.data.len();
        Ok(len)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.mode.is_writable() {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "memory stream is not opened for writing"));
        }

        if self.mode.is_append() {
            self.position = self.data.len();
        }

        let overlap = (self.data.len() - self.position).min(buf.len());
        self.data[self.position..self.position + overlap].copy_from_slice(&buf[..overlap]);
        self.data.extend_from_slice(&buf[overlap..]);
        self.position += buf.len();
        Ok(buf.len())
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let len = self.data.len() as i128;
        let target = match pos {
            SeekFrom::Start(offset) => i128::from(offset),
            SeekFrom::Current(offset) => self.position as i128 + i128::from(offset),
            SeekFrom::End(offset) => len + i128::from(offset),
        };

        if target < 0 || target > len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("seek position {target} is outside of the buffer (length {len})"),
            ));
        }

        self.position = usize::try_from(target).map_err(io::Error::other)?;
        self.eof = false;
        Ok(self.position as u64)
    }

    fn tell(&mut self) -> io::Result<u64> {
        Ok(self.position as u64)
    }

    fn eof(&self) -> bool {
        self.eof
    }

    fn stat(&self) -> io::Result<Stat> {
        Ok(Stat::sized(self.data.len() as u64))
    }

    fn metadata(&self) -> Metadata {
        Metadata::new(self.mode.as_str(), true, "MEMORY").wrapper_type("memory").uri("memory://").eof(self.eof)
    }
}
