use std::fmt;
use std::io;
use std::io::{Read, SeekFrom, Write};

use crate::stream::metadata::Metadata;
use crate::stream::resource::{Resource, Stat};

enum Direction {
    Reader(Box<dyn Read>),
    Writer(Box<dyn Write>),
}

/// A one-directional, non-seekable resource, such as a socket half, a child
/// process pipe or standard input.
///
/// The size is never known. `tell` reports the number of bytes transferred so far.
pub struct PipeResource {
    direction: Direction,
    transferred: u64,
    eof: bool,
}

impl fmt::Debug for PipeResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipeResource")
            .field("mode", &self.mode())
            .field("transferred", &self.transferred)
            .field("eof", &self.eof)
            .finish()
    }
}

impl PipeResource {
    pub fn reader<R: Read + 'static>(reader: R) -> Self {
        Self { direction: Direction::Reader(Box::new(reader)), transferred: 0, eof: false }
    }

    pub fn writer<W: Write + 'static>(writer: W) -> Self {
        Self { direction: Direction::Writer(Box::new(writer)), transferred: 0, eof: false }
    }

    fn mode(&self) -> &'static str {
        match self.direction {
            Direction::Reader(_) => "r",
            Direction::Writer(_) => "w",
        }
    }
}

impl Resource for PipeResource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Direction::Reader(reader) = &mut self.direction else {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "pipe is write-only"));
        };

        let read = reader.read(buf)?;
        self.eof = read == 0 && !buf.is_empty();
        self.transferred += read as u64;
        Ok(read)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Direction::Writer(writer) = &mut self.direction else {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "pipe is read-only"));
        };

        let written = writer.write(buf)?;
        self.transferred += written as u64;
        Ok(written)
    }

    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "pipe is not seekable"))
    }

    fn tell(&mut self) -> io::Result<u64> {
        Ok(self.transferred)
    }

    fn eof(&self) -> bool {
        self.eof
    }

    fn stat(&self) -> io::Result<Stat> {
        Ok(Stat::unknown())
    }

    fn metadata(&self) -> Metadata {
        Metadata::new(self.mode(), false, "PIPE").eof(self.eof)
    }

    fn close(&mut self) -> io::Result<()> {
        match &mut self.direction {
            Direction::Reader(_) => Ok(()),
            Direction::Writer(writer) => writer.flush(),
        }
    }
}
