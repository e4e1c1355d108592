use std::fs::File;
use std::io;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{StreamError, StreamOp};
use crate::stream::metadata::Metadata;
use crate::stream::mode::OpenMode;
use crate::stream::resource::{Resource, Stat};

/// A resource backed by a file on disk.
#[derive(Debug)]
pub struct FileResource {
    file: File,
    mode: OpenMode,
    path: Option<PathBuf>,
    eof: bool,
}

impl FileResource {
    /// Opens `path` with an fopen-style mode such as `"r"`, `"w+"` or `"a+b"`.
    pub fn open<P: AsRef<Path>>(path: P, mode: &str) -> Result<Self, StreamError> {
        let mode = OpenMode::parse(mode)?;
        let path = path.as_ref();
        let file = mode.open_options().open(path).map_err(|e| StreamError::io(StreamOp::Open, e))?;
        trace!(path = %path.display(), mode = mode.as_str(), "opened file resource");
        Ok(Self { file, mode, path: Some(path.to_path_buf()), eof: false })
    }

    /// Wraps an open file. `mode` is taken on trust: it decides the reported
    /// capabilities but is not checked against how `file` was opened.
    pub fn from_file(file: File, mode: &str) -> Result<Self, StreamError> {
        Ok(Self { file, mode: OpenMode::parse(mode)?, path: None, eof: false })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Resource for FileResource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.file.read(buf)?;
        self.eof = read == 0 && !buf.is_empty();
        Ok(read)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let position = self.file.seek(pos)?;
        self.eof = false;
        Ok(position)
    }

    fn tell(&mut self) -> io::Result<u64> {
        self.file.stream_position()
    }

    fn eof(&self) -> bool {
        self.eof
    }

    fn stat(&self) -> io::Result<Stat> {
        let metadata = self.file.metadata()?;
        Ok(if metadata.is_file() { Stat::sized(metadata.len()) } else { Stat::unknown() })
    }

    fn metadata(&self) -> Metadata {
        let seekable = self.file.metadata().is_ok_and(|metadata| metadata.is_file());
        let meta = Metadata::new(self.mode.as_str(), seekable, "STDIO").wrapper_type("plainfile").eof(self.eof);
        match &self.path {
            Some(path) => meta.uri(path.display().to_string()),
            None => meta,
        }
    }

    fn close(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
