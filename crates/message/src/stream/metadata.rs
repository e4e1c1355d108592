use crate::error::Capability;

/// Descriptive data reported by a [`Resource`](crate::stream::Resource).
///
/// The fields follow the keys of a classic stream metadata mapping; they can be
/// read directly or looked up by key through [`Metadata::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// The mode string the handle was opened with, e.g. `"r+b"`.
    pub mode: String,
    pub seekable: bool,
    /// The kind of the underlying medium, e.g. `"MEMORY"` or `"STDIO"`.
    pub stream_type: String,
    pub wrapper_type: Option<String>,
    pub uri: Option<String>,
    pub timed_out: bool,
    pub blocked: bool,
    pub eof: bool,
    pub unread_bytes: u64,
}

/// A single metadata entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Text(String),
    Flag(bool),
    Count(u64),
}

impl MetadataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            MetadataValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl Metadata {
    pub fn new<M: Into<String>, T: Into<String>>(mode: M, seekable: bool, stream_type: T) -> Self {
        Self {
            mode: mode.into(),
            seekable,
            stream_type: stream_type.into(),
            wrapper_type: None,
            uri: None,
            timed_out: false,
            blocked: true,
            eof: false,
            unread_bytes: 0,
        }
    }

    #[must_use]
    pub fn wrapper_type<S: Into<String>>(mut self, wrapper_type: S) -> Self {
        self.wrapper_type = Some(wrapper_type.into());
        self
    }

    #[must_use]
    pub fn uri<S: Into<String>>(mut self, uri: S) -> Self {
        self.uri = Some(uri.into());
        self
    }

    #[must_use]
    pub fn eof(mut self, eof: bool) -> Self {
        self.eof = eof;
        self
    }

    /// Looks up an entry by its key; unknown keys and unset optional entries yield `None`.
    pub fn get(&self, key: &str) -> Option<MetadataValue> {
        let value = match key {
            "mode" => MetadataValue::Text(self.mode.clone()),
            "seekable" => MetadataValue::Flag(self.seekable),
            "stream_type" => MetadataValue::Text(self.stream_type.clone()),
            "wrapper_type" => MetadataValue::Text(self.wrapper_type.clone()?),
            "uri" => MetadataValue::Text(self.uri.clone()?),
            "timed_out" => MetadataValue::Flag(self.timed_out),
            "blocked" => MetadataValue::Flag(self.blocked),
            "eof" => MetadataValue::Flag(self.eof),
            "unread_bytes" => MetadataValue::Count(self.unread_bytes),
            _ => return None,
        };
        Some(value)
    }

    /// Derives a capability from the mode string and the seekable flag.
    ///
    /// Readable iff the mode has `r` or `+`; writable iff it has any of `x`, `w`, `c`, `a`, `+`.
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::Readable => self.mode.contains(['r', '+']),
            Capability::Writable => self.mode.contains(['x', 'w', 'c', 'a', '+']),
            Capability::Seekable => self.seekable,
        }
    }
}
