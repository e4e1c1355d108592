//! fopen-style mode strings.

use std::fs::OpenOptions;

use crate::error::StreamError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Access {
    /// `r`: open existing, read
    Read,
    /// `w`: create or truncate, write
    Write,
    /// `a`: create, every write goes to the end
    Append,
    /// `x`: create, fail if the file exists
    CreateNew,
    /// `c`: create, never truncate
    Create,
}

/// A parsed mode string such as `"r+b"`.
///
/// The first character picks the access kind, a `+` adds the other direction and
/// the `b`/`t` translation flags are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenMode {
    raw: String,
    access: Access,
    update: bool,
}

impl OpenMode {
    pub fn parse(mode: &str) -> Result<Self, StreamError> {
        let mut chars = mode.chars();
        let access = match chars.next() {
            Some('r') => Access::Read,
            Some('w') => Access::Write,
            Some('a') => Access::Append,
            Some('x') => Access::CreateNew,
            Some('c') => Access::Create,
            _ => return Err(StreamError::invalid_mode(mode)),
        };

        let mut update = false;
        for c in chars {
            match c {
                '+' if !update => update = true,
                'b' | 't' => {}
                _ => return Err(StreamError::invalid_mode(mode)),
            }
        }

        Ok(Self { raw: mode.to_string(), access, update })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_readable(&self) -> bool {
        self.update || self.access == Access::Read
    }

    pub fn is_writable(&self) -> bool {
        self.update || self.access != Access::Read
    }

    pub fn is_append(&self) -> bool {
        self.access == Access::Append
    }

    /// Whether opening in this mode empties an existing file.
    pub fn truncates(&self) -> bool {
        self.access == Access::Write
    }

    pub(crate) fn open_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.read(self.is_readable());
        match self.access {
            Access::Read => {
                options.write(self.update);
            }
            Access::Write => {
                options.write(true).create(true).truncate(true);
            }
            Access::Append => {
                options.append(true).create(true);
            }
            Access::CreateNew => {
                options.write(true).create_new(true);
            }
            Access::Create => {
                options.write(true).create(true);
            }
        }
        options
    }
}
