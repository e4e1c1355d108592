/// A lazily computed value that can be invalidated.
///
/// `Unknown` means "not computed since the last invalidation", which keeps it
/// apart from a computed value that is itself empty, such as the size of a
/// pipe (`Known(None)`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Cached<T> {
    #[default]
    Unknown,
    Known(T),
}

impl<T> Cached<T> {
    #[inline]
    pub(crate) fn get(&self) -> Option<&T> {
        match self {
            Cached::Unknown => None,
            Cached::Known(value) => Some(value),
        }
    }

    #[inline]
    pub(crate) fn is_known(&self) -> bool {
        matches!(self, Cached::Known(_))
    }

    /// Returns the cached value, computing and storing it first if unknown.
    pub(crate) fn get_or_insert_with<F: FnOnce() -> T>(&mut self, f: F) -> &T {
        if let Cached::Unknown = self {
            *self = Cached::Known(f());
        }

        match self {
            Cached::Known(value) => value,
            Cached::Unknown => unreachable!("value was stored above"),
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, value: T) {
        *self = Cached::Known(value);
    }

    #[inline]
    pub(crate) fn reset(&mut self) {
        *self = Cached::Unknown;
    }
}
