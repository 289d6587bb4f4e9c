use core::fmt;

/// Opaque handle to a resource stored in a [`ResourceCache`](super::ResourceCache).
///
/// Handles are issued in strictly increasing order starting at 0 and are never
/// reissued by the cache that produced them, even after the entry is removed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Handle(pub(crate) u64);

impl Handle {
    /// Raw numeric value, useful for logging and debug overlays.
    #[inline]
    pub const fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
