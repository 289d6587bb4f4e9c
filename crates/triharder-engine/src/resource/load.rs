use std::path::Path;

use crate::outcome::Outcome;

use super::LoadError;

/// Contract for anything the cache can produce from a file path.
///
/// Implementors either return a fully built resource or the cause of failure;
/// a half-loaded value never reaches the cache.
pub trait Load: Sized {
    fn load_from_file(path: &Path) -> Outcome<Self, LoadError>;
}

/// Raw file contents.
///
/// No format parsing is done; scenes decode the bytes however they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBytes {
    bytes: Vec<u8>,
}

impl FileBytes {
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Load for FileBytes {
    fn load_from_file(path: &Path) -> Outcome<Self, LoadError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(source) => {
                return Outcome::failure(LoadError::Io { path: path.to_path_buf(), source });
            }
        };

        // An empty file never holds a usable resource.
        if bytes.is_empty() {
            return Outcome::failure(LoadError::invalid(path, "file is empty"));
        }

        Outcome::success(Self { bytes })
    }
}
