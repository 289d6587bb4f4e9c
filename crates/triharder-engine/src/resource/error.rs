use std::path::PathBuf;

use thiserror::Error;

/// Why a resource could not be produced from a path.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid resource {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}

impl LoadError {
    pub fn invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Invalid { path: path.into(), reason: reason.into() }
    }

    /// Path that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Invalid { path, .. } => path,
        }
    }
}

/// Failure of [`ResourceCache::add`](super::ResourceCache::add).
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("resource load failed: {0}")]
    Load(#[from] LoadError),
}

impl CacheError {
    /// Path of the resource the cache was asked to add.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Load(e) => e.path(),
        }
    }
}
