//! Resource cache.
//!
//! Responsibilities:
//! - load resources from file paths through the [`Load`] contract
//! - deduplicate by path so each file is loaded once while cached
//! - hand out stable, never-reused [`Handle`]s for lookup

mod cache;
mod error;
mod handle;
mod load;

pub use cache::ResourceCache;
pub use error::{CacheError, LoadError};
pub use handle::Handle;
pub use load::{FileBytes, Load};
