//! TriHarder engine crate.
//!
//! This crate owns the pieces every scene is built on: the [`outcome::Outcome`]
//! value, the deduplicating [`resource::ResourceCache`], the scene lifecycle
//! contract and the driver that sequences it.

pub mod outcome;
pub mod resource;
pub mod scene;
pub mod core;
pub mod time;

pub mod logging;
pub mod paint;

pub use outcome::Outcome;
