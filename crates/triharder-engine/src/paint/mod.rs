//! Color values and conversions.
//!
//! Scenes use [`Color`] for clear colors and tints; the conversions here are
//! pure and allocation-free apart from [`Color::to_hex`].

pub mod color;

pub use color::{Color, ColorError};
