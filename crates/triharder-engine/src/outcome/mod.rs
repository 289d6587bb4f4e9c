//! Success/failure values.
//!
//! Every fallible operation in the cache and the scene lifecycle reports through
//! [`Outcome`], so callers observe the discriminant before reaching the payload.

mod value;

pub use value::Outcome;
