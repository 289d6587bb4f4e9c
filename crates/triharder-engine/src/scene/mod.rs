//! Scene lifecycle.
//!
//! Responsibilities:
//! - define the lifecycle contract every concrete scene implements
//! - make the Inactive/Active state explicit through [`Lifecycle`]
//! - report every lifecycle failure as a [`SceneError`] inside an `Outcome`

mod contract;
mod error;
mod state;

pub use contract::Scene;
pub use error::{SceneError, SceneResult};
pub use state::{Lifecycle, SceneState};
