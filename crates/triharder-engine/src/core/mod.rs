//! Scene driver.
//!
//! This module sequences the lifecycle of the current scene: activation with
//! retries, per-frame `update_tick`/`update`/`draw`, scene switches and
//! shutdown. It is windowing-agnostic; a platform loop calls [`SceneDriver::frame`]
//! once per presented frame.

mod config;
mod driver;

pub use config::DriverConfig;
pub use driver::{Control, SceneDriver};
