//! Frame timing.
//!
//! The scene driver owns one [`FrameClock`] and feeds each tick's delta into
//! `Scene::update_tick`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime, DEFAULT_DT_MAX, DEFAULT_DT_MIN};
