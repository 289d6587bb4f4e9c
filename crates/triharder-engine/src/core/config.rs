use std::time::Duration;

use crate::time::{DEFAULT_DT_MAX, DEFAULT_DT_MIN};

/// Scene driver configuration.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Activation attempts per `start`/`switch_to` before giving up.
    ///
    /// Zero is treated as one.
    pub max_activation_attempts: u32,

    /// Whether the outgoing scene releases its resources on `switch_to`.
    pub close_on_switch: bool,

    /// Frame clock clamps for the delta passed to `update_tick`.
    pub dt_min: Duration,
    pub dt_max: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_activation_attempts: 3,
            close_on_switch: true,
            dt_min: DEFAULT_DT_MIN,
            dt_max: DEFAULT_DT_MAX,
        }
    }
}
