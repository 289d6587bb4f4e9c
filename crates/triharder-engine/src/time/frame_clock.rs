use std::time::{Duration, Instant};

/// Smallest delta a tick reports by default (0.0001s).
pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
/// Largest delta a tick reports by default (0.25s).
pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

/// Snapshot taken at one clock tick.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped seconds since the previous tick.
    pub dt: f32,
    pub now: Instant,
    /// Zero-based index of this tick.
    pub frame_index: u64,
}

/// Monotonic clock producing clamped per-frame deltas.
///
/// The clamp keeps `update_tick` stable: a tight loop never sees a zero delta,
/// and a stall (debugger, suspended process) never produces a huge one.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(DEFAULT_DT_MIN, DEFAULT_DT_MAX)
    }

    /// Clock with custom clamps. Swapped bounds are reordered.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        let (dt_min, dt_max) = if dt_min <= dt_max { (dt_min, dt_max) } else { (dt_max, dt_min) };
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Moves the baseline to now, e.g. after a scene switch.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;
        self.stamp(now, dt)
    }

    /// Advances the frame counter with a caller-supplied delta (seconds).
    ///
    /// The delta is clamped like a measured one; non-finite input maps to the
    /// minimum.
    pub fn tick_with(&mut self, dt: f32) -> FrameTime {
        let now = Instant::now();
        let dt = if dt.is_finite() && dt > 0.0 {
            Duration::from_secs_f32(dt.min(self.dt_max.as_secs_f32()))
                .clamp(self.dt_min, self.dt_max)
        } else {
            self.dt_min
        };
        self.last = now;
        self.stamp(now, dt)
    }

    fn stamp(&mut self, now: Instant, dt: Duration) -> FrameTime {
        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
