use crate::outcome::Outcome;
use crate::scene::{Scene, SceneError, SceneResult, SceneState};
use crate::time::FrameClock;

use super::DriverConfig;

/// Control directive returned after each driven frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Control {
    Continue,
    Exit,
}

/// Drives one current scene through its lifecycle.
///
/// Lifecycle failures never panic here: activation and shutdown return the
/// scene's `Outcome`, and a failing frame is logged and turned into
/// [`Control::Exit`]. What to do next is the caller's decision.
pub struct SceneDriver {
    config: DriverConfig,
    clock: FrameClock,
    scene: Option<Box<dyn Scene>>,
    frames: u64,
}

impl SceneDriver {
    pub fn new(config: DriverConfig) -> Self {
        let clock = FrameClock::with_clamps(config.dt_min, config.dt_max);
        Self {
            config,
            clock,
            scene: None,
            frames: 0,
        }
    }

    /// Installs `scene` without activating it.
    pub fn with_scene<S>(mut self, scene: S) -> Self
    where
        S: Scene + 'static,
    {
        self.scene = Some(Box::new(scene));
        self
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn scene(&self) -> Option<&dyn Scene> {
        self.scene.as_deref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut (dyn Scene + 'static)> {
        self.scene.as_deref_mut()
    }

    /// State of the current scene, `None` when no scene is installed.
    pub fn state(&self) -> Option<SceneState> {
        self.scene.as_ref().map(|s| s.state())
    }

    /// Frames that ran to completion.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Activates the current scene, retrying up to the configured limit.
    pub fn start(&mut self) -> SceneResult {
        self.activate_current()
    }

    /// Replaces the current scene and activates the new one.
    ///
    /// An Active outgoing scene is deactivated first (releasing resources when
    /// `close_on_switch` is set); if that fails the switch is abandoned and the
    /// old scene stays installed. If the new scene fails to activate it stays
    /// installed, Inactive, and the failure is returned.
    pub fn switch_to<S>(&mut self, scene: S) -> SceneResult
    where
        S: Scene + 'static,
    {
        if let Some(current) = self.scene.as_mut() {
            if current.state() == SceneState::Active {
                if let Outcome::Failure(err) = current.deactivate(self.config.close_on_switch) {
                    log::error!("scene '{}' refused to deactivate: {err}", current.name());
                    return Outcome::failure(err);
                }
            }
            log::info!("leaving scene '{}'", current.name());
        }

        self.scene = Some(Box::new(scene));
        self.activate_current()
    }

    /// Deactivates the current scene.
    pub fn stop(&mut self, close: bool) -> SceneResult {
        let Some(scene) = self.scene.as_mut() else {
            return Outcome::failure(no_scene());
        };

        let outcome = scene.deactivate(close);
        match &outcome {
            Outcome::Success(()) => {
                log::info!("scene '{}' deactivated (close: {close})", scene.name());
            }
            Outcome::Failure(err) => {
                log::error!("scene '{}' failed to deactivate: {err}", scene.name());
            }
        }
        outcome
    }

    /// Runs one frame with the clock's measured delta.
    pub fn frame(&mut self) -> Control {
        let dt = self.clock.tick().dt;
        self.step(dt)
    }

    /// Runs one frame with a caller-supplied delta (seconds, clamped).
    pub fn frame_with_dt(&mut self, dt: f32) -> Control {
        let dt = self.clock.tick_with(dt).dt;
        self.step(dt)
    }

    /// Runs up to `n` frames, stopping at the first `Exit`.
    ///
    /// Returns the number of frames that completed.
    pub fn run_frames(&mut self, n: usize) -> usize {
        let mut completed = 0;
        for _ in 0..n {
            if self.frame() == Control::Exit {
                break;
            }
            completed += 1;
        }
        completed
    }

    fn activate_current(&mut self) -> SceneResult {
        let Some(scene) = self.scene.as_mut() else {
            return Outcome::failure(no_scene());
        };

        let attempts = self.config.max_activation_attempts.max(1);
        let mut last = no_scene();

        for attempt in 1..=attempts {
            let err = match scene.activate() {
                Outcome::Success(()) => {
                    log::info!("scene '{}' activated", scene.name());
                    self.clock.reset();
                    return Outcome::success(());
                }
                Outcome::Failure(err) => err,
            };

            // Retrying cannot fix an out-of-order call.
            if matches!(err, SceneError::InvalidStateTransition(_)) {
                log::error!("scene '{}' cannot be activated: {err}", scene.name());
                return Outcome::failure(err);
            }

            log::warn!(
                "scene '{}' activation attempt {attempt}/{attempts} failed: {err}",
                scene.name(),
            );
            last = err;
        }

        log::error!("scene '{}' failed to activate after {attempts} attempts", scene.name());
        Outcome::failure(last)
    }

    fn step(&mut self, dt: f32) -> Control {
        let Some(scene) = self.scene.as_mut() else {
            log::warn!("frame requested with no scene installed");
            return Control::Exit;
        };

        let outcome = scene
            .update_tick(dt)
            .map_failure(|e| ("update_tick", e))
            .and_then(|()| scene.update().map_failure(|e| ("update", e)))
            .and_then(|()| scene.draw().map_failure(|e| ("draw", e)));

        match outcome {
            Outcome::Success(()) => {
                self.frames += 1;
                Control::Continue
            }
            Outcome::Failure((op, err)) => {
                log::error!("scene '{}' {op} failed: {err}", scene.name());
                Control::Exit
            }
        }
    }
}

impl Default for SceneDriver {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

fn no_scene() -> SceneError {
    SceneError::generic("no scene installed")
}
