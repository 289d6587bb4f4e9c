use super::{SceneResult, SceneState};

/// Lifecycle contract implemented by every concrete scene.
///
/// Expected call order: `activate`, then any number of `update_tick`, `update`
/// and `draw`, then `deactivate`. A scene may be activated again afterwards.
///
/// Implementors track their own state (usually with a
/// [`Lifecycle`](super::Lifecycle)) and must:
/// - leave the scene Inactive when `activate` fails
/// - report `InvalidStateTransition` for `update`, `update_tick` and `draw`
///   while Inactive instead of doing nothing
/// - reload on the next `activate` whatever `deactivate(true)` released
pub trait Scene {
    /// Loads resources and sets up render objects, then becomes Active.
    fn activate(&mut self) -> SceneResult;

    /// Becomes Inactive. `close` asks the scene to release its resources
    /// rather than keep them for a quick resume.
    fn deactivate(&mut self, close: bool) -> SceneResult;

    fn update(&mut self) -> SceneResult;

    /// Time-stepped update; `dt` is the frame delta in seconds.
    fn update_tick(&mut self, dt: f32) -> SceneResult;

    fn draw(&mut self) -> SceneResult;

    fn state(&self) -> SceneState;

    /// Name used in log output.
    fn name(&self) -> &str {
        "scene"
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::outcome::Outcome;
    use crate::resource::{FileBytes, Handle, ResourceCache};
    use crate::scene::{Lifecycle, SceneError};

    /// Minimal textured scene: loads one texture through the cache on activate.
    struct SpriteScene {
        lifecycle: Lifecycle,
        cache: ResourceCache<FileBytes>,
        texture_path: PathBuf,
        texture: Option<Handle>,
        activations: u32,
        ticks: u32,
        draws: u32,
    }

    impl SpriteScene {
        fn new(texture_path: &Path) -> Self {
            Self {
                lifecycle: Lifecycle::new(),
                cache: ResourceCache::new(),
                texture_path: texture_path.to_path_buf(),
                texture: None,
                activations: 0,
                ticks: 0,
                draws: 0,
            }
        }

        fn texture_name(&self) -> String {
            self.texture_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        }
    }

    impl Scene for SpriteScene {
        fn activate(&mut self) -> SceneResult {
            let name = self.texture_name();
            let cache = &mut self.cache;
            let path = &self.texture_path;
            let texture = &mut self.texture;
            let activations = &mut self.activations;

            self.lifecycle.activate_with(|| {
                *activations += 1;
                if texture.is_some() {
                    return Outcome::success(());
                }
                cache
                    .add(path)
                    .map(|h| *texture = Some(h))
                    .map_failure(|_| SceneError::texture_load(name))
            })
        }

        fn deactivate(&mut self, close: bool) -> SceneResult {
            let cache = &mut self.cache;
            let texture = &mut self.texture;

            self.lifecycle.deactivate_with(|| {
                if close {
                    if let Some(h) = texture.take() {
                        cache.remove(h);
                    }
                }
                Outcome::success(())
            })
        }

        fn update(&mut self) -> SceneResult {
            self.lifecycle.guard_active("update")
        }

        fn update_tick(&mut self, _dt: f32) -> SceneResult {
            self.lifecycle.guard_active("update").map(|()| self.ticks += 1)
        }

        fn draw(&mut self) -> SceneResult {
            self.lifecycle.guard_active("draw").map(|()| self.draws += 1)
        }

        fn state(&self) -> SceneState {
            self.lifecycle.state()
        }
    }

    fn texture_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"\x89PNG").unwrap();
        path
    }

    #[test]
    fn update_and_draw_before_activate_are_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let mut scene = SpriteScene::new(&texture_file(dir.path(), "a.png"));

        for out in [scene.update(), scene.update_tick(0.016), scene.draw()] {
            assert!(matches!(out.unwrap_error(), SceneError::InvalidStateTransition(_)));
        }
        assert_eq!(scene.state(), SceneState::Inactive);
        assert_eq!(scene.draws, 0);
    }

    #[test]
    fn active_scene_updates_and_draws() {
        let dir = tempfile::tempdir().unwrap();
        let mut scene = SpriteScene::new(&texture_file(dir.path(), "a.png"));

        assert!(scene.activate().is_success());
        assert_eq!(scene.state(), SceneState::Active);
        assert!(scene.update().is_success());
        assert!(scene.update_tick(0.016).is_success());
        assert!(scene.draw().is_success());
        assert_eq!((scene.ticks, scene.draws), (1, 1));
    }

    #[test]
    fn failed_activation_can_be_retried_after_fixing_resource() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.png");
        let mut scene = SpriteScene::new(&path);

        let err = scene.activate().unwrap_error();
        assert_eq!(err, SceneError::texture_load("hero.png"));
        assert_eq!(scene.state(), SceneState::Inactive);

        texture_file(dir.path(), "hero.png");
        assert!(scene.activate().is_success());
        assert_eq!(scene.state(), SceneState::Active);
    }

    #[test]
    fn closing_deactivation_forces_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut scene = SpriteScene::new(&texture_file(dir.path(), "a.png"));

        let _ = scene.activate();
        let first = scene.texture.unwrap();

        assert!(scene.deactivate(true).is_success());
        assert!(scene.cache.is_empty());
        assert!(scene.draw().is_failure());

        assert!(scene.activate().is_success());
        let second = scene.texture.unwrap();
        assert_ne!(first, second);
        assert!(scene.cache.has(second));
    }

    #[test]
    fn suspending_deactivation_keeps_resources() {
        let dir = tempfile::tempdir().unwrap();
        let mut scene = SpriteScene::new(&texture_file(dir.path(), "a.png"));

        let _ = scene.activate();
        let handle = scene.texture.unwrap();

        assert!(scene.deactivate(false).is_success());
        assert!(scene.cache.has(handle));

        assert!(scene.activate().is_success());
        assert_eq!(scene.texture, Some(handle));
        assert_eq!(scene.activations, 2);
    }
}
