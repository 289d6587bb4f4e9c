use std::path::{Path, PathBuf};

use triharder_engine::outcome::Outcome;
use triharder_engine::paint::Color;
use triharder_engine::resource::{FileBytes, Handle, ResourceCache};
use triharder_engine::scene::{Lifecycle, Scene, SceneError, SceneResult, SceneState};

const TITLE_FILE: &str = "title.txt";
const PALETTE_FILE: &str = "palette.txt";

/// Title card: a caption and a palette loaded from the asset directory.
///
/// `deactivate(true)` drops both resources; the next activation reloads them.
pub struct TitleScene {
    lifecycle: Lifecycle,
    assets: PathBuf,
    cache: ResourceCache<FileBytes>,
    title: Option<Handle>,
    palette: Vec<Color>,
    elapsed: f32,
    frames: u64,
}

impl TitleScene {
    pub fn new(assets: &Path) -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            assets: assets.to_path_buf(),
            cache: ResourceCache::new(),
            title: None,
            palette: Vec::new(),
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Loads both assets; on failure nothing stays cached, so a fixed file on
    /// disk is picked up by the next activation.
    fn load(&mut self) -> SceneResult {
        let outcome = self.load_assets();
        if outcome.is_failure() {
            self.release();
        }
        outcome
    }

    fn load_assets(&mut self) -> SceneResult {
        let title = match self.cache.add(self.assets.join(TITLE_FILE)) {
            Outcome::Success(h) => h,
            Outcome::Failure(err) => return Outcome::failure(SceneError::from(err)),
        };

        let palette = match self.cache.add(self.assets.join(PALETTE_FILE)) {
            Outcome::Success(h) => h,
            Outcome::Failure(err) => return Outcome::failure(SceneError::from(err)),
        };

        let Some(bytes) = self.cache.get(palette) else {
            return Outcome::failure(SceneError::resource_load());
        };

        let colors: Result<Vec<_>, _> = String::from_utf8_lossy(bytes.bytes())
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(Color::from_hex)
            .collect();

        match colors {
            Ok(colors) if !colors.is_empty() => {
                self.title = Some(title);
                self.palette = colors;
                Outcome::success(())
            }
            Ok(_) => {
                let message = format!("{PALETTE_FILE} has no colors");
                Outcome::failure(SceneError::ResourceLoad(message))
            }
            Err(err) => {
                let message = format!("{PALETTE_FILE}: {err}");
                Outcome::failure(SceneError::ResourceLoad(message))
            }
        }
    }

    fn release(&mut self) {
        self.title = None;
        self.cache.clear();
        self.palette.clear();
    }
}

impl Scene for TitleScene {
    fn activate(&mut self) -> SceneResult {
        if self.lifecycle.is_active() {
            return Outcome::failure(SceneError::invalid_transition_for("activate", self.state()));
        }

        let loaded = if self.title.is_some() { Outcome::success(()) } else { self.load() };
        self.lifecycle.activate_with(|| loaded)
    }

    fn deactivate(&mut self, close: bool) -> SceneResult {
        let outcome = self.lifecycle.deactivate_with(|| Outcome::success(()));
        if outcome.is_success() && close {
            self.release();
        }
        outcome
    }

    fn update(&mut self) -> SceneResult {
        self.lifecycle.guard_active("update")
    }

    fn update_tick(&mut self, dt: f32) -> SceneResult {
        self.lifecycle.guard_active("update").map(|()| self.elapsed += dt)
    }

    fn draw(&mut self) -> SceneResult {
        if let Outcome::Failure(err) = self.lifecycle.guard_active("draw") {
            return Outcome::failure(err);
        }

        let clear = self.palette[(self.frames as usize) % self.palette.len()];
        self.frames += 1;

        if self.frames % 60 == 1 {
            let caption = self
                .title
                .and_then(|h| self.cache.get(h))
                .map(|b| {
                    let text = String::from_utf8_lossy(b.bytes());
                    text.lines().next().unwrap_or("").to_string()
                })
                .unwrap_or_default();
            log::debug!("{caption} | clear {} | t = {:.2}s", clear.to_hex(), self.elapsed);
        }
        Outcome::success(())
    }

    fn state(&self) -> SceneState {
        self.lifecycle.state()
    }

    fn name(&self) -> &str {
        "title"
    }
}
