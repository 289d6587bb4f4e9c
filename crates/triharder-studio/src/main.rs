mod title;

use std::path::PathBuf;

use anyhow::{Context, Result};
use triharder_engine::core::{DriverConfig, SceneDriver};
use triharder_engine::logging::{init_logging, LoggingConfig};

use title::TitleScene;

const DEFAULT_FRAMES: usize = 120;

fn main() -> Result<()> {
    init_logging(LoggingConfig::console_and_file("TriHarder"))?;

    // Usage: triharder-studio [asset-dir] [frames]
    let mut args = std::env::args().skip(1);
    let assets = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets")));
    let frames = match args.next() {
        Some(n) => n.parse::<usize>().with_context(|| format!("invalid frame count {n:?}"))?,
        None => DEFAULT_FRAMES,
    };

    log::info!("studio starting with assets from {}", assets.display());

    let mut driver = SceneDriver::new(DriverConfig::default()).with_scene(TitleScene::new(&assets));

    driver
        .start()
        .into_result()
        .context("title scene failed to activate")?;

    let ran = driver.run_frames(frames);
    log::info!("ran {ran}/{frames} frames");

    driver
        .stop(true)
        .into_result()
        .context("title scene failed to shut down")?;

    anyhow::ensure!(ran == frames, "scene loop stopped after {ran} of {frames} frames");
    Ok(())
}
