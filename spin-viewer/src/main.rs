//! spin-viewer: desktop front-end for the spin-tap mini-game
//!
//! Usage: spin-viewer [--config game.json] [--menu-music a.ogg] [--game-music b.ogg]

mod app;
mod audio;
mod renderer;

use anyhow::{Context, Result};
use clap::Parser;
use spin_core::GameConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spin-viewer")]
#[command(about = "Tap to spin; score full turns before the clock runs out")]
struct Args {
    /// JSON file with game tunables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Round length in seconds
    #[arg(long)]
    duration_secs: Option<u64>,

    /// Number of sprite frames
    #[arg(long)]
    frames: Option<u32>,

    /// Velocity decay rate per second
    #[arg(long)]
    damping: Option<f64>,

    /// Velocity added per tap (degrees/second)
    #[arg(long)]
    tap_boost: Option<f64>,

    /// Music for the start screen
    #[arg(long)]
    menu_music: Option<PathBuf>,

    /// Music played during a round
    #[arg(long)]
    game_music: Option<PathBuf>,
}

/// Build the game config from the optional file plus CLI overrides
fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading config: {}", path.display());
            GameConfig::from_path(path)?
        }
        None => GameConfig::default(),
    };

    if let Some(secs) = args.duration_secs {
        config.duration_ms = secs.saturating_mul(1000);
    }
    if let Some(frames) = args.frames {
        config.frames = frames;
    }
    if let Some(damping) = args.damping {
        config.damping = damping;
    }
    if let Some(tap_boost) = args.tap_boost {
        config.tap_boost = tap_boost;
    }

    config.validate().context("Invalid game configuration")?;
    Ok(config)
}

/// Drop music paths that do not exist
fn existing(path: Option<PathBuf>) -> Option<PathBuf> {
    let path = path?;
    if path.exists() {
        Some(path)
    } else {
        log::warn!("Audio file not found: {}. Playback will be silent.", path.display());
        None
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;

    log::info!(
        "Round: {} s, {} frames, damping {}, tap boost {}",
        config.duration_ms / 1000,
        config.frames,
        config.damping,
        config.tap_boost
    );

    let menu_music = existing(args.menu_music);
    let game_music = existing(args.game_music);

    // Run the application
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_title("spin-viewer"),
        vsync: true,
        ..Default::default()
    };

    eframe::run_native(
        "spin-viewer",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::SpinApp::new(cc, config, menu_music, game_music)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
