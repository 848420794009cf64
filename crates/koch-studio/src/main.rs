//! `koch`: interactive Koch snowflake viewer.
//!
//! ```text
//! koch [DEPTH] [--width W] [--height H] [--vsync] [--log FILTER]
//! ```
//!
//! Arrow keys or the slider change the depth, F3 toggles the frame-time
//! overlay, Escape quits.

mod cli;
mod game;
mod koch_scene;
mod scene;

use anyhow::Result;
use clap::Parser;
use winit::dpi::LogicalSize;

use koch_engine::device::GpuInit;
use koch_engine::logging::{LoggingConfig, init_logging};
use koch_engine::window::{Runtime, RuntimeConfig};

use crate::cli::Cli;
use crate::game::Game;
use crate::koch_scene::KochCurveScene;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let depth = cli.initial_depth();
    log::info!("starting at depth {depth}");

    let config = RuntimeConfig {
        title: game::TITLE.to_string(),
        initial_size: LogicalSize::new(f64::from(cli.width), f64::from(cli.height)),
    };

    // Colors are written as-is, without sRGB encoding.
    let gpu = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    }
    .with_vsync(cli.vsync);

    let game = Game::new(Box::new(KochCurveScene::new(depth)));
    Runtime::run(config, gpu, game)
}
