use anyhow::{Context, Result};
use clap::Parser;
use glint_core::scenes;

mod cli;

use cli::{Args, FileConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let scene_name = args.scene_name(&file);
    let config = args.render_config(&file)?;

    log::info!("Starting Glint: scene '{}', output {}", scene_name, args.output.display());

    let scene = scenes::by_name(&scene_name)?;
    let image = glint_renderer::render(&scene, &config).context("Render failed")?;
    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
