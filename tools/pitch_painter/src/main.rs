use std::path::PathBuf;

use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use log::info;
use pitch::Pitch;
use pitch_renderer::PitchRenderer;

use configuration::{load_positions, Configuration};
use logging::setup_logger;

mod configuration;
mod logging;

/// Render a futsal pitch diagram to an image file
#[derive(Parser)]
struct Arguments {
    /// TOML or JSON file with `measurements`, `projection`, `style` and `annotator` sections
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON array of `[x, y]` positions in centimeters to mark on the pitch
    #[arg(long)]
    positions: Option<PathBuf>,
    /// Log every drawing pass
    #[arg(short, long)]
    verbose: bool,
    /// Output image, format chosen by extension
    output: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let arguments = Arguments::parse();
    setup_logger(arguments.verbose)?;

    let configuration = match &arguments.config {
        Some(path) => Configuration::load(path)?,
        None => Configuration::default(),
    };

    let pitch = Pitch::new(configuration.measurements).wrap_err("invalid pitch measurements")?;
    let renderer = PitchRenderer::new(configuration.projection, configuration.style)
        .wrap_err("invalid projection")?;

    let mut surface = renderer
        .allocate_surface(&pitch)
        .wrap_err("failed to allocate the output image")?;
    renderer.render(&mut surface, &pitch);

    if let Some(path) = &arguments.positions {
        let positions = load_positions(path)?;
        info!("marking {} positions", positions.len());
        configuration
            .annotator
            .annotate(&mut surface, renderer.projection(), &positions);
    }

    let image = surface.into_image();
    image
        .save(&arguments.output)
        .wrap_err_with(|| format!("failed to write {}", arguments.output.display()))?;
    info!(
        "wrote {}x{} image to {}",
        image.width(),
        image.height(),
        arguments.output.display()
    );
    Ok(())
}
