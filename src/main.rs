mod app;
mod config;
mod logging;
mod plexus;
mod theme;

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;

use crate::config::PlexusConfig;
use crate::theme::Theme;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file overriding lattice, wave and palette settings.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
    #[arg(long, default_value_t = 1440.0)]
    width: f32,
    #[arg(long, default_value_t = 920.0)]
    height: f32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level)?;
    let config = PlexusConfig::load(args.config.as_deref())?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([args.width, args.height]),
        ..Default::default()
    };

    let theme = args.theme;
    eframe::run_native(
        "plexus",
        options,
        Box::new(move |cc| Ok(Box::new(app::PlexusApp::new(cc, config, theme)))),
    )
    .map_err(|error| anyhow!("failed to start window: {error}"))
}
