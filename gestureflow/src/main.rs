//! GestureFlow - Gesture control dashboard.
//!
//! Shows a simulated camera preview, toggleable gestures, the
//! gesture-to-function mapping and detection statistics.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use iced::application;

use gestureflow::GestureFlow;
use gestureflow_common::{GestureFlowConfig, default_config_path, init_tracing, load_config};

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Gesture control dashboard with a simulated camera feed")]
struct Args {
    /// Path to configuration file (defaults to the user config directory).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// Seed the simulated feed for a reproducible detection sequence.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, source) = match args.config.or_else(existing_default_config) {
        Some(path) => {
            let config: GestureFlowConfig = load_config(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            (config, Some(path))
        }
        None => (GestureFlowConfig::default(), None),
    };

    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if let Some(seed) = args.seed {
        config.feed.seed = Some(seed);
    }

    config.validate().context("Invalid configuration")?;
    init_tracing(&config.logging)?;

    match &source {
        Some(path) => tracing::info!(path = %path.display(), "Loaded configuration"),
        None => tracing::info!("Using default configuration"),
    }
    tracing::info!("Starting GestureFlow");

    application(
        move || GestureFlow::new(config.clone()),
        GestureFlow::update,
        GestureFlow::view,
    )
    .title(GestureFlow::title)
    .subscription(GestureFlow::subscription)
    .theme(GestureFlow::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

/// The default config file, if one exists.
fn existing_default_config() -> Option<PathBuf> {
    default_config_path().filter(|path| path.exists())
}
