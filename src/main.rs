//! Replays recorded hand-landmark detections through the gesture pipeline.

use anyhow::Result;
use clap::Parser;
use hand_gesture_control::app::{AppConfig, InputSource, ReplayApp};
use hand_gesture_control::config::{Config, EXAMPLE_CONFIG};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON Lines file of detector events (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Print an example configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log a session summary when the input ends
    #[arg(short, long)]
    summary: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Hand Gesture Control - replay");

    // Load configuration if provided
    let pipeline = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    let config = AppConfig {
        input: args.input.map_or(InputSource::Stdin, InputSource::File),
        pipeline,
        summary: args.summary,
    };

    // Create and run application
    let mut app = ReplayApp::new(config)?;
    app.run()?;

    Ok(())
}
