//! Gesture catch playback: replays a recorded gesture trace through the game.

use anyhow::{Context, Result};
use clap::Parser;
use gesture_catch::{
    app::{AppConfig, SimulationApp, TraceSource},
    config::{Config, EXAMPLE_CONFIG},
};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Gesture trace to replay (YAML)
    #[arg(short, long, required_unless_present = "print_config")]
    trace: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Surface width override
    #[arg(long)]
    width: Option<f64>,

    /// Surface height override
    #[arg(long)]
    height: Option<f64>,

    /// Seed for marker re-entry positions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Animation ticks per classified frame
    #[arg(long)]
    ticks_per_frame: Option<u32>,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

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

    info!("Gesture Catch");

    // Load configuration if provided
    let mut game = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(width) = args.width {
        game.surface.width = width;
    }
    if let Some(height) = args.height {
        game.surface.height = height;
    }
    if let Some(seed) = args.seed {
        game.marker.seed = Some(seed);
    }
    if let Some(ticks) = args.ticks_per_frame {
        game.playback.ticks_per_frame = ticks;
    }

    let trace = args.trace.context("No trace given")?;
    let config = AppConfig {
        trace_source: TraceSource::File(trace),
        game,
    };

    // Create and run application
    let mut app = SimulationApp::new(config)?;
    let summary = app.run()?;

    println!("Score: {}", summary.view.score);
    println!(
        "Frames: {} processed, {} stale, {} without classifier",
        summary.stats.frames_processed, summary.stats.frames_skipped_stale, summary.stats.frames_skipped_upstream
    );
    println!(
        "Grabs: {} ({} hits, {} misses, {} skipped)",
        summary.stats.proc_events, summary.stats.hits, summary.stats.misses, summary.stats.correlations_skipped
    );
    println!(
        "Last gesture: {} at ({:.2}, {:.2})",
        summary.view.current_gesture_label,
        summary.view.current_gesture_position.x,
        summary.view.current_gesture_position.y
    );

    Ok(())
}
