//! Headless playback of a gesture trace through a game session.

use crate::{
    config::Config,
    error::{Error, Result},
    session::{FrameOutcome, GameSession, SessionStats, SessionView},
    trace::{Trace, TraceClassifier},
};
use log::{debug, info};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Trace standing in for camera and recognizer
    pub trace_source: TraceSource,
    /// Game configuration
    pub game: Config,
}

/// Where the trace comes from
#[derive(Debug, Clone)]
pub enum TraceSource {
    /// YAML trace file
    File(PathBuf),
    /// Already loaded trace
    Inline(Trace),
}

/// Final state of a playback run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSummary {
    pub view: SessionView,
    pub stats: SessionStats,
}

/// Main application struct
pub struct SimulationApp {
    trace: Trace,
    ticks_per_frame: u32,
    session: GameSession<TraceClassifier>,
}

impl SimulationApp {
    /// Create a new playback application
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing gesture catch playback");
        let mut session = GameSession::from_config(&config.game)?;

        let trace = match config.trace_source {
            TraceSource::File(path) => {
                info!("Loading trace: {}", path.display());
                Trace::from_file(&path)?
            }
            TraceSource::Inline(trace) => trace,
        };
        info!("Trace has {} frames", trace.len());

        session.resize(config.game.surface.width, config.game.surface.height);
        if !session.attach_classifier(TraceClassifier) {
            return Err(Error::UpstreamUnavailable("Trace classifier was not installed".to_string()));
        }

        Ok(Self {
            trace,
            ticks_per_frame: config.game.playback.ticks_per_frame,
            session,
        })
    }

    /// Play every frame of the trace, then tear the session down
    pub fn run(&mut self) -> Result<PlaybackSummary> {
        info!("Starting playback");

        for frame in &self.trace.frames {
            let outcome = self.session.on_frame(frame, frame.timestamp_ms);
            match outcome {
                FrameOutcome::Skipped(reason) => {
                    debug!("Frame at {:.1} ms skipped: {:?}", frame.timestamp_ms, reason);
                }
                FrameOutcome::Processed { .. } if outcome.is_hit() => {
                    info!(
                        "Score {} at {:.1} ms",
                        self.session.view().score,
                        frame.timestamp_ms
                    );
                }
                FrameOutcome::Processed { .. } => {}
            }

            for _ in 0..self.ticks_per_frame {
                self.session.tick();
            }
        }

        let summary = PlaybackSummary {
            view: self.session.view(),
            stats: self.session.stats(),
        };
        self.session.teardown();

        info!("Playback finished with score {}", summary.view.score);
        Ok(summary)
    }

    pub fn session(&self) -> &GameSession<TraceClassifier> {
        &self.session
    }
}
