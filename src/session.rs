//! One capture session: classification and animation triggers.
//!
//! The session is the only owner of mutable game state. Each trigger runs to
//! completion before returning, so a classification trigger always goes
//! window update, vote, confirmed gesture, optional grab event, collision
//! check, score and reset, with nothing interleaved.
//!
//! Lifecycle:
//!
//! * `Idle` - no classifier yet; frames are skipped and ticks do nothing.
//! * `Active` - classifier installed; both triggers run.
//! * `TornDown` - terminal; late classifier loads are discarded.

use crate::classifier::{extract_sample, GestureClassifier};
use crate::config::Config;
use crate::correlator::{Correlator, ScoreDecision};
use crate::gesture::{CurrentGesture, GestureLabel, Position, RawSample};
use crate::marker::MarkerSimulator;
use crate::smoother::{GestureSmoother, Transition};
use crate::Result;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Active,
    TornDown,
}

/// Why a classification trigger did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Timestamp not strictly after the last processed frame
    StaleFrame,
    /// Classifier not installed yet, or it failed on this frame
    UpstreamUnavailable,
    /// Session was torn down
    NoSession,
}

/// What one classification trigger did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    Skipped(SkipReason),
    Processed {
        sample: RawSample,
        transition: Option<Transition>,
        /// Present when the frame completed an open palm then fist grab
        decision: Option<ScoreDecision>,
    },
}

impl FrameOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            Self::Processed {
                decision: Some(ScoreDecision::Hit),
                ..
            }
        )
    }
}

/// Handle for an in-flight classifier load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Read-only state for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionView {
    pub current_gesture_label: GestureLabel,
    pub current_gesture_position: Position,
    pub score: u64,
    /// Surface coordinates
    pub marker_position: Position,
}

/// Counters for a session run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub frames_processed: u64,
    pub frames_skipped_stale: u64,
    pub frames_skipped_upstream: u64,
    pub proc_events: u64,
    pub hits: u64,
    pub misses: u64,
    pub correlations_skipped: u64,
    pub ticks: u64,
}

/// Smoother, correlator and marker wired to the two triggers
///
/// Score and marker only change through the triggers; the marker is
/// handed out read-only.
///
/// ```compile_fail
/// use gesture_catch::{config::Config, session::GameSession, trace::TraceClassifier};
///
/// let mut session = GameSession::<TraceClassifier>::from_config(&Config::default()).unwrap();
/// session.marker().record_hit();
/// ```
pub struct GameSession<C: GestureClassifier> {
    phase: SessionPhase,
    classifier: Option<C>,
    smoother: GestureSmoother,
    correlator: Correlator,
    marker: MarkerSimulator,
    last_timestamp_ms: Option<f64>,
    load_generation: u64,
    stats: SessionStats,
}

impl<C: GestureClassifier> GameSession<C> {
    /// Idle session from explicit components
    pub fn new(smoother: GestureSmoother, correlator: Correlator, marker: MarkerSimulator) -> Self {
        Self {
            phase: SessionPhase::Idle,
            classifier: None,
            smoother,
            correlator,
            marker,
            last_timestamp_ms: None,
            load_generation: 0,
            stats: SessionStats::default(),
        }
    }

    /// Idle session built from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration does not validate
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let marker = match config.marker.seed {
            Some(seed) => MarkerSimulator::with_seed(
                config.surface.width,
                config.surface.height,
                config.marker.vertical_step,
                seed,
            ),
            None => MarkerSimulator::with_rng(
                config.surface.width,
                config.surface.height,
                config.marker.vertical_step,
                StdRng::from_entropy(),
            ),
        };
        Ok(Self::new(
            GestureSmoother::new(config.smoothing.window_capacity),
            Correlator::new(config.correlation.tolerance),
            marker,
        ))
    }

    /// Start loading a classifier; only the newest ticket can install
    pub fn begin_classifier_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        LoadTicket {
            generation: self.load_generation,
        }
    }

    /// Install a loaded classifier
    ///
    /// Returns `false` and drops the classifier when the ticket is stale or
    /// the session was torn down while it loaded.
    pub fn install_classifier(&mut self, ticket: LoadTicket, classifier: C) -> bool {
        if self.phase == SessionPhase::TornDown {
            warn!("Discarding {} loaded after teardown", classifier.name());
            return false;
        }
        if ticket.generation != self.load_generation {
            warn!(
                "Discarding {} from superseded load (ticket {}, current {})",
                classifier.name(),
                ticket.generation,
                self.load_generation
            );
            return false;
        }
        info!("Classifier ready: {}", classifier.name());
        self.classifier = Some(classifier);
        self.phase = SessionPhase::Active;
        true
    }

    /// Load and install in one step
    pub fn attach_classifier(&mut self, classifier: C) -> bool {
        let ticket = self.begin_classifier_load();
        self.install_classifier(ticket, classifier)
    }

    /// Classification trigger for a new video frame
    pub fn on_frame(&mut self, frame: &C::Frame, timestamp_ms: f64) -> FrameOutcome {
        if let Some(reason) = self.check_frame(timestamp_ms) {
            return FrameOutcome::Skipped(reason);
        }

        let Some(classifier) = self.classifier.as_mut() else {
            self.stats.frames_skipped_upstream += 1;
            return FrameOutcome::Skipped(SkipReason::UpstreamUnavailable);
        };

        let sample = match classifier.classify(frame, timestamp_ms) {
            Ok(Some(recognition)) if !recognition.is_empty() => extract_sample(&recognition),
            Ok(_) => RawSample::none(),
            Err(e) => {
                warn!("Classifier failed at {timestamp_ms:.1} ms: {e}");
                self.stats.frames_skipped_upstream += 1;
                return FrameOutcome::Skipped(SkipReason::UpstreamUnavailable);
            }
        };

        self.last_timestamp_ms = Some(timestamp_ms);
        self.process_sample(sample)
    }

    /// Classification trigger for a sample classified elsewhere
    pub fn on_sample(&mut self, timestamp_ms: f64, sample: RawSample) -> FrameOutcome {
        if let Some(reason) = self.check_frame(timestamp_ms) {
            return FrameOutcome::Skipped(reason);
        }
        self.last_timestamp_ms = Some(timestamp_ms);
        self.process_sample(sample)
    }

    /// Animation trigger: advance the marker one frame
    pub fn tick(&mut self) {
        if self.phase != SessionPhase::Active {
            return;
        }
        self.marker.advance();
        self.stats.ticks += 1;
    }

    /// Rendering surface changed size
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.phase == SessionPhase::TornDown {
            return;
        }
        debug!("Surface resized to {width}x{height}");
        self.marker.resize(width, height);
    }

    /// Stop the session; later triggers and loads are ignored
    pub fn teardown(&mut self) {
        if self.phase == SessionPhase::TornDown {
            return;
        }
        info!(
            "Session torn down after {} frames, score {}",
            self.stats.frames_processed,
            self.marker.score()
        );
        self.phase = SessionPhase::TornDown;
        self.classifier = None;
        self.smoother.reset();
        self.load_generation += 1;
    }

    pub fn view(&self) -> SessionView {
        let current = self.smoother.current();
        SessionView {
            current_gesture_label: current.label,
            current_gesture_position: current.position,
            score: self.marker.score(),
            marker_position: self.marker.position(),
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_gesture(&self) -> CurrentGesture {
        self.smoother.current()
    }

    pub fn smoother(&self) -> &GestureSmoother {
        &self.smoother
    }

    pub fn marker(&self) -> &MarkerSimulator {
        &self.marker
    }

    fn check_frame(&mut self, timestamp_ms: f64) -> Option<SkipReason> {
        match self.phase {
            SessionPhase::TornDown => return Some(SkipReason::NoSession),
            SessionPhase::Idle => {
                self.stats.frames_skipped_upstream += 1;
                return Some(SkipReason::UpstreamUnavailable);
            }
            SessionPhase::Active => {}
        }
        let fresh = timestamp_ms.is_finite() && self.last_timestamp_ms.map_or(true, |last| timestamp_ms > last);
        if !fresh {
            self.stats.frames_skipped_stale += 1;
            return Some(SkipReason::StaleFrame);
        }
        None
    }

    fn process_sample(&mut self, sample: RawSample) -> FrameOutcome {
        self.stats.frames_processed += 1;
        let transition = self.smoother.observe(sample);

        let decision = transition.and_then(|t| t.proc_event).map(|event| {
            self.stats.proc_events += 1;
            let decision = self
                .correlator
                .on_proc_event(event.open_palm_position, &self.marker.snapshot());
            match decision {
                ScoreDecision::Hit => {
                    self.marker.record_hit();
                    self.stats.hits += 1;
                    info!(
                        "Caught at ({:.2}, {:.2}), score {}",
                        event.open_palm_position.x,
                        event.open_palm_position.y,
                        self.marker.score()
                    );
                }
                ScoreDecision::Miss => self.stats.misses += 1,
                ScoreDecision::Skipped => self.stats.correlations_skipped += 1,
            }
            decision
        });

        FrameOutcome::Processed {
            sample,
            transition,
            decision,
        }
    }
}
