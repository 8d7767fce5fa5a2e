//! Gesture catch: hand-gesture smoothing and grab detection for a small
//! falling-marker game.
//!
//! A hand gesture recognizer reports one label per video frame. The labels
//! are noisy, so the pipeline is:
//! 1. Extract the first hand's top label and landmark centroid from each
//!    recognition
//! 2. Smooth the labels with a majority vote over the last eight samples
//! 3. When a confirmed open palm turns into a confirmed closed fist, check
//!    whether the palm was over the falling marker
//! 4. On a catch, count a point and send the marker back to the top
//!
//! # Examples
//!
//! ## Smoothing raw samples
//!
//! ```
//! use gesture_catch::gesture::{GestureLabel, Position, RawSample};
//! use gesture_catch::smoother::GestureSmoother;
//!
//! let mut smoother = GestureSmoother::default();
//! for _ in 0..5 {
//!     smoother.observe(RawSample::new(GestureLabel::OpenPalm, Position::new(0.4, 0.6)));
//! }
//! assert_eq!(smoother.current().label, GestureLabel::OpenPalm);
//! ```
//!
//! ## Running a session
//!
//! ```
//! use gesture_catch::{
//!     correlator::Correlator,
//!     gesture::{GestureLabel, Position, RawSample},
//!     marker::MarkerSimulator,
//!     session::GameSession,
//!     smoother::GestureSmoother,
//!     trace::TraceClassifier,
//! };
//!
//! let mut marker = MarkerSimulator::with_seed(640.0, 480.0, 7.0, 1);
//! marker.place(320.0, 240.0);
//!
//! let mut session: GameSession<TraceClassifier> =
//!     GameSession::new(GestureSmoother::default(), Correlator::default(), marker);
//! session.attach_classifier(TraceClassifier);
//!
//! let mut ts = 0.0;
//! for label in [GestureLabel::OpenPalm; 4].into_iter().chain([GestureLabel::ClosedFist; 8]) {
//!     ts += 33.0;
//!     session.on_sample(ts, RawSample::new(label, Position::new(0.5, 0.5)));
//! }
//! assert_eq!(session.view().score, 1);
//! ```

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Gesture labels, positions and samples
pub mod gesture;

/// Majority-vote gesture smoothing
pub mod smoother;

/// Grab versus marker collision check
pub mod correlator;

/// Falling marker simulation
pub mod marker;

/// Gesture recognizer contract
pub mod classifier;

/// Recorded gesture traces
pub mod trace;

/// Session orchestration of both triggers
pub mod session;

/// Configuration management
pub mod config;

/// Numeric helpers
pub mod utils;

/// Main application module
pub mod app;

pub use error::{Error, Result};
