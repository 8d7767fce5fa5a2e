//! Error handling tests for all modules

use gesture_catch::{
    classifier::{GestureClassifier, Recognition},
    config::Config,
    correlator::Correlator,
    error::{AppError, Result},
    gesture::{GestureLabel, Position, RawSample},
    marker::MarkerSimulator,
    session::{FrameOutcome, GameSession, SessionPhase, SkipReason},
    smoother::GestureSmoother,
    trace::Trace,
    utils::normalize_point,
};

/// Classifier that fails on every other frame
struct FlakyClassifier {
    calls: usize,
}

impl GestureClassifier for FlakyClassifier {
    type Frame = ();

    fn classify(&mut self, _frame: &(), _timestamp_ms: f64) -> Result<Option<Recognition>> {
        self.calls += 1;
        if self.calls % 2 == 0 {
            Err(AppError::ClassifierError("inference failed".to_string()))
        } else {
            Ok(Some(Recognition::single_hand(
                GestureLabel::OpenPalm,
                0.9,
                Position::new(0.5, 0.5),
            )))
        }
    }

    fn name(&self) -> &str {
        "FlakyClassifier"
    }
}

fn flaky_session() -> GameSession<FlakyClassifier> {
    GameSession::new(
        GestureSmoother::default(),
        Correlator::default(),
        MarkerSimulator::with_seed(640.0, 480.0, 7.0, 1),
    )
}

#[test]
fn test_classifier_failure_skips_frame() {
    let mut session = flaky_session();
    assert!(session.attach_classifier(FlakyClassifier { calls: 0 }));

    assert!(matches!(session.on_frame(&(), 1.0), FrameOutcome::Processed { .. }));
    assert_eq!(
        session.on_frame(&(), 2.0),
        FrameOutcome::Skipped(SkipReason::UpstreamUnavailable)
    );

    // A failed frame does not consume its timestamp
    assert!(matches!(session.on_frame(&(), 2.0), FrameOutcome::Processed { .. }));

    let stats = session.stats();
    assert_eq!(stats.frames_processed, 2);
    assert_eq!(stats.frames_skipped_upstream, 1);
    assert_eq!(session.current_gesture().label, GestureLabel::OpenPalm);
}

#[test]
fn test_idle_session_reports_upstream_unavailable() {
    let mut session = flaky_session();
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(
        session.on_frame(&(), 1.0),
        FrameOutcome::Skipped(SkipReason::UpstreamUnavailable)
    );
    assert!(session.current_gesture().is_sentinel());
}

#[test]
fn test_install_after_teardown_fails() {
    let mut session = flaky_session();
    session.teardown();
    assert!(!session.attach_classifier(FlakyClassifier { calls: 0 }));
    assert_eq!(session.on_frame(&(), 1.0), FrameOutcome::Skipped(SkipReason::NoSession));
}

#[test]
fn test_config_errors() {
    let result = Config::from_file("does/not/exist.yaml");
    assert!(matches!(result, Err(AppError::IoError(_))));

    let mut config = Config::default();
    config.correlation.tolerance = 2.0;
    match config.validate() {
        Err(AppError::ConfigError(msg)) => assert!(msg.contains("Tolerance")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_trace_errors() {
    assert!(matches!(
        Trace::from_yaml_str("frames: [1, 2"),
        Err(AppError::TraceError(_))
    ));
    assert!(matches!(
        Trace::from_yaml_str("frames:\n  - timestamp_ms: .nan\n"),
        Err(AppError::TraceError(_))
    ));
    assert!(matches!(
        Trace::from_file("does/not/exist.yaml"),
        Err(AppError::IoError(_))
    ));
}

#[test]
fn test_invalid_geometry_message() {
    let err = normalize_point(1.0, 1.0, 0.0, 0.0).unwrap_err();
    assert_eq!(err.to_string(), "Invalid geometry: 0x0");
}

/// Classifier that reports landmarks but no gesture categories
struct BlankClassifier;

impl GestureClassifier for BlankClassifier {
    type Frame = ();

    fn classify(&mut self, _frame: &(), _timestamp_ms: f64) -> Result<Option<Recognition>> {
        let mut recognition = Recognition::single_hand(GestureLabel::OpenPalm, 0.9, Position::new(0.5, 0.5));
        recognition.gestures = vec![vec![]];
        Ok(Some(recognition))
    }

    fn name(&self) -> &str {
        "BlankClassifier"
    }
}

#[test]
fn test_recognition_without_categories_is_a_none_sample() {
    let mut session: GameSession<BlankClassifier> = GameSession::new(
        GestureSmoother::default(),
        Correlator::default(),
        MarkerSimulator::with_seed(640.0, 480.0, 7.0, 1),
    );
    assert!(session.attach_classifier(BlankClassifier));

    match session.on_frame(&(), 1.0) {
        FrameOutcome::Processed { sample, transition, .. } => {
            assert_eq!(sample, RawSample::none());
            assert!(transition.is_none());
        }
        other => panic!("Expected processed frame, got {other:?}"),
    }
    assert!(session.current_gesture().is_sentinel());
}

#[test]
fn test_unreadable_files_map_to_io_error() {
    let err = Config::from_file("does/not/exist.yaml").unwrap_err();
    assert!(err.to_string().starts_with("I/O error:"));

    let err = Trace::from_file("does/not/exist.yaml").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.yaml"));
}
