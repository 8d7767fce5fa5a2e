//! Recorded gesture traces and a classifier that replays them.
//!
//! A trace stands in for the camera and the recognizer: each entry is one
//! video frame with its timestamp and, optionally, the hand seen on it.
//!
//! ```yaml
//! frames:
//!   - timestamp_ms: 33.0
//!     hand: { label: Open_Palm, score: 0.92, x: 0.41, y: 0.37 }
//!   - timestamp_ms: 66.0
//! ```

use crate::classifier::{GestureClassifier, Recognition};
use crate::gesture::{GestureLabel, Position};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hand seen on a traced frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceHand {
    pub label: GestureLabel,
    #[serde(default = "default_score")]
    pub score: f32,
    pub x: f64,
    pub y: f64,
}

fn default_score() -> f32 {
    1.0
}

/// One traced video frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    pub timestamp_ms: f64,
    #[serde(default)]
    pub hand: Option<TraceHand>,
}

/// Ordered list of traced frames
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub frames: Vec<TraceFrame>,
}

impl Trace {
    /// Load a trace from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::IoError(format!("Failed to read trace {}: {e}", path.display())))?;
        Self::from_yaml_str(&content)
    }

    /// Parse a trace from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let trace: Self =
            serde_yaml::from_str(content).map_err(|e| Error::TraceError(format!("Failed to parse trace: {e}")))?;
        trace.validate()?;
        Ok(trace)
    }

    /// Serialize the trace as YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::TraceError(format!("Failed to serialize trace: {e}")))
    }

    /// Check timestamps and hand coordinates
    pub fn validate(&self) -> Result<()> {
        for (index, frame) in self.frames.iter().enumerate() {
            if !frame.timestamp_ms.is_finite() {
                return Err(Error::TraceError(format!("Frame {index} has a non-finite timestamp")));
            }
            if let Some(hand) = &frame.hand {
                if !hand.x.is_finite() || !hand.y.is_finite() {
                    return Err(Error::TraceError(format!("Frame {index} has a non-finite hand position")));
                }
            }
        }
        Ok(())
    }

    /// Build a trace at a fixed frame interval
    #[must_use]
    pub fn from_hands(frame_interval_ms: f64, hands: &[Option<TraceHand>]) -> Self {
        let frames = hands
            .iter()
            .enumerate()
            .map(|(i, hand)| TraceFrame {
                timestamp_ms: (i + 1) as f64 * frame_interval_ms,
                hand: *hand,
            })
            .collect();
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Replays the hand recorded on each [`TraceFrame`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceClassifier;

impl GestureClassifier for TraceClassifier {
    type Frame = TraceFrame;

    fn classify(&mut self, frame: &TraceFrame, _timestamp_ms: f64) -> Result<Option<Recognition>> {
        Ok(frame
            .hand
            .map(|hand| Recognition::single_hand(hand.label, hand.score, Position::new(hand.x, hand.y))))
    }

    fn name(&self) -> &str {
        "TraceClassifier"
    }
}
