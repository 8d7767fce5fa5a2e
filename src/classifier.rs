//! Bridge to the external hand gesture recognizer.
//!
//! The recognizer itself is a black box. It is handed a frame and a
//! timestamp and answers with per-hand gesture categories and landmarks.
//! Only the first hand's top category and the mean of its landmarks make it
//! into a [`RawSample`].

use crate::constants::{HAND_LANDMARK_COUNT, POSITION_DECIMALS};
use crate::gesture::{GestureLabel, Position, RawSample};
use crate::utils::{mean, round_to};
use crate::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// One scored gesture category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Recognizer category name, e.g. `"Open_Palm"`
    pub label: String,
    pub score: f32,
}

/// Normalized landmark coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

/// Recognizer output for one frame
///
/// `gestures[h]` are the categories of hand `h`, best first, and
/// `landmarks[h]` are its landmark points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recognition {
    pub gestures: Vec<Vec<Category>>,
    pub landmarks: Vec<Vec<Landmark>>,
}

impl Recognition {
    /// Recognition of a single hand whose landmarks all sit at `position`
    #[must_use]
    pub fn single_hand(label: GestureLabel, score: f32, position: Position) -> Self {
        Self {
            gestures: vec![vec![Category {
                label: label.as_str().to_string(),
                score,
            }]],
            landmarks: vec![vec![
                Landmark {
                    x: position.x,
                    y: position.y,
                };
                HAND_LANDMARK_COUNT
            ]],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.iter().all(Vec::is_empty)
    }
}

/// Anything that can turn a video frame into a [`Recognition`]
pub trait GestureClassifier {
    /// Frame type the classifier consumes
    type Frame;

    /// Classify one frame
    ///
    /// `Ok(None)` means the classifier ran and saw no hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the classifier could not process the frame
    fn classify(&mut self, frame: &Self::Frame, timestamp_ms: f64) -> Result<Option<Recognition>>;

    /// Classifier name for logging
    fn name(&self) -> &str;
}

/// Reduce a recognition to the sample the smoother consumes
pub fn extract_sample(recognition: &Recognition) -> RawSample {
    let Some(top) = recognition.gestures.first().and_then(|hand| hand.first()) else {
        return RawSample::none();
    };

    let label = top.label.parse::<GestureLabel>().unwrap_or_else(|_| {
        debug!("Unrecognized category '{}', treating as None", top.label);
        GestureLabel::None
    });

    let position = recognition.landmarks.first().and_then(|points| centroid(points));

    RawSample { label, position }
}

/// Landmark mean rounded to the sample precision
pub fn centroid(points: &[Landmark]) -> Option<Position> {
    let x = mean(points.iter().map(|p| p.x))?;
    let y = mean(points.iter().map(|p| p.y))?;
    Some(Position::new(
        round_to(x, POSITION_DECIMALS),
        round_to(y, POSITION_DECIMALS),
    ))
}
