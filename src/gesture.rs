//! Gesture vocabulary shared by the smoother, correlator and classifier bridge.
//!
//! Labels use the category names reported by the hand gesture recognizer
//! (`"Closed_Fist"`, `"Open_Palm"`, ...), both for parsing and for serde.

use crate::constants::SENTINEL_COORDINATE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of gestures the recognizer can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GestureLabel {
    /// No hand, or no recognizable gesture
    #[default]
    None,
    #[serde(rename = "Closed_Fist")]
    ClosedFist,
    #[serde(rename = "Open_Palm")]
    OpenPalm,
    #[serde(rename = "Pointing_Up")]
    PointingUp,
    #[serde(rename = "Thumb_Down")]
    ThumbDown,
    #[serde(rename = "Thumb_Up")]
    ThumbUp,
    Victory,
    ILoveYou,
}

impl GestureLabel {
    /// Every label, in recognizer order
    pub const ALL: [GestureLabel; 8] = [
        Self::None,
        Self::ClosedFist,
        Self::OpenPalm,
        Self::PointingUp,
        Self::ThumbDown,
        Self::ThumbUp,
        Self::Victory,
        Self::ILoveYou,
    ];

    /// Recognizer category name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::ClosedFist => "Closed_Fist",
            Self::OpenPalm => "Open_Palm",
            Self::PointingUp => "Pointing_Up",
            Self::ThumbDown => "Thumb_Down",
            Self::ThumbUp => "Thumb_Up",
            Self::Victory => "Victory",
            Self::ILoveYou => "ILoveYou",
        }
    }

    /// Whether the smoother tracks this label as a confirmed gesture
    pub fn is_watched(&self) -> bool {
        matches!(self, Self::ClosedFist | Self::OpenPalm)
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GestureLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown gesture label: {s}")))
    }
}

/// Normalized (0-1) point in frame or surface space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Marker for "no confirmed gesture yet"
    pub const SENTINEL: Position = Position {
        x: SENTINEL_COORDINATE,
        y: SENTINEL_COORDINATE,
    };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

/// One classification attempt on one video frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawSample {
    pub label: GestureLabel,
    /// Hand centroid, absent when nothing was recognized
    pub position: Option<Position>,
}

impl RawSample {
    #[must_use]
    pub fn new(label: GestureLabel, position: Position) -> Self {
        Self {
            label,
            position: Some(position),
        }
    }

    /// Sample for a frame where no gesture was recognized
    #[must_use]
    pub fn none() -> Self {
        Self {
            label: GestureLabel::None,
            position: None,
        }
    }
}

/// Most recently confirmed, denoised gesture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentGesture {
    pub label: GestureLabel,
    pub position: Position,
}

impl CurrentGesture {
    /// `{None, (-1, -1)}`
    pub const SENTINEL: CurrentGesture = CurrentGesture {
        label: GestureLabel::None,
        position: Position::SENTINEL,
    };

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

impl Default for CurrentGesture {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl From<RawSample> for CurrentGesture {
    fn from(sample: RawSample) -> Self {
        Self {
            label: sample.label,
            position: sample.position.unwrap_or(Position::SENTINEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_names_round_trip() {
        for label in GestureLabel::ALL {
            assert_eq!(label.as_str().parse::<GestureLabel>().unwrap(), label);
        }
        assert!("Fist".parse::<GestureLabel>().is_err());
    }

    #[test]
    fn test_serde_uses_recognizer_names() {
        let yaml = serde_yaml::to_string(&GestureLabel::ClosedFist).unwrap();
        assert_eq!(yaml.trim(), "Closed_Fist");
        let label: GestureLabel = serde_yaml::from_str("ILoveYou").unwrap();
        assert_eq!(label, GestureLabel::ILoveYou);
    }

    #[test]
    fn test_watched_labels() {
        let watched: Vec<_> = GestureLabel::ALL.iter().filter(|l| l.is_watched()).collect();
        assert_eq!(watched, vec![&GestureLabel::ClosedFist, &GestureLabel::OpenPalm]);
    }

    #[test]
    fn test_current_gesture_defaults_to_sentinel() {
        let current = CurrentGesture::default();
        assert_eq!(current.label, GestureLabel::None);
        assert_eq!(current.position, Position::new(-1.0, -1.0));
        assert!(current.is_sentinel());
    }

    #[test]
    fn test_sample_without_position_maps_to_sentinel_position() {
        let sample = RawSample {
            label: GestureLabel::OpenPalm,
            position: None,
        };
        let current = CurrentGesture::from(sample);
        assert_eq!(current.label, GestureLabel::OpenPalm);
        assert!(current.position.is_sentinel());
    }
}
