//! Collision check between a confirmed grab and the falling marker.

use crate::constants::COLLISION_TOLERANCE;
use crate::gesture::Position;
use crate::marker::MarkerSnapshot;
use crate::utils::normalize_point;
use log::{debug, warn};

/// Outcome of one correlation check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreDecision {
    /// Palm and marker overlapped: score one and reset the marker
    Hit,
    /// Too far apart, nothing changes
    Miss,
    /// Surface has no usable size, check not performed
    Skipped,
}

impl ScoreDecision {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit)
    }
}

/// Compares the open-palm position with the marker position
#[derive(Debug, Clone, Copy)]
pub struct Correlator {
    tolerance: f64,
}

impl Correlator {
    /// Create a correlator with a per-axis normalized tolerance
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is not a positive finite number
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        assert!(
            tolerance.is_finite() && tolerance > 0.0,
            "Tolerance must be positive, got {}",
            tolerance
        );
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Decide whether the grab at `open_palm` caught the marker
    pub fn on_proc_event(&self, open_palm: Position, marker: &MarkerSnapshot) -> ScoreDecision {
        let (norm_x, norm_y) = match normalize_point(marker.x, marker.y, marker.width, marker.height) {
            Ok(point) => point,
            Err(e) => {
                warn!("Skipping collision check: {e}");
                return ScoreDecision::Skipped;
            }
        };

        let dx = (norm_x - open_palm.x).abs();
        let dy = (norm_y - open_palm.y).abs();
        let decision = if dx < self.tolerance && dy < self.tolerance {
            ScoreDecision::Hit
        } else {
            ScoreDecision::Miss
        };

        debug!(
            "Palm ({:.2}, {:.2}) vs marker ({:.2}, {:.2}): {:?}",
            open_palm.x, open_palm.y, norm_x, norm_y, decision
        );
        decision
    }
}

impl Default for Correlator {
    fn default() -> Self {
        Self::new(COLLISION_TOLERANCE)
    }
}
