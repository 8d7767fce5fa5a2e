//! Falling marker driven by the animation clock.
//!
//! The marker drops by a fixed step every frame and re-enters at the top
//! edge, at a random horizontal offset, whenever it leaves the surface or a
//! reset was requested after a catch.

use crate::constants::{MARKER_START_COORDINATE, VERTICAL_STEP};
use crate::gesture::Position;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Marker position, surface size, pending reset and score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerState {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub reset_requested: bool,
    pub score: u64,
}

impl MarkerState {
    /// Marker parked off-surface until the first frame places it
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: MARKER_START_COORDINATE,
            y: MARKER_START_COORDINATE,
            width,
            height,
            reset_requested: false,
            score: 0,
        }
    }

    fn needs_reentry(&self) -> bool {
        self.y < 0.0 || self.x < 0.0 || self.y > self.height || self.reset_requested
    }
}

/// Read-only copy of what the correlator needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSnapshot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Owns the marker state and advances it once per animation frame
#[derive(Debug, Clone)]
pub struct MarkerSimulator {
    state: MarkerState,
    vertical_step: f64,
    rng: StdRng,
}

impl MarkerSimulator {
    /// Create a simulator with an entropy-seeded generator
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(width, height, VERTICAL_STEP, StdRng::from_entropy())
    }

    /// Create a simulator whose re-entry positions are reproducible
    #[must_use]
    pub fn with_seed(width: f64, height: f64, vertical_step: f64, seed: u64) -> Self {
        Self::with_rng(width, height, vertical_step, StdRng::seed_from_u64(seed))
    }

    /// Create a simulator from an explicit generator
    #[must_use]
    pub fn with_rng(width: f64, height: f64, vertical_step: f64, rng: StdRng) -> Self {
        Self {
            state: MarkerState::new(width, height),
            vertical_step,
            rng,
        }
    }

    /// Move one animation frame forward
    pub fn advance(&mut self) {
        if self.state.needs_reentry() {
            self.state.reset_requested = false;
            self.state.y = 0.0;
            self.state.x = self.random_x();
            debug!("Marker re-entered at x={:.1}", self.state.x);
        } else {
            self.state.y += self.vertical_step;
        }
    }

    /// Re-enter at the top on the next frame
    pub fn request_reset(&mut self) {
        self.state.reset_requested = true;
    }

    /// Count a catch and send the marker back to the top
    pub fn record_hit(&mut self) {
        self.state.score += 1;
        self.request_reset();
    }

    /// Take on new surface dimensions without moving the marker
    pub fn resize(&mut self, width: f64, height: f64) {
        self.state.width = width;
        self.state.height = height;
    }

    /// Place the marker directly; used to stage a known position
    pub fn place(&mut self, x: f64, y: f64) {
        self.state.x = x;
        self.state.y = y;
    }

    pub fn state(&self) -> &MarkerState {
        &self.state
    }

    pub fn snapshot(&self) -> MarkerSnapshot {
        MarkerSnapshot {
            x: self.state.x,
            y: self.state.y,
            width: self.state.width,
            height: self.state.height,
        }
    }

    /// Surface coordinates of the marker
    pub fn position(&self) -> Position {
        Position::new(self.state.x, self.state.y)
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    fn random_x(&mut self) -> f64 {
        let width = self.state.width;
        if width.is_finite() && width > 0.0 {
            self.rng.gen_range(0.0..width)
        } else {
            0.0
        }
    }
}
