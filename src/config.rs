//! Configuration management for the gesture catch game

use crate::constants::{
    COLLISION_TOLERANCE, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, DEFAULT_TICKS_PER_FRAME, VERTICAL_STEP,
    WINDOW_CAPACITY,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gesture smoothing configuration
    pub smoothing: SmoothingConfig,

    /// Collision check configuration
    pub correlation: CorrelationConfig,

    /// Falling marker configuration
    pub marker: MarkerConfig,

    /// Rendering surface configuration
    pub surface: SurfaceConfig,

    /// Trace playback configuration
    pub playback: PlaybackConfig,
}

/// Gesture smoothing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Raw samples kept for the majority vote
    pub window_capacity: usize,
}

/// Collision check parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Per-axis normalized distance counted as a catch
    pub tolerance: f64,
}

/// Falling marker parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Fall per animation frame, in surface units
    pub vertical_step: f64,

    /// Seed for re-entry positions; random when absent
    pub seed: Option<u64>,
}

/// Rendering surface size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: f64,
    pub height: f64,
}

/// Trace playback parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Animation ticks between two classified frames
    pub ticks_per_frame: u32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window_capacity: WINDOW_CAPACITY,
        }
    }
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            tolerance: COLLISION_TOLERANCE,
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            vertical_step: VERTICAL_STEP,
            seed: None,
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            ticks_per_frame: DEFAULT_TICKS_PER_FRAME,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.smoothing.window_capacity == 0 {
            return Err(Error::ConfigError(
                "Window capacity must be greater than 0".to_string(),
            ));
        }

        let tolerance = self.correlation.tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 || tolerance > 1.0 {
            return Err(Error::ConfigError(format!(
                "Tolerance must be in (0.0, 1.0], got {tolerance}"
            )));
        }

        let step = self.marker.vertical_step;
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::ConfigError(format!(
                "Vertical step must be greater than 0, got {step}"
            )));
        }

        let SurfaceConfig { width, height } = self.surface;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(Error::ConfigError(format!(
                "Surface size must be finite and non-negative, got {width}x{height}"
            )));
        }

        if self.playback.ticks_per_frame == 0 {
            return Err(Error::ConfigError(
                "Ticks per frame must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Gesture Catch Configuration

# Majority vote over the most recent raw classifications
smoothing:
  window_capacity: 8

# Palm and marker must be this close on both axes (normalized units)
correlation:
  tolerance: 0.1

# Falling marker
marker:
  vertical_step: 7.0
  # seed: 42

# Rendering surface size
surface:
  width: 640.0
  height: 480.0

# Trace playback
playback:
  ticks_per_frame: 2
"#;
