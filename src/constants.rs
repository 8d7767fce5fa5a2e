//! Constants used throughout the application

/// Number of raw samples kept by the gesture smoother
pub const WINDOW_CAPACITY: usize = 8;

/// Normalized distance (per axis) under which marker and palm collide
pub const COLLISION_TOLERANCE: f64 = 0.1;

/// Marker fall per animation frame, in surface units
pub const VERTICAL_STEP: f64 = 7.0;

/// Landmarks reported per hand by the classifier
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Decimal places kept on hand centroid coordinates
pub const POSITION_DECIMALS: i32 = 2;

/// Coordinate used for "no confirmed gesture yet"
pub const SENTINEL_COORDINATE: f64 = -1.0;

/// Marker coordinate before the first animation frame (off-surface)
pub const MARKER_START_COORDINATE: f64 = -50.0;

/// Default surface size
pub const DEFAULT_SURFACE_WIDTH: f64 = 640.0;
pub const DEFAULT_SURFACE_HEIGHT: f64 = 480.0;

/// Animation ticks run between two classification frames during playback
pub const DEFAULT_TICKS_PER_FRAME: u32 = 2;
