//! Numeric helpers for coordinate rounding and normalization.

use crate::{Error, Result};

/// Round `value` to `decimals` places, half away from zero
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Arithmetic mean, `None` for an empty input
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Express `value` as a fraction of `extent`
///
/// # Errors
///
/// Returns `InvalidGeometry` if the extent is zero or not finite
pub fn normalize(value: f64, extent: f64) -> Result<f64> {
    if extent == 0.0 || !extent.is_finite() {
        return Err(Error::InvalidGeometry {
            width: extent,
            height: extent,
        });
    }
    Ok(value / extent)
}

/// Normalize a surface point against both surface dimensions
///
/// # Errors
///
/// Returns `InvalidGeometry` if either dimension is zero or not finite
pub fn normalize_point(x: f64, y: f64, width: f64, height: f64) -> Result<(f64, f64)> {
    match (normalize(x, width), normalize(y, height)) {
        (Ok(nx), Ok(ny)) => Ok((nx, ny)),
        _ => Err(Error::InvalidGeometry { width, height }),
    }
}
