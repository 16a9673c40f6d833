//! # Math Module
//!
//! Stateless scalar helpers shared by the vector and direction modules.
//!
//! ## Key Components
//! - Interpolation: `lerp`, `lerp_angle`
//! - Angle handling: `degrees_to_radians`, `radians_to_degrees`, `wrap`, `wrap_angle`
//! - Tolerant comparison: `approximate`, `approximate_within`
//! - Randomness: `random`, `random_int`, `random_boolean`
//! - `color`: HSV to RGB conversion and RGBA comparison
//! - `chunk`: world position to chunk coordinate conversion

use cgmath::{Deg, Rad};
use num_traits::{Euclid, Float, Num};

pub mod chunk;
pub mod color;

pub use chunk::{chunk_to_position, position_to_chunk, ChunkPosition, CHUNK_DIMENSION};
pub use color::{are_rgba_equal, hsv_to_rgb, Rgb, Rgba};

/// Tolerance used by [`approximate`].
pub const DEFAULT_THRESHOLD: f64 = 0.0001;

/// Restricts `value` to the inclusive range `[min, max]`.
#[inline]
pub fn clamp<F: Float>(value: F, min: F, max: F) -> F {
    value.max(min).min(max)
}

/// Linearly interpolates between `start` and `end`.
///
/// # Arguments
/// * `start` - Value returned for a `percent` of 0
/// * `end` - Value returned for a `percent` of 1
/// * `percent` - Interpolation factor; not clamped, so values outside `[0, 1]` extrapolate
///
/// # Returns
/// `start + percent * (end - start)`
#[inline]
pub fn lerp<F: Float>(start: F, end: F, percent: F) -> F {
    start + percent * (end - start)
}

/// Interpolates between two angles in degrees along the shortest arc.
///
/// # Arguments
/// * `start` - Starting angle in degrees
/// * `end` - Target angle in degrees
/// * `percent` - Interpolation factor
///
/// # Returns
/// An angle on the shorter arc from `start` to `end`. The result is not wrapped, so `lerp_angle(350.0, 10.0, 0.5)` is `360.0`.
pub fn lerp_angle(start: f64, end: f64, percent: f64) -> f64 {
    let angle = (end - start + 180.0).rem_euclid(360.0) - 180.0;

    start + angle * percent
}

/// Converts an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    Rad::from(Deg(degrees)).0
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    Deg::from(Rad(radians)).0
}

/// Returns `true` when `value` is within [`DEFAULT_THRESHOLD`] of `target`.
#[inline]
pub fn approximate(value: f64, target: f64) -> bool {
    approximate_within(value, target, DEFAULT_THRESHOLD)
}

/// Returns `true` when `value` is within `threshold` of `target` (inclusive).
#[inline]
pub fn approximate_within(value: f64, target: f64, threshold: f64) -> bool {
    (value - target).abs() <= threshold
}

/// Uniform random float in `[min, max)`.
pub fn random(min: f64, max: f64) -> f64 {
    min + fastrand::f64() * (max - min)
}

/// Random integer obtained by flooring [`random`] over `[min, max)`.
pub fn random_int(min: i64, max: i64) -> i64 {
    random(min as f64, max as f64).floor() as i64
}

/// Fair coin flip.
pub fn random_boolean() -> bool {
    fastrand::f64() < 0.5
}

/// Wraps `value` into the inclusive range `[min, max]`.
///
/// The range has `max - min + 1` steps and a Euclidean modulo is used, so negative
/// inputs wrap around instead of staying negative: `wrap(-10, 0, 359) == 350`.
///
/// ```rust
/// use voxel_geometry::math::wrap;
///
/// assert_eq!(wrap(-10, 0, 359), 350);
/// assert_eq!(wrap(365, 0, 359), 5);
/// ```
///
/// # Panics
/// Panics in debug builds if `min > max`. For integer types an empty range
/// (`max == min - 1`) always panics with a division by zero.
pub fn wrap<T: Num + Euclid + PartialOrd + Copy>(value: T, min: T, max: T) -> T {
    debug_assert!(min <= max, "wrap requires min <= max");
    let range = max - min + T::one();

    (value - min).rem_euclid(&range) + min
}

/// Wraps an angle in degrees into `[0, 359]`.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    wrap(angle, 0.0, 359.0)
}
