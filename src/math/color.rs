//! # Color Module
//!
//! Color helpers: HSV to RGB conversion and tolerant RGBA comparison.

use serde::{Deserialize, Serialize};

use super::approximate_within;

/// Tolerance used when comparing RGBA channels.
const RGBA_THRESHOLD: f64 = 0.01;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0-255)
    pub red: u8,
    /// Green channel (0-255)
    pub green: u8,
    /// Blue channel (0-255)
    pub blue: u8,
}

/// A floating point RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel
    pub red: f64,
    /// Green channel
    pub green: f64,
    /// Blue channel
    pub blue: f64,
    /// Alpha channel
    pub alpha: f64,
}

/// Converts a color from HSV to RGB.
///
/// All three inputs are expected in `[0, 1]`. The hue circle is split into six
/// sectors; a hue of `1.0` lands back in the red sector.
///
/// # Returns
/// The color with each channel rounded to the nearest integer in `0..=255`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        red: to_channel(r),
        green: to_channel(g),
        blue: to_channel(b),
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Compares two RGBA colors channel by channel with a tolerance of `0.01`.
pub fn are_rgba_equal(a: &Rgba, b: &Rgba) -> bool {
    approximate_within(a.alpha, b.alpha, RGBA_THRESHOLD)
        && approximate_within(a.red, b.red, RGBA_THRESHOLD)
        && approximate_within(a.green, b.green, RGBA_THRESHOLD)
        && approximate_within(a.blue, b.blue, RGBA_THRESHOLD)
}
