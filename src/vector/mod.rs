//! # Vector Module
//!
//! This module provides the 3D vector type used for positions and offsets in the
//! block world, along with a builder for fluent in-place manipulation.
//!
//! ## Key Components
//! - `Vector3`: Copyable `(x, y, z)` triple whose operations always return new values
//! - `Vector3Builder`: Mutable wrapper whose operations update the receiver and chain
//! - `ToStringOptions`: Formatting settings for rendering vectors as text
//!
//! The coordinate space follows the game world: +X is east, +Y is up and +Z is south.

use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use cgmath::{Matrix3, Point3, Rad};
use serde::{Deserialize, Serialize};

pub mod builder;

pub use builder::Vector3Builder;

/// A point or free vector in 3D space.
///
/// Equality is exact and component-wise; no tolerance is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// The X (east) component
    pub x: f64,
    /// The Y (up) component
    pub y: f64,
    /// The Z (south) component
    pub z: f64,
}

/// Formatting options for [`Vector3::to_string_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToStringOptions {
    /// Digits printed after the decimal point for each component
    pub decimals: usize,
    /// Separator placed between components
    pub delimiter: String,
}

impl Default for ToStringOptions {
    fn default() -> Self {
        Self {
            decimals: 2,
            delimiter: String::from(", "),
        }
    }
}

#[allow(clippy::should_implement_trait)]
impl Vector3 {
    /// Creates a new vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Exact component-wise equality.
    pub fn equals(&self, other: &Vector3) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// Component-wise sum.
    pub fn add(self, other: Vector3) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Component-wise difference.
    pub fn subtract(self, other: Vector3) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Component-wise product.
    pub fn multiply(self, other: Vector3) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Dot product.
    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product following the right-hand rule.
    pub fn cross(self, other: Vector3) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Vector3) -> f64 {
        self.subtract(other).magnitude()
    }

    /// Scales the vector to unit length.
    ///
    /// # Notes
    /// The zero vector has no direction: normalizing it divides by zero and every
    /// component of the result is NaN. Callers must check the magnitude first
    /// when a zero vector is possible.
    pub fn normalize(self) -> Self {
        self.scale(1.0 / self.magnitude())
    }

    /// Component-wise floor, e.g. to get the block containing a position.
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    /// Rotates around the X axis (right-hand rule).
    ///
    /// # Arguments
    /// * `angle` - Rotation angle in radians; positive turns Y towards Z
    ///
    /// # Returns
    /// A new vector with the same magnitude. `self` is left untouched.
    pub fn rotate_x(self, angle: f64) -> Self {
        self.rotate(Matrix3::from_angle_x(Rad(angle)))
    }

    /// Rotates around the Y axis by `angle` radians (right-hand rule).
    pub fn rotate_y(self, angle: f64) -> Self {
        self.rotate(Matrix3::from_angle_y(Rad(angle)))
    }

    /// Rotates around the Z axis by `angle` radians (right-hand rule).
    pub fn rotate_z(self, angle: f64) -> Self {
        self.rotate(Matrix3::from_angle_z(Rad(angle)))
    }

    fn rotate(self, rotation: Matrix3<f64>) -> Self {
        (rotation * cgmath::Vector3::from(self)).into()
    }

    /// Renders the components with fixed precision, joined by a delimiter.
    ///
    /// # Example
    /// ```rust
    /// use voxel_geometry::vector::{ToStringOptions, Vector3};
    ///
    /// let v = Vector3::new(1.0, -2.75, 3.14159);
    /// assert_eq!(v.to_string(), "1.00, -2.75, 3.14");
    ///
    /// let options = ToStringOptions { decimals: 0, delimiter: " ".into() };
    /// assert_eq!(v.to_string_with(&options), "1 -3 3");
    /// ```
    pub fn to_string_with(&self, options: &ToStringOptions) -> String {
        let decimals = options.decimals;

        [self.x, self.y, self.z]
            .iter()
            .map(|component| format!("{component:.decimals$}"))
            .collect::<Vec<_>>()
            .join(&options.delimiter)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&ToStringOptions::default()))
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Self::Output {
        Vector3::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<cgmath::Vector3<f64>> for Vector3 {
    fn from(v: cgmath::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for cgmath::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        cgmath::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Point3<f64>> for Vector3 {
    fn from(p: Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_vec_eq(actual: Vector3, expected: Vector3) {
        assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-12);
        assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-12);
        assert_abs_diff_eq!(actual.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn test_equals_is_exact() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert!(a.equals(&Vector3::new(1.0, 2.0, 3.0)));
        assert!(!a.equals(&Vector3::new(1.0, 2.0, 3.0 + 1e-12)));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a.add(b), Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b.subtract(a), Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a.multiply(b), Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(a.scale(2.0), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a * -1.0, -a);
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);

        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(a.cross(b), Vector3::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_magnitude_and_distance() {
        assert_eq!(Vector3::new(2.0, 3.0, 6.0).magnitude(), 7.0);
        assert_eq!(
            Vector3::new(1.0, 1.0, 1.0).distance(Vector3::new(3.0, 4.0, 7.0)),
            7.0
        );
    }

    #[test]
    fn test_normalize() {
        let n = Vector3::new(2.0, 3.0, 6.0).normalize();
        assert_vec_eq(n, Vector3::new(2.0 / 7.0, 3.0 / 7.0, 6.0 / 7.0));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vector3::zero().normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn test_floor() {
        assert_eq!(
            Vector3::new(1.7, -0.2, -3.0).floor(),
            Vector3::new(1.0, -1.0, -3.0)
        );
    }

    #[test]
    fn test_rotations_follow_right_hand_rule() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);

        assert_vec_eq(y.rotate_x(FRAC_PI_2), z);
        assert_vec_eq(z.rotate_y(FRAC_PI_2), x);
        assert_vec_eq(x.rotate_y(FRAC_PI_2), -z);
        assert_vec_eq(x.rotate_z(FRAC_PI_2), y);
        assert_vec_eq(x.rotate_x(1.234), x);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vector3::new(3.0, -4.0, 12.0);
        for angle in [0.1, 1.0, 2.5, -4.0] {
            assert_abs_diff_eq!(v.rotate_x(angle).magnitude(), 13.0, epsilon = 1e-9);
            assert_abs_diff_eq!(v.rotate_y(angle).magnitude(), 13.0, epsilon = 1e-9);
            assert_abs_diff_eq!(v.rotate_z(angle).magnitude(), 13.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_to_string() {
        let v = Vector3::new(1.0, 2.346, -6.0);
        assert_eq!(v.to_string(), "1.00, 2.35, -6.00");
        assert_eq!(format!("{v}"), "1.00, 2.35, -6.00");

        let options = ToStringOptions {
            decimals: 1,
            delimiter: String::from("/"),
        };
        assert_eq!(v.to_string_with(&options), "1.0/2.3/-6.0");
    }

    #[test]
    fn test_cgmath_conversion() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let c: cgmath::Vector3<f64> = v.into();
        assert_eq!(c, cgmath::Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3::from(c), v);
        assert_eq!(Vector3::from(Point3::new(1.0, 2.0, 3.0)), v);
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), v);
        assert_eq!(Vector3::from((1.0, 2.0, 3.0)), v);
    }

    #[test]
    fn test_serde() {
        let v = Vector3::new(1.5, -2.0, 0.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0,"z":0.0}"#);
        assert_eq!(serde_json::from_str::<Vector3>(&json).unwrap(), v);
    }
}
