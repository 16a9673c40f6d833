//! # Vector Builder Module
//!
//! A mutable vector whose operations update it in place and return `&mut Self`,
//! so several operations can be chained on one value.

use std::ops::Deref;

use super::{ToStringOptions, Vector3};

/// In-place counterpart of [`Vector3`].
///
/// Every operation that produces a vector stores the result back into the builder.
/// Operands can be anything convertible into a [`Vector3`], including `(x, y, z)`
/// tuples and `[x, y, z]` arrays.
///
/// # Example
/// ```rust
/// use voxel_geometry::vector::{Vector3, Vector3Builder};
///
/// let mut builder = Vector3Builder::new(1.0, 2.0, 3.0);
/// builder.add((1.0, 1.0, 1.0)).scale(2.0).floor();
///
/// assert_eq!(builder.build(), Vector3::new(4.0, 6.0, 8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3Builder {
    vector: Vector3,
}

impl Vector3Builder {
    /// Creates a builder from three components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            vector: Vector3::new(x, y, z),
        }
    }

    /// Replaces all three components.
    pub fn assign(&mut self, vector: impl Into<Vector3>) -> &mut Self {
        self.vector = vector.into();
        self
    }

    /// Exact component-wise equality with another vector.
    pub fn equals(&self, other: impl Into<Vector3>) -> bool {
        self.vector.equals(&other.into())
    }

    /// Adds another vector in place.
    pub fn add(&mut self, other: impl Into<Vector3>) -> &mut Self {
        let result = self.vector.add(other.into());
        self.assign(result)
    }

    /// Subtracts another vector in place.
    pub fn subtract(&mut self, other: impl Into<Vector3>) -> &mut Self {
        let result = self.vector.subtract(other.into());
        self.assign(result)
    }

    /// Multiplies component-wise in place.
    pub fn multiply(&mut self, other: impl Into<Vector3>) -> &mut Self {
        let result = self.vector.multiply(other.into());
        self.assign(result)
    }

    /// Scales in place.
    pub fn scale(&mut self, scalar: f64) -> &mut Self {
        let result = self.vector.scale(scalar);
        self.assign(result)
    }

    /// Replaces the vector with its cross product with `other`.
    pub fn cross(&mut self, other: impl Into<Vector3>) -> &mut Self {
        let result = self.vector.cross(other.into());
        self.assign(result)
    }

    /// Normalizes in place. See [`Vector3::normalize`] for the zero vector case.
    pub fn normalize(&mut self) -> &mut Self {
        let result = self.vector.normalize();
        self.assign(result)
    }

    /// Floors every component in place.
    pub fn floor(&mut self) -> &mut Self {
        let result = self.vector.floor();
        self.assign(result)
    }

    /// Rotates around the X axis in place.
    pub fn rotate_x(&mut self, angle: f64) -> &mut Self {
        let result = self.vector.rotate_x(angle);
        self.assign(result)
    }

    /// Rotates around the Y axis in place.
    pub fn rotate_y(&mut self, angle: f64) -> &mut Self {
        let result = self.vector.rotate_y(angle);
        self.assign(result)
    }

    /// Rotates around the Z axis in place.
    pub fn rotate_z(&mut self, angle: f64) -> &mut Self {
        let result = self.vector.rotate_z(angle);
        self.assign(result)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: impl Into<Vector3>) -> f64 {
        self.vector.dot(other.into())
    }

    /// Length of the current vector.
    pub fn magnitude(&self) -> f64 {
        self.vector.magnitude()
    }

    /// Distance to another point.
    pub fn distance(&self, other: impl Into<Vector3>) -> f64 {
        self.vector.distance(other.into())
    }

    /// See [`Vector3::to_string_with`].
    pub fn to_string_with(&self, options: &ToStringOptions) -> String {
        self.vector.to_string_with(options)
    }

    /// Returns a copy of the current value.
    pub fn build(&self) -> Vector3 {
        self.vector
    }
}

impl Deref for Vector3Builder {
    type Target = Vector3;

    fn deref(&self) -> &Self::Target {
        &self.vector
    }
}

impl From<Vector3> for Vector3Builder {
    fn from(vector: Vector3) -> Self {
        Self { vector }
    }
}

impl From<Vector3Builder> for Vector3 {
    fn from(builder: Vector3Builder) -> Self {
        builder.vector
    }
}

impl From<&Vector3Builder> for Vector3 {
    fn from(builder: &Vector3Builder) -> Self {
        builder.vector
    }
}
