//! # Direction Module
//!
//! This module defines the six axis-aligned directions of the block grid and the
//! operations on them: opposites, unit vectors, rotation around each axis,
//! conversion to and from horizontal rotation angles, and ranking the directions an
//! entity is facing.
//!
//! ## Key Components
//! - `Direction`: One of North, South, East, West, Up and Down
//! - `Axis`: The X, Y and Z axes, used to describe rotation planes
//! - `rotation`: Clockwise and counter-clockwise rotation around each axis
//! - `facing`: Facing-direction ranking from an entity's pitch and yaw
//!
//! ## Coordinate Convention
//! North is -Z, South is +Z, East is +X, West is -X, Up is +Y and Down is -Y.

use std::{fmt, str::FromStr};

use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{DirectionError, Result},
    math::approximate_within,
    vector::Vector3,
};

pub mod facing;
pub mod rotation;

pub use facing::{entity_facing_directions, Orientation};

/// One of the six axis-aligned directions.
///
/// Each variant is assigned its 3D data value, which is stable and can be used
/// for compact storage. See [`Direction::from_3d_data_value`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards -Y
    Down = 0,
    /// Towards +Y
    Up = 1,
    /// Towards -Z
    North = 2,
    /// Towards +Z
    South = 3,
    /// Towards -X
    West = 4,
    /// Towards +X
    East = 5,
}

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The east-west axis
    X,
    /// The vertical axis
    Y,
    /// The north-south axis
    Z,
}

impl Direction {
    /// All six directions, ordered by 3D data value.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The horizontal directions in clockwise order starting at North.
    ///
    /// The position in this array is the horizontal index, and the index times 90
    /// is the rotation angle in degrees.
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The vertical directions.
    pub const VERTICAL: [Direction; 2] = [Direction::Up, Direction::Down];

    /// Returns the direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// The integer `(dx, dy, dz)` step of one block in this direction.
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
        }
    }

    /// X component of the unit vector.
    pub const fn offset_x(self) -> i32 {
        self.offset().0
    }

    /// Y component of the unit vector.
    pub const fn offset_y(self) -> i32 {
        self.offset().1
    }

    /// Z component of the unit vector.
    pub const fn offset_z(self) -> i32 {
        self.offset().2
    }

    /// The unit vector pointing in this direction.
    pub fn to_vector3(self) -> Vector3 {
        let (x, y, z) = self.offset();
        Vector3::new(f64::from(x), f64::from(y), f64::from(z))
    }

    /// Finds the direction whose unit vector is exactly `vector`.
    ///
    /// # Returns
    /// `None` when `vector` is not one of the six canonical unit vectors. The
    /// closest direction is never guessed; use [`Direction::from_vector3_approx`]
    /// for vectors that went through floating point rotation.
    pub fn from_vector3(vector: &Vector3) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.to_vector3().equals(vector))
    }

    /// Like [`Direction::from_vector3`], but every component only has to be within
    /// `threshold` of the canonical unit vector.
    ///
    /// # Arguments
    /// * `vector` - The vector to classify
    /// * `threshold` - Maximum per-component difference, inclusive
    ///
    /// # Returns
    /// The first matching direction in [`Direction::ALL`] order, or `None`.
    pub fn from_vector3_approx(vector: &Vector3, threshold: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| {
            let canonical = direction.to_vector3();
            approximate_within(vector.x, canonical.x, threshold)
                && approximate_within(vector.y, canonical.y, threshold)
                && approximate_within(vector.z, canonical.z, threshold)
        })
    }

    /// The axis this direction lies on.
    pub const fn axis(self) -> Axis {
        match self {
            Direction::West | Direction::East => Axis::X,
            Direction::Down | Direction::Up => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
        }
    }

    /// Whether this is one of North, East, South or West.
    pub const fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    /// Whether this is Up or Down.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Looks up a direction by its 3D data value (`0..=5`).
    pub fn from_3d_data_value(value: u8) -> Option<Self> {
        num_traits::FromPrimitive::from_u8(value)
    }

    /// The 3D data value of this direction.
    pub const fn to_3d_data_value(self) -> u8 {
        self as u8
    }

    /// Indexes into [`Direction::HORIZONTAL`], wrapping in both directions.
    ///
    /// # Arguments
    /// * `index` - Any integer; it is reduced with a Euclidean modulo of 4
    ///
    /// # Returns
    /// North, East, South or West for indices 0 to 3 (and their wrapped equivalents).
    ///
    /// ```rust
    /// use voxel_geometry::Direction;
    ///
    /// assert_eq!(Direction::from_horizontal_index(1), Direction::East);
    /// assert_eq!(Direction::from_horizontal_index(-1), Direction::West);
    /// ```
    pub fn from_horizontal_index(index: i32) -> Self {
        Self::HORIZONTAL[index.rem_euclid(Self::HORIZONTAL.len() as i32) as usize]
    }

    /// Indexes into [`Direction::VERTICAL`], wrapping in both directions.
    pub fn from_vertical_index(index: i32) -> Self {
        Self::VERTICAL[index.rem_euclid(Self::VERTICAL.len() as i32) as usize]
    }

    /// Position of this direction in [`Direction::HORIZONTAL`], if horizontal.
    pub fn horizontal_index(self) -> Option<usize> {
        Self::HORIZONTAL
            .iter()
            .position(|direction| *direction == self)
    }

    /// The horizontal rotation angle in degrees: North 0, East 90, South 180, West 270.
    ///
    /// # Errors
    /// [`DirectionError::NotHorizontal`] for Up and Down.
    pub fn to_rotation(self) -> Result<f64> {
        self.horizontal_index()
            .map(|index| index as f64 * 90.0)
            .ok_or(DirectionError::NotHorizontal(self))
    }

    /// The horizontal direction covering a rotation angle in degrees.
    ///
    /// The angle is wrapped into `[0, 360)` and each direction covers the 90 degree
    /// quadrant starting at its own angle, so `89.9` is still North.
    ///
    /// # Arguments
    /// * `angle` - Rotation in degrees, negative or beyond 360 allowed
    ///
    /// # Returns
    /// The horizontal direction whose quadrant contains the wrapped angle.
    pub fn from_rotation(angle: f64) -> Self {
        let wrapped = angle.rem_euclid(360.0);

        Self::from_horizontal_index((wrapped / 90.0).floor() as i32)
    }

    /// A uniformly random direction.
    pub fn random() -> Self {
        Self::ALL[fastrand::usize(..Self::ALL.len())]
    }

    /// A uniformly random direction drawn from `rng`.
    pub fn random_with(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }

    /// Lowercase name of the direction.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DirectionError::UnknownName(s.to_string()))
    }
}

impl From<Direction> for Vector3 {
    fn from(direction: Direction) -> Self {
        direction.to_vector3()
    }
}

impl From<Direction> for cgmath::Vector3<i32> {
    fn from(direction: Direction) -> Self {
        let (x, y, z) = direction.offset();
        cgmath::Vector3::new(x, y, z)
    }
}

impl Axis {
    /// All three axes.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lowercase name of the axis.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = DirectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|axis| axis.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DirectionError::UnknownAxis(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_values() {
        for (value, direction) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(direction.to_3d_data_value() as usize, value);
            assert_eq!(Direction::from_3d_data_value(value as u8), Some(direction));
        }
        assert_eq!(Direction::from_3d_data_value(6), None);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_unit_vectors() {
        assert_eq!(Direction::North.to_vector3(), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(Direction::South.to_vector3(), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(Direction::East.to_vector3(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(Direction::West.to_vector3(), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(Direction::Up.to_vector3(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(Direction::Down.to_vector3(), Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_offsets_match_unit_vector() {
        for direction in Direction::ALL {
            let v = direction.to_vector3();
            assert_eq!(f64::from(direction.offset_x()), v.x);
            assert_eq!(f64::from(direction.offset_y()), v.y);
            assert_eq!(f64::from(direction.offset_z()), v.z);
        }
    }

    #[test]
    fn test_from_vector3_is_exact() {
        assert_eq!(
            Direction::from_vector3(&Vector3::new(1.0, 0.0, 0.0)),
            Some(Direction::East)
        );
        assert_eq!(Direction::from_vector3(&Vector3::new(0.9, 0.0, 0.0)), None);
        assert_eq!(Direction::from_vector3(&Vector3::new(2.0, 0.0, 0.0)), None);
        assert_eq!(Direction::from_vector3(&Vector3::zero()), None);
    }

    #[test]
    fn test_from_vector3_approx() {
        let rotated = Vector3::new(0.0, 0.0, 1.0).rotate_y(std::f64::consts::FRAC_PI_2);
        assert_eq!(Direction::from_vector3(&rotated), None);
        assert_eq!(
            Direction::from_vector3_approx(&rotated, 1e-9),
            Some(Direction::East)
        );
        assert_eq!(
            Direction::from_vector3_approx(&Vector3::new(0.5, 0.5, 0.0), 1e-9),
            None
        );
    }

    #[test]
    fn test_axis() {
        assert_eq!(Direction::East.axis(), Axis::X);
        assert_eq!(Direction::Down.axis(), Axis::Y);
        assert_eq!(Direction::North.axis(), Axis::Z);
        assert!(Direction::West.is_horizontal());
        assert!(Direction::Up.is_vertical());
        assert!(!Direction::Up.is_horizontal());
    }

    #[test]
    fn test_index_wrapping() {
        assert_eq!(Direction::from_horizontal_index(0), Direction::North);
        assert_eq!(Direction::from_horizontal_index(3), Direction::West);
        assert_eq!(Direction::from_horizontal_index(4), Direction::North);
        assert_eq!(Direction::from_horizontal_index(-1), Direction::West);
        assert_eq!(Direction::from_horizontal_index(-6), Direction::South);
        assert_eq!(Direction::from_vertical_index(0), Direction::Up);
        assert_eq!(Direction::from_vertical_index(1), Direction::Down);
        assert_eq!(Direction::from_vertical_index(-1), Direction::Down);
        assert_eq!(Direction::from_vertical_index(7), Direction::Down);
    }

    #[test]
    fn test_to_rotation() {
        assert_eq!(Direction::North.to_rotation(), Ok(0.0));
        assert_eq!(Direction::East.to_rotation(), Ok(90.0));
        assert_eq!(Direction::South.to_rotation(), Ok(180.0));
        assert_eq!(Direction::West.to_rotation(), Ok(270.0));
        assert_eq!(
            Direction::Up.to_rotation(),
            Err(DirectionError::NotHorizontal(Direction::Up))
        );
    }

    #[test]
    fn test_from_rotation() {
        assert_eq!(Direction::from_rotation(0.0), Direction::North);
        assert_eq!(Direction::from_rotation(89.9), Direction::North);
        assert_eq!(Direction::from_rotation(90.0), Direction::East);
        assert_eq!(Direction::from_rotation(269.0), Direction::South);
        assert_eq!(Direction::from_rotation(359.9), Direction::West);
        assert_eq!(Direction::from_rotation(360.0), Direction::North);
        assert_eq!(Direction::from_rotation(-45.0), Direction::West);
        assert_eq!(Direction::from_rotation(-1e-20), Direction::North);
    }

    #[test]
    fn test_random_with_covers_all_directions() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Direction::random_with(&mut rng));
        }
        assert_eq!(seen.len(), 6);
        assert!(Direction::ALL.contains(&Direction::random()));
    }

    #[test]
    fn test_names_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
        assert_eq!("NORTH".parse::<Direction>(), Ok(Direction::North));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(DirectionError::UnknownName(String::from("sideways")))
        );
        assert_eq!("Y".parse::<Axis>(), Ok(Axis::Y));
        assert!("w".parse::<Axis>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Direction::North).unwrap(), r#""north""#);
        assert_eq!(
            serde_json::from_str::<Direction>(r#""up""#).unwrap(),
            Direction::Up
        );
        assert_eq!(serde_json::to_string(&Axis::Z).unwrap(), r#""z""#);
    }

    #[test]
    fn test_cgmath_conversion() {
        let v: cgmath::Vector3<i32> = Direction::West.into();
        assert_eq!(v, cgmath::Vector3::new(-1, 0, 0));
    }
}
