//! # Direction Rotation
//!
//! Quarter-turn rotation of directions around the X, Y and Z axes.
//!
//! Each rotation is only defined for the four directions lying in the plane
//! perpendicular to its axis:
//! - Y: North -> East -> South -> West (clockwise seen from above)
//! - X: Up -> North -> Down -> South
//! - Z: Up -> East -> Down -> West
//!
//! Rotating a direction that lies on the axis itself is an error.

use crate::errors::{DirectionError, Result};

use super::{Axis, Direction};

impl Direction {
    /// Rotates a quarter turn clockwise around the Y axis.
    ///
    /// # Errors
    /// [`DirectionError::NotRotatable`] for Up and Down.
    pub fn rotate_y_clockwise(self) -> Result<Self> {
        match self {
            Direction::North => Ok(Direction::East),
            Direction::East => Ok(Direction::South),
            Direction::South => Ok(Direction::West),
            Direction::West => Ok(Direction::North),
            _ => Err(self.not_rotatable(Axis::Y)),
        }
    }

    /// Rotates a quarter turn counter-clockwise around the Y axis.
    ///
    /// # Errors
    /// [`DirectionError::NotRotatable`] for Up and Down.
    pub fn rotate_y_counter_clockwise(self) -> Result<Self> {
        match self {
            Direction::North => Ok(Direction::West),
            Direction::East => Ok(Direction::North),
            Direction::South => Ok(Direction::East),
            Direction::West => Ok(Direction::South),
            _ => Err(self.not_rotatable(Axis::Y)),
        }
    }

    /// Rotates a quarter turn clockwise around the X axis.
    ///
    /// # Errors
    /// [`DirectionError::NotRotatable`] for East and West.
    pub fn rotate_x_clockwise(self) -> Result<Self> {
        match self {
            Direction::Up => Ok(Direction::North),
            Direction::North => Ok(Direction::Down),
            Direction::Down => Ok(Direction::South),
            Direction::South => Ok(Direction::Up),
            _ => Err(self.not_rotatable(Axis::X)),
        }
    }

    /// Rotates a quarter turn counter-clockwise around the X axis.
    ///
    /// # Errors
    /// [`DirectionError::NotRotatable`] for East and West.
    pub fn rotate_x_counter_clockwise(self) -> Result<Self> {
        match self {
            Direction::Up => Ok(Direction::South),
            Direction::South => Ok(Direction::Down),
            Direction::Down => Ok(Direction::North),
            Direction::North => Ok(Direction::Up),
            _ => Err(self.not_rotatable(Axis::X)),
        }
    }

    /// Rotates a quarter turn clockwise around the Z axis.
    ///
    /// # Errors
    /// [`DirectionError::NotRotatable`] for North and South.
    pub fn rotate_z_clockwise(self) -> Result<Self> {
        match self {
            Direction::Up => Ok(Direction::East),
            Direction::East => Ok(Direction::Down),
            Direction::Down => Ok(Direction::West),
            Direction::West => Ok(Direction::Up),
            _ => Err(self.not_rotatable(Axis::Z)),
        }
    }

    /// Rotates a quarter turn counter-clockwise around the Z axis.
    ///
    /// # Errors
    /// [`DirectionError::NotRotatable`] for North and South.
    pub fn rotate_z_counter_clockwise(self) -> Result<Self> {
        match self {
            Direction::Up => Ok(Direction::West),
            Direction::West => Ok(Direction::Down),
            Direction::Down => Ok(Direction::East),
            Direction::East => Ok(Direction::Up),
            _ => Err(self.not_rotatable(Axis::Z)),
        }
    }

    /// Rotates a quarter turn around `axis`, dispatching to the matching family.
    pub fn rotate(self, axis: Axis, clockwise: bool) -> Result<Self> {
        match (axis, clockwise) {
            (Axis::X, true) => self.rotate_x_clockwise(),
            (Axis::X, false) => self.rotate_x_counter_clockwise(),
            (Axis::Y, true) => self.rotate_y_clockwise(),
            (Axis::Y, false) => self.rotate_y_counter_clockwise(),
            (Axis::Z, true) => self.rotate_z_clockwise(),
            (Axis::Z, false) => self.rotate_z_counter_clockwise(),
        }
    }

    fn not_rotatable(self, axis: Axis) -> DirectionError {
        DirectionError::NotRotatable {
            direction: self,
            axis,
        }
    }
}
