//! # Facing Module
//!
//! Ranks the six directions by how closely they match where an entity is looking.
//!
//! The look vector is derived from the entity's pitch and yaw in degrees. Yaw grows
//! clockwise when seen from above while trigonometric angles grow counter-clockwise,
//! so yaw is negated before conversion. Positive pitch looks down.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::math::degrees_to_radians;

use super::Direction;

/// Where an entity is looking, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    /// Vertical look angle; positive values look down
    pub pitch: f64,
    /// Horizontal look angle; 0 faces South and 90 faces West
    pub yaw: f64,
}

impl Orientation {
    /// Creates an orientation from pitch and yaw in degrees.
    pub fn new(pitch: f64, yaw: f64) -> Self {
        Self { pitch, yaw }
    }

    /// See [`entity_facing_directions`].
    pub fn facing_directions(&self) -> [Direction; 6] {
        entity_facing_directions(self.pitch, self.yaw)
    }

    /// The direction the entity is mostly looking towards.
    pub fn primary_direction(&self) -> Direction {
        self.facing_directions()[0]
    }
}

/// Ranks all six directions for an entity looking along `pitch` and `yaw` (degrees).
///
/// The three half-axes the look vector points into (one of East/West, one of
/// Up/Down, one of South/North) are ordered from most to least dominant. The
/// horizontal components are weighted by the cosine of the pitch, so looking
/// steeply down makes Down dominant regardless of yaw. Comparisons are strict and
/// ties resolve to the later alternative.
///
/// # Returns
/// `[first, second, third, first.opposite(), second.opposite(), third.opposite()]`.
/// Callers may index into this array, so the order is part of the contract.
///
/// # Example
/// ```rust
/// use voxel_geometry::{entity_facing_directions, Direction};
///
/// let ranking = entity_facing_directions(0.0, 0.0);
/// assert_eq!(ranking[0], Direction::South);
/// assert_eq!(ranking[3], Direction::North);
/// ```
pub fn entity_facing_directions(pitch: f64, yaw: f64) -> [Direction; 6] {
    let (pitch_sin, pitch_cos) = degrees_to_radians(pitch).sin_cos();
    let (yaw_sin, yaw_cos) = degrees_to_radians(-yaw).sin_cos();

    let is_east = yaw_sin > 0.0;
    let is_up = pitch_sin < 0.0;
    let is_south = yaw_cos > 0.0;

    let east_west = yaw_sin.abs();
    let vertical = pitch_sin.abs();
    let north_south = yaw_cos.abs();
    let east_west_weighted = east_west * pitch_cos;
    let north_south_weighted = north_south * pitch_cos;

    let x_direction = if is_east {
        Direction::East
    } else {
        Direction::West
    };
    let y_direction = if is_up { Direction::Up } else { Direction::Down };
    let z_direction = if is_south {
        Direction::South
    } else {
        Direction::North
    };

    trace!(
        "Facing pitch={pitch} yaw={yaw}: x={east_west_weighted} y={vertical} z={north_south_weighted}"
    );

    let ranking = if east_west > north_south {
        if vertical > east_west_weighted {
            [y_direction, x_direction, z_direction]
        } else if north_south_weighted > vertical {
            [x_direction, z_direction, y_direction]
        } else {
            [x_direction, y_direction, z_direction]
        }
    } else if vertical > north_south_weighted {
        [y_direction, z_direction, x_direction]
    } else if east_west_weighted > vertical {
        [z_direction, x_direction, y_direction]
    } else {
        [z_direction, y_direction, x_direction]
    };

    with_opposites(ranking)
}

fn with_opposites([first, second, third]: [Direction; 3]) -> [Direction; 6] {
    [
        first,
        second,
        third,
        first.opposite(),
        second.opposite(),
        third.opposite(),
    ]
}
