//! # Errors Module
//!
//! Error types returned by the fallible direction operations.

use thiserror::Error;

use crate::direction::{Axis, Direction};

/// Errors produced by [`Direction`] and [`Axis`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectionError {
    /// The direction does not lie in the plane of the requested rotation.
    #[error("Unable to rotate {direction} around the {axis} axis")]
    NotRotatable {
        /// The direction that was asked to rotate
        direction: Direction,
        /// The axis of the requested rotation
        axis: Axis,
    },
    /// Only horizontal directions have a rotation angle.
    #[error("Direction {0} has no horizontal rotation")]
    NotHorizontal(Direction),
    /// A direction name that could not be parsed.
    #[error("Unknown direction: {0}")]
    UnknownName(String),
    /// An axis name that could not be parsed.
    #[error("Unknown axis: {0}")]
    UnknownAxis(String),
}

/// Result alias for direction operations.
pub type Result<T> = std::result::Result<T, DirectionError>;
