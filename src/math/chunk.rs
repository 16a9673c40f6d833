//! # Chunk Module
//!
//! Conversion between world positions and the horizontal chunk grid.

use serde::{Deserialize, Serialize};

use crate::vector::Vector3;

/// The number of blocks along each horizontal edge of a chunk.
pub const CHUNK_DIMENSION: i32 = 16;

/// Horizontal coordinates of a chunk in the chunk grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChunkPosition {
    /// Chunk index along the X axis
    pub x: i32,
    /// Chunk index along the Z axis
    pub z: i32,
}

impl ChunkPosition {
    /// Creates a new chunk position.
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

/// Returns the chunk containing a world position.
///
/// Flooring makes negative positions belong to the chunk below them, so `-0.5`
/// is in chunk `-1`.
pub fn position_to_chunk(position: &Vector3) -> ChunkPosition {
    let dimension = f64::from(CHUNK_DIMENSION);

    ChunkPosition {
        x: (position.x / dimension).floor() as i32,
        z: (position.z / dimension).floor() as i32,
    }
}

/// Returns the world position of a chunk's minimum corner at `y = 0`.
///
/// The multiplication happens in `f64`, so every `i32` chunk index maps to an
/// exact world coordinate.
///
/// # Arguments
/// * `chunk` - The chunk to locate
///
/// # Returns
/// The corner position, which [`position_to_chunk`] maps back to `chunk`.
pub fn chunk_to_position(chunk: ChunkPosition) -> Vector3 {
    let dimension = f64::from(CHUNK_DIMENSION);

    Vector3::new(
        f64::from(chunk.x) * dimension,
        0.0,
        f64::from(chunk.z) * dimension,
    )
}
