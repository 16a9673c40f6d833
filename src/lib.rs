#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Geometry
//!
//! Geometry helpers for block-based game worlds, independent of any game engine.
//!
//! This crate provides the vector math, direction handling and scalar utilities that
//! block and entity code needs when reasoning about positions and orientation.
//!
//! ## Key Modules
//!
//! * `math` - Scalar helpers, color conversion and chunk coordinates
//! * `vector` - The `Vector3` value type and its in-place `Vector3Builder`
//! * `direction` - The six axis-aligned directions, their rotations and facing ranking
//! * `timer` - A stopwatch for logging how long operations take
//!
//! ## Usage
//!
//! ```rust
//! use voxel_geometry::{Direction, Orientation, Vector3};
//!
//! let position = Vector3::new(10.5, 64.0, -3.2);
//! let front = position.add(Direction::North.to_vector3()).floor();
//! assert_eq!(front, Vector3::new(10.0, 64.0, -5.0));
//!
//! let player = Orientation::new(0.0, 90.0);
//! assert_eq!(player.primary_direction(), Direction::West);
//! assert_eq!(Direction::West.rotate_y_clockwise(), Ok(Direction::North));
//! ```
//!
//! ## Logging
//!
//! The library only emits records through the `log` facade. The `voxel-geometry`
//! binary installs `env_logger`, configured through `RUST_LOG`.

use clap::Parser;
use log::info;

pub mod cli;
pub mod direction;
pub mod errors;
pub mod math;
pub mod timer;
pub mod vector;

pub use direction::{entity_facing_directions, Axis, Direction, Orientation};
pub use errors::DirectionError;
pub use vector::{ToStringOptions, Vector3, Vector3Builder};

/// Entry point of the `voxel-geometry` binary.
///
/// Initializes logging from `RUST_LOG`, parses the command line and prints the
/// result of the requested command.
pub fn run() -> anyhow::Result<()> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let cli = cli::Cli::parse();
    let output = cli.command.execute()?;
    println!("{output}");

    Ok(())
}
