//! # Voxel Geometry Command Line Entry Point
//!
//! This is the entry point of the `voxel-geometry` binary.
//! It simply calls into the library's `run()` function.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -- facing --pitch 30 --yaw 45
//! RUST_LOG=debug cargo run -- rotate north --axis y
//! ```

fn main() -> anyhow::Result<()> {
    voxel_geometry::run()
}
