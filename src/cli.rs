//! # Command Line Module
//!
//! Argument parsing and command execution for the `voxel-geometry` binary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use crate::{
    direction::{Axis, Direction, Orientation},
    math::hsv_to_rgb,
    vector::ToStringOptions,
};

/// Block-world geometry helpers.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank the six directions for an entity's pitch and yaw
    Facing {
        /// Vertical look angle in degrees (positive looks down)
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        pitch: f64,
        /// Horizontal look angle in degrees (0 faces south)
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        yaw: f64,
    },
    /// Rotate a direction a quarter turn around an axis
    Rotate {
        /// Direction to rotate (north, south, east, west, up, down)
        direction: Direction,
        /// Rotation axis (x, y or z)
        #[arg(long, default_value = "y")]
        axis: Axis,
        /// Rotate counter-clockwise instead of clockwise
        #[arg(long)]
        counter_clockwise: bool,
    },
    /// Print the unit vector of a direction
    Vector {
        /// Direction to convert
        direction: Direction,
        /// Digits after the decimal point
        #[arg(long, default_value_t = 2)]
        decimals: usize,
        /// Separator between components
        #[arg(long, default_value = ", ")]
        delimiter: String,
    },
    /// Convert an HSV color (all channels in 0..1) to RGB
    Hsv {
        /// Hue
        h: f64,
        /// Saturation
        s: f64,
        /// Value
        v: f64,
    },
}

impl Command {
    /// Runs the command and returns the text to print.
    pub fn execute(&self) -> Result<String> {
        debug!("Executing {:?}", self);

        let output = match self {
            Command::Facing { pitch, yaw } => Orientation::new(*pitch, *yaw)
                .facing_directions()
                .iter()
                .map(Direction::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            Command::Rotate {
                direction,
                axis,
                counter_clockwise,
            } => direction.rotate(*axis, !counter_clockwise)?.to_string(),
            Command::Vector {
                direction,
                decimals,
                delimiter,
            } => direction.to_vector3().to_string_with(&ToStringOptions {
                decimals: *decimals,
                delimiter: delimiter.clone(),
            }),
            Command::Hsv { h, s, v } => {
                let rgb = hsv_to_rgb(*h, *s, *v);
                format!("{} {} {}", rgb.red, rgb.green, rgb.blue)
            }
        };

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let cli =
            Cli::try_parse_from(std::iter::once("voxel-geometry").chain(args.iter().copied()))?;
        cli.command.execute()
    }

    #[test]
    fn test_facing_command() {
        assert_eq!(
            run(&["facing", "--pitch", "0", "--yaw", "0"]).unwrap(),
            "south down west north up east"
        );
        assert!(run(&["facing", "--pitch", "-90"])
            .unwrap()
            .starts_with("up "));
    }

    #[test]
    fn test_rotate_command() {
        assert_eq!(run(&["rotate", "north"]).unwrap(), "east");
        assert_eq!(
            run(&["rotate", "up", "--axis", "x", "--counter-clockwise"]).unwrap(),
            "south"
        );

        let error = run(&["rotate", "up", "--axis", "y"]).unwrap_err();
        assert_eq!(error.to_string(), "Unable to rotate up around the y axis");
    }

    #[test]
    fn test_vector_command() {
        assert_eq!(run(&["vector", "east"]).unwrap(), "1.00, 0.00, 0.00");
        assert_eq!(
            run(&["vector", "North", "--decimals", "0", "--delimiter", " "]).unwrap(),
            "0 0 -1"
        );
    }

    #[test]
    fn test_hsv_command() {
        assert_eq!(run(&["hsv", "0", "1", "1"]).unwrap(), "255 0 0");
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(run(&["rotate", "sideways"]).is_err());
        assert!(run(&["rotate", "north", "--axis", "w"]).is_err());
    }
}
