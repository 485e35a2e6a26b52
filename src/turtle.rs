//! Turtle state and the symbol alphabet it understands.

use crate::random::AngleRange;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Where the turtle is, how it is oriented and how thick it draws.
///
/// Orientation is three independent Euler angles in degrees about X, Y and Z,
/// applied as `rot_z * rot_y * rot_x` by the builders. The whole record is
/// what `[` saves and `]` restores.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    pub position: Vec3,
    pub angles: Vec3,
    pub radius: f32,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            angles: Vec3::new(0.0, 20.0, 0.0),
            radius: 0.025,
        }
    }
}

impl TurtleState {
    pub fn new(position: Vec3, angles: Vec3, radius: f32) -> Self {
        Self {
            position,
            angles,
            radius,
        }
    }

    /// Adds `degrees` to the X angle.
    pub fn turn_x(&mut self, degrees: f32) {
        self.angles.x += degrees;
    }

    /// Adds `degrees` to the Z angle.
    pub fn turn_z(&mut self, degrees: f32) {
        self.angles.z += degrees;
    }

    pub fn shrink(&mut self, factor: f32) {
        self.radius *= factor;
    }
}

/// Operations the plant turtle performs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Draw a leaf (`0`).
    Leaf,
    /// Draw a branch segment (`1`).
    Branch,
    /// Turn about Z by a random amount, signed (`\` / `/`).
    Roll(f32),
    /// Turn about X by a random amount, signed (`+` / `-`).
    Pitch(f32),
    /// Turn by a random amount, signed (`^` / `&`). Named as a Y turn but
    /// rotates about X, same as [`TurtleOp::Pitch`].
    Tilt(f32),
    /// Thin the branch radius (`.`).
    Shrink,
    /// Save the turtle state (`[`).
    Push,
    /// Restore the most recently saved state (`]`).
    Pop,
    /// Any symbol without a meaning.
    Ignore,
}

impl TurtleOp {
    pub fn from_symbol(c: char) -> Self {
        match c {
            '0' => Self::Leaf,
            '1' => Self::Branch,
            '/' => Self::Roll(-1.0),
            '\\' => Self::Roll(1.0),
            '-' => Self::Pitch(-1.0),
            '+' => Self::Pitch(1.0),
            '&' => Self::Tilt(-1.0),
            '^' => Self::Tilt(1.0),
            '.' => Self::Shrink,
            '[' => Self::Push,
            ']' => Self::Pop,
            _ => Self::Ignore,
        }
    }
}

/// Start state and drawing parameters for interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleConfig {
    pub initial: TurtleState,
    /// Height of each branch segment.
    pub branch_length: f32,
    /// Height of each leaf diamond.
    pub leaf_height: f32,
    /// Multiplier applied to the radius by `.`.
    pub shrink_factor: f32,
    pub angle_range: AngleRange,
    /// Maximum number of simultaneously saved states.
    pub max_stack_depth: usize,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            initial: TurtleState::default(),
            branch_length: 0.067,
            leaf_height: 0.075,
            shrink_factor: 0.98,
            angle_range: AngleRange::default(),
            max_stack_depth: 1024,
        }
    }
}
