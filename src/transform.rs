//! Model transform state and the key actions that adjust it.

use crate::math::{multiply, rotation_x, rotation_y, rotation_z, scaling, translation};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Degrees per rotate action.
pub const ANGLE_STEP: f32 = 5.0;
/// Units per translate action.
pub const TRANSLATION_STEP: f32 = 0.05;
/// Change per scale action.
pub const SCALE_STEP: f32 = 0.05;

/// Scale, rotation and translation of the whole model, recomputed into a
/// matrix every frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelTransform {
    /// Degrees about X, Y and Z.
    pub angles: [f32; 3],
    pub translation: Vec3,
    pub scale: f32,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            angles: [0.0; 3],
            translation: Vec3::new(0.0, -0.40, 0.5),
            scale: 1.0,
        }
    }
}

impl ModelTransform {
    /// `translate * rot_z * rot_y * rot_x * scale`.
    pub fn matrix(&self) -> Mat4 {
        let m = multiply(&translation(self.translation), &rotation_z(self.angles[2]));
        let m = multiply(&m, &rotation_y(self.angles[1]));
        let m = multiply(&m, &rotation_x(self.angles[0]));
        multiply(&m, &scaling(self.scale))
    }

    pub fn apply(&mut self, action: TransformAction) {
        match action {
            TransformAction::Rotate { axis, sign } => self.angles[axis.index()] += ANGLE_STEP * sign,
            TransformAction::Scale(sign) => self.scale += SCALE_STEP * sign,
            TransformAction::TranslateX(sign) => self.translation.x += TRANSLATION_STEP * sign,
            TransformAction::TranslateY(sign) => self.translation.y += TRANSLATION_STEP * sign,
            TransformAction::Reset => *self = Self::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// A discrete adjustment produced by a key press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformAction {
    Rotate { axis: Axis, sign: f32 },
    Scale(f32),
    TranslateX(f32),
    TranslateY(f32),
    /// Restore every component to its default.
    Reset,
}

impl TransformAction {
    /// Lowercase axis letters rotate negatively, uppercase positively. `w`/`s`
    /// shrink/grow, `a`/`d` move along X, `+`/`-` along Y, `r` resets.
    pub fn from_key(key: char) -> Option<Self> {
        let action = match key {
            'x' => Self::Rotate { axis: Axis::X, sign: -1.0 },
            'y' => Self::Rotate { axis: Axis::Y, sign: -1.0 },
            'z' => Self::Rotate { axis: Axis::Z, sign: -1.0 },
            'X' => Self::Rotate { axis: Axis::X, sign: 1.0 },
            'Y' => Self::Rotate { axis: Axis::Y, sign: 1.0 },
            'Z' => Self::Rotate { axis: Axis::Z, sign: 1.0 },
            'w' => Self::Scale(-1.0),
            's' => Self::Scale(1.0),
            'a' => Self::TranslateX(-1.0),
            'd' => Self::TranslateX(1.0),
            '+' => Self::TranslateY(1.0),
            '-' => Self::TranslateY(-1.0),
            'r' | 'R' => Self::Reset,
            _ => return None,
        };
        Some(action)
    }
}
