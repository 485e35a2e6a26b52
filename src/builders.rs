//! Procedural shapes: branch segments, leaves and the pot.
//!
//! Branches and leaves are authored around the origin with +Y as their
//! growth axis, then placed with [`pivot_transform`]. Each returns the point
//! the turtle should continue from.

use crate::math::{pivot_transform, radians, transform_point};
use crate::mesh::{MeshAccumulator, TextureTag};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Radial slices around a branch segment.
pub const CYLINDER_RADIAL_DIVISIONS: usize = 10;

/// A branch segment.
///
/// The top ring sits at `+height / 2` and the bottom ring at `-height / 4`,
/// so consecutive segments overlap and hide the joints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    pub height: f32,
    pub radius: f32,
    pub tag: TextureTag,
    /// When false only the tip is computed.
    pub draw: bool,
}

impl Cylinder {
    /// Emits three quads per slice (top cap, bottom cap, side) and returns the
    /// transformed top centre.
    pub fn emit(&self, mesh: &mut MeshAccumulator, position: Vec3, angles: Vec3) -> Vec3 {
        let m = pivot_transform(position, angles);
        let top_y = self.height / 2.0;
        let bottom_y = -(self.height / 4.0);

        let top_center = transform_point(&m, Vec3::new(0.0, top_y, 0.0));
        if !self.draw {
            return top_center;
        }
        let bottom_center = transform_point(&m, Vec3::new(0.0, bottom_y, 0.0));

        let step = 360.0 / CYLINDER_RADIAL_DIVISIONS as f32;
        for i in 0..CYLINDER_RADIAL_DIVISIONS {
            let (x0, z0) = circle_point(self.radius, i as f32 * step);
            let (x1, z1) = circle_point(self.radius, (i + 1) as f32 * step);

            let top0 = transform_point(&m, Vec3::new(x0, top_y, z0));
            let top1 = transform_point(&m, Vec3::new(x1, top_y, z1));
            let bottom0 = transform_point(&m, Vec3::new(x0, bottom_y, z0));
            let bottom1 = transform_point(&m, Vec3::new(x1, bottom_y, z1));

            // Caps are triangles emitted as quads with a repeated corner.
            mesh.add_quad([top0, top_center, top_center, top1], self.tag);
            mesh.add_quad([bottom_center, bottom0, bottom1, bottom_center], self.tag);
            mesh.add_quad([top0, top1, bottom1, bottom0], self.tag);
        }

        top_center
    }
}

/// A diamond-shaped leaf, double sided.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Leaf {
    pub height: f32,
    pub tag: TextureTag,
}

impl Leaf {
    /// Emits the front and back faces and returns the transformed base, which
    /// is the pivot itself.
    pub fn emit(&self, mesh: &mut MeshAccumulator, position: Vec3, angles: Vec3) -> Vec3 {
        let m = pivot_transform(position, angles);
        let h = self.height;

        let tip = transform_point(&m, Vec3::new(0.0, h * 1.5, 0.0));
        let right = transform_point(&m, Vec3::new(h / 2.0, h / 2.0, 0.0));
        let base = transform_point(&m, Vec3::ZERO);
        let left = transform_point(&m, Vec3::new(-(h / 2.0), h / 2.0, 0.0));

        mesh.add_quad([tip, left, base, right], self.tag);
        mesh.add_quad([left, tip, right, base], self.tag);

        base
    }
}

/// Shape of the flower pot: a truncated cone with a soil disc near the rim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PotConfig {
    pub radial_divisions: usize,
    /// Bands up each side wall.
    pub height_divisions: usize,
    /// Rim radius at `y = half_height`.
    pub top_radius: f32,
    /// The pot spans `-half_height..=half_height` on Y.
    pub half_height: f32,
    /// Y of the soil surface.
    pub dirt_level: f32,
    /// Bottom radius as a fraction of the rim radius.
    pub percent_of_top: f32,
}

impl Default for PotConfig {
    fn default() -> Self {
        Self {
            radial_divisions: 15,
            height_divisions: 1,
            top_radius: 0.25,
            half_height: 0.25,
            dirt_level: 0.225,
            percent_of_top: 0.55,
        }
    }
}

impl PotConfig {
    /// Quads [`emit`](Self::emit) appends.
    pub fn quad_count(&self) -> usize {
        self.radial_divisions * (3 + self.height_divisions)
    }

    /// Radius multiplier at height `y`: 1 at the rim, `percent_of_top` at the base.
    pub fn taper(&self, y: f32) -> f32 {
        let ratio = -(2.0 * self.half_height) / (self.percent_of_top - 1.0);
        1.0 + (y - self.half_height) / ratio
    }

    /// Emits soil, inner rim, base and side walls.
    pub fn emit(&self, mesh: &mut MeshAccumulator) {
        let h = self.half_height;
        let dirt = self.dirt_level;
        let dirt_scale = self.taper(dirt);
        let bottom_scale = self.percent_of_top;
        let band = 2.0 * h / self.height_divisions as f32;

        let step = 360.0 / self.radial_divisions as f32;
        for i in 0..self.radial_divisions {
            let (x0, z0) = circle_point(self.top_radius, i as f32 * step);
            let (x1, z1) = circle_point(self.top_radius, (i + 1) as f32 * step);

            mesh.add_quad(
                [
                    Vec3::new(0.0, dirt, 0.0),
                    Vec3::new(x1 * dirt_scale, dirt, z1 * dirt_scale),
                    Vec3::new(x0 * dirt_scale, dirt, z0 * dirt_scale),
                    Vec3::new(0.0, dirt, 0.0),
                ],
                TextureTag::Dirt,
            );

            // Inner lip above the soil, so terracotta shows on both sides.
            mesh.add_quad(
                [
                    Vec3::new(x0, h, z0),
                    Vec3::new(x0 * dirt_scale, dirt, z0 * dirt_scale),
                    Vec3::new(x1 * dirt_scale, dirt, z1 * dirt_scale),
                    Vec3::new(x1, h, z1),
                ],
                TextureTag::Top,
            );

            mesh.add_quad(
                [
                    Vec3::new(0.0, -h, 0.0),
                    Vec3::new(x0 * bottom_scale, -h, z0 * bottom_scale),
                    Vec3::new(x1 * bottom_scale, -h, z1 * bottom_scale),
                    Vec3::new(0.0, -h, 0.0),
                ],
                TextureTag::Top,
            );

            for j in 0..self.height_divisions {
                let bottom_y = j as f32 * band - h;
                let top_y = (j + 1) as f32 * band - h;
                let top = self.taper(top_y);
                let bottom = self.taper(bottom_y);

                mesh.add_quad(
                    [
                        Vec3::new(x0 * top, top_y, z0 * top),
                        Vec3::new(x1 * top, top_y, z1 * top),
                        Vec3::new(x1 * bottom, bottom_y, z1 * bottom),
                        Vec3::new(x0 * bottom, bottom_y, z0 * bottom),
                    ],
                    TextureTag::Top,
                );
            }
        }

        tracing::debug!(quads = self.quad_count(), "pot emitted");
    }
}

/// `(x, z)` on a circle of `radius` at `degrees`.
fn circle_point(radius: f32, degrees: f32) -> (f32, f32) {
    let (s, c) = radians(degrees).sin_cos();
    (radius * c, radius * s)
}
