//! Vector and matrix helpers used by every geometry builder.
//!
//! Matrices are column-major ([`glam::Mat4`]), points are column vectors and
//! composition reads right-to-left: `translate * rot_z * rot_y * rot_x` rotates
//! about X first and translates last. Rotation is not commutative, so the
//! order of [`pivot_transform`] must not change.

use glam::{Mat4, Vec3, Vec4};

/// Converts degrees to radians.
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Divides `v` by its length. Zero-length vectors yield [`Vec3::ZERO`].
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Returns `a * b`.
pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    *a * *b
}

/// Returns `m * v`.
pub fn transform_vec4(m: &Mat4, v: Vec4) -> Vec4 {
    *m * v
}

/// Transforms a point (`w = 1`) and drops the homogeneous coordinate.
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    transform_vec4(m, p.extend(1.0)).truncate()
}

pub fn translation(t: Vec3) -> Mat4 {
    Mat4::from_translation(t)
}

pub fn scaling(s: f32) -> Mat4 {
    Mat4::from_scale(Vec3::splat(s))
}

/// Right-handed rotation about X by `degrees`.
pub fn rotation_x(degrees: f32) -> Mat4 {
    Mat4::from_rotation_x(radians(degrees))
}

/// Right-handed rotation about Y by `degrees`.
pub fn rotation_y(degrees: f32) -> Mat4 {
    Mat4::from_rotation_y(radians(degrees))
}

/// Right-handed rotation about Z by `degrees`.
pub fn rotation_z(degrees: f32) -> Mat4 {
    Mat4::from_rotation_z(radians(degrees))
}

/// `translate(position) * rot_z * rot_y * rot_x`, with `angles` in degrees
/// about X, Y and Z respectively.
///
/// Shared by every builder to place locally-authored geometry at the turtle.
pub fn pivot_transform(position: Vec3, angles: Vec3) -> Mat4 {
    let m = multiply(&translation(position), &rotation_z(angles.z));
    let m = multiply(&m, &rotation_y(angles.y));
    multiply(&m, &rotation_x(angles.x))
}
