// src/math/rotate.rs

use crate::types::Vec3d;

/// A coordinate axis for 3D rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
  /// Rotation about X.
  X,
  /// Rotation about Y.
  Y,
  /// Rotation about Z.
  Z,
}

/// Rotates a point in the XY-plane about the origin by `angle_degrees`.
/// Obeys the right-hand rule: positive angles rotate counter-clockwise.
#[inline]
#[must_use]
pub fn rotate2d(angle_degrees: f64, x: f64, y: f64) -> (f64, f64) {
  let ha = angle_degrees.to_radians();
  (x * ha.cos() - y * ha.sin(), x * ha.sin() + y * ha.cos())
}

/// Rotates a 3D point about the given axis by `alpha` radians.
///
/// With `reverse == true` the angle is negated before applying the standard
/// right-hand rotation matrix, giving a left-handed rotation. Every caller
/// in the unfolding pipeline passes `true`; the sign convention is
/// load-bearing and the planar reference values depend on it.
#[inline]
#[must_use]
pub fn rotate3d(axis: Axis, alpha: f64, v: &Vec3d, reverse: bool) -> Vec3d {
  let alpha = if reverse { -alpha } else { alpha };
  let (sin_a, cos_a) = (alpha.sin(), alpha.cos());

  match axis {
    Axis::X => Vec3d {
      x: v.x,
      y: v.y * cos_a - v.z * sin_a,
      z: v.y * sin_a + v.z * cos_a,
    },
    Axis::Y => Vec3d {
      x: v.x * cos_a + v.z * sin_a,
      y: v.y,
      z: -v.x * sin_a + v.z * cos_a,
    },
    Axis::Z => Vec3d {
      x: v.x * cos_a - v.y * sin_a,
      y: v.x * sin_a + v.y * cos_a,
      z: v.z,
    },
  }
}
