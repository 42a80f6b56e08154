// src/math/vec3d.rs

use crate::types::Vec3d;

/// Square of a number.
#[inline]
fn _square(x: f64) -> f64 {
  x * x
}

/// Euclidean distance between two 3D coordinates.
#[inline]
#[must_use]
pub(crate) fn _point_dist(v1: &Vec3d, v2: &Vec3d) -> f64 {
  (_square(v1.x - v2.x) + _square(v1.y - v2.y) + _square(v1.z - v2.z)).sqrt()
}

/// Square of the Euclidean distance between two 3D coordinates.
///
/// Cheaper than [`_point_dist`] when only the ordering matters, as in the
/// closest-face-center scan.
#[inline]
#[must_use]
pub(crate) fn _point_square_dist(v1: &Vec3d, v2: &Vec3d) -> f64 {
  _square(v1.x - v2.x) + _square(v1.y - v2.y) + _square(v1.z - v2.z)
}

/// Normalize a vector onto the unit sphere.
#[inline]
#[must_use]
pub(crate) fn _normalize(v: &Vec3d) -> Vec3d {
  let mag = (_square(v.x) + _square(v.y) + _square(v.z)).sqrt();
  Vec3d {
    x: v.x / mag,
    y: v.y / mag,
    z: v.z / mag,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_point_dist() {
    let origin = Vec3d::default();
    let unit_x = Vec3d { x: 1.0, y: 0.0, z: 0.0 };
    let ones = Vec3d { x: 1.0, y: 1.0, z: 1.0 };

    assert!(_point_dist(&origin, &origin).abs() < f64::EPSILON, "distance to self is 0");
    assert!(
      (_point_dist(&origin, &unit_x) - 1.0).abs() < f64::EPSILON,
      "distance to <1,0,0> is 1"
    );
    assert!(
      (_point_dist(&origin, &ones) - 3.0f64.sqrt()).abs() < f64::EPSILON,
      "distance to <1,1,1> is sqrt(3)"
    );
    assert!(
      (_point_square_dist(&origin, &ones) - 3.0).abs() < f64::EPSILON,
      "squared distance to <1,1,1> is 3"
    );
  }

  #[test]
  fn test_normalize() {
    let v = Vec3d { x: 3.0, y: 0.0, z: 4.0 };
    let n = _normalize(&v);
    assert!((n.x - 0.6).abs() < f64::EPSILON);
    assert!((n.y - 0.0).abs() < f64::EPSILON);
    assert!((n.z - 0.8).abs() < f64::EPSILON);
  }
}
