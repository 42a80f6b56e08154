// src/locate.rs

//! Icosahedron face and LCD sub-triangle classification.

use crate::constants::{FACE_VERT_INDICES, VERTICES};
use crate::geometry::GeometryTable;
use crate::math::vec3d::{_point_dist, _point_square_dist};
use crate::types::Vec3d;

/// Ranks the distances from a point to the face's three vertices into one
/// of the six LCD sub-triangle indices.
///
/// The table is ordered, and the first matching condition wins on ties: a
/// point exactly equidistant from all three vertices classifies as LCD 0.
#[inline]
#[must_use]
pub(crate) fn _lcd_from_distances(d1: f64, d2: f64, d3: f64) -> usize {
  if d1 <= d2 && d2 <= d3 {
    0
  } else if d1 <= d3 && d3 <= d2 {
    5
  } else if d2 <= d1 && d1 <= d3 {
    1
  } else if d2 <= d3 && d3 <= d1 {
    2
  } else if d3 <= d1 && d1 <= d2 {
    4
  } else {
    3 // d3 <= d2 && d2 <= d1
  }
}

/// Determines which of the 20 icosahedron faces contains `point`, and which
/// of the face's 6 LCD sub-triangles.
///
/// The containing face is the one whose center unit vector is closest to
/// the point (strict-less comparison, so the first of the 20 centers wins
/// an exact tie). The LCD index comes from the fixed distance ranking over
/// the face's ordered vertex triple.
#[must_use]
pub fn locate(table: &GeometryTable, point: &Vec3d) -> (usize, usize) {
  let mut face = 0;
  let mut min_sqd = f64::INFINITY;
  for (idx, center) in table.face_centers.iter().enumerate() {
    let sqd = _point_square_dist(center, point);
    if sqd < min_sqd {
      face = idx;
      min_sqd = sqd;
    }
  }

  let [v1, v2, v3] = FACE_VERT_INDICES[face];
  let d1 = _point_dist(point, &VERTICES[v1]);
  let d2 = _point_dist(point, &VERTICES[v2]);
  let d3 = _point_dist(point, &VERTICES[v3]);

  (face, _lcd_from_distances(d1, d2, d3))
}
