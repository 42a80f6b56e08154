// src/unfold.rs

//! Fuller's exact spherical-triangle-to-plane unfolding transform, plus the
//! per-face planar placement.

use crate::constants::{
  FACE_15_SPLIT_PLACEMENT, FACE_8_SPLIT_PLACEMENT, FACE_PLACEMENTS, FACE_VERT_INDICES, G_ARC, G_DVE, G_EL, G_T,
  M_SQRT3, VERTICES,
};
use crate::geometry::GeometryTable;
use crate::math::rotate::{rotate2d, rotate3d, Axis};
use crate::spherical::vec3d_to_azimuth_polar;
use crate::types::{PlanarPlacement, PlanarPoint, Vec3d};
use std::f64::consts::FRAC_PI_2;

/// Selects the placement for a face/LCD pair, honoring the two split faces.
#[inline]
#[must_use]
pub(crate) fn _placement_for(face: usize, lcd: usize) -> &'static PlanarPlacement {
  if face == 8 && lcd < 4 {
    &FACE_8_SPLIT_PLACEMENT
  } else if face == 15 && lcd < 3 {
    &FACE_15_SPLIT_PLACEMENT
  } else {
    &FACE_PLACEMENTS[face]
  }
}

/// Projects a cartesian point known to lie on face `face`, sub-triangle
/// `lcd`, onto the Dymaxion map plane.
///
/// The point and the face's reference vertex are rotated into a template
/// position (face center on +Z, reference vertex azimuth at pi/2) using the
/// reverse rotation convention, then Fuller's closed-form transform maps
/// the template triangle onto the plane, and the face placement moves the
/// result into the shared layout.
///
/// Output is finite for unit-vector input except on the sub-triangle
/// boundary circle (gz ~ 0), where the transform is undefined and NaN
/// propagates instead of panicking.
#[must_use]
pub fn project(table: &GeometryTable, face: usize, lcd: usize, point: &Vec3d) -> PlanarPoint {
  let ref_vertex = &VERTICES[FACE_VERT_INDICES[face][0]];

  // Rotate the face center onto +Z, dragging the point and the reference
  // vertex along.
  let (theta, phi) = vec3d_to_azimuth_polar(&table.face_centers[face]);
  let mut h0 = rotate3d(Axis::Z, theta, point, true);
  let mut h1 = rotate3d(Axis::Z, theta, ref_vertex, true);
  h0 = rotate3d(Axis::Y, phi, &h0, true);
  h1 = rotate3d(Axis::Y, phi, &h1, true);

  // Spin the reference vertex to azimuth pi/2.
  let (theta2, _) = vec3d_to_azimuth_polar(&h1);
  h0 = rotate3d(Axis::Z, theta2 - FRAC_PI_2, &h0, true);

  // Exact transformation equations.
  let gz = (1.0 - h0.x * h0.x - h0.y * h0.y).sqrt();
  let gs = (5.0 + 2.0 * 5.0f64.sqrt()).sqrt() / (gz * 15.0f64.sqrt());

  let gxp = h0.x * gs;
  let gyp = h0.y * gs;

  let ga0p = 2.0 * gyp / M_SQRT3 + G_EL / 3.0;
  let ga1p = gxp - gyp / M_SQRT3 + G_EL / 3.0;
  let ga2p = G_EL / 3.0 - gxp - gyp / M_SQRT3;

  let ga0 = G_T + (ga0p - 0.5 * G_EL).atan2(G_DVE);
  let ga1 = G_T + (ga1p - 0.5 * G_EL).atan2(G_DVE);
  let ga2 = G_T + (ga2p - 0.5 * G_EL).atan2(G_DVE);

  let gx = 0.5 * (ga1 - ga2);
  let gy = (2.0 * ga0 - ga1 - ga2) / (2.0 * M_SQRT3);

  // Rescale so the plane triangle edge length is 1.
  let point_x = gx / G_ARC;
  let point_y = gy / G_ARC;

  let placement = _placement_for(face, lcd);
  let (rotated_x, rotated_y) = rotate2d(placement.rotation_degrees, point_x, point_y);
  PlanarPoint {
    x: rotated_x + placement.x_translate,
    y: rotated_y + placement.y_translate,
  }
}
