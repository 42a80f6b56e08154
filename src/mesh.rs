// src/mesh.rs

//! Vertex and polygon placement aids for overlay rendering: graticule
//! markers, face outlines, and LCD sub-triangle outlines.

use crate::constants::{FACE_VERT_INDICES, VERTICES};
use crate::geometry::GeometryTable;
use crate::locate::locate;
use crate::types::{PlanarPoint, Vec3d};
use crate::unfold::project;

/// Weight kept on the target vertex when nudging it off the exact
/// polyhedron corner.
const VERTEX_PUSH: f64 = 0.9999;
/// Weight given to each of the other two face vertices. The three weights
/// sum to 1.0001; the blend is deliberately unnormalized.
const VERTEX_NUDGE: f64 = 0.0001;

/// Maps an icosahedron vertex to the plane, in the context of one of the
/// faces it belongs to.
///
/// The vertex is blended 99.99% with 0.01% of each of the other two face
/// vertices before projection: a point exactly on a polyhedron corner sits
/// on the sub-triangle boundary circle where the unfolding transform is
/// degenerate, and the nudge steps just inside the face.
#[must_use]
pub fn vertex_to_plane(table: &GeometryTable, vertex: usize, face_verts: &[usize; 3]) -> PlanarPoint {
  let mut blended = Vec3d::default();
  for &idx in face_verts {
    let (source, weight) = if idx == vertex {
      (&VERTICES[vertex], VERTEX_PUSH)
    } else {
      (&VERTICES[idx], VERTEX_NUDGE)
    };
    blended.x += source.x * weight;
    blended.y += source.y * weight;
    blended.z += source.z * weight;
  }

  let (face, lcd) = locate(table, &blended);
  project(table, face, lcd, &blended)
}

/// Outlines a face as a closed planar polygon (first point repeated at the
/// end).
///
/// `push` pulls each outline point from the face center toward the vertex
/// (1 → at the vertex, 0 → collapsed onto the center); callers use values
/// just under 1 to stay clear of the degenerate boundary circle.
///
/// Non-atomic: the 3 face corners, ring length 4. Atomic: 6 points
/// alternating corner / edge-midpoint, outlining all 6 LCD sub-triangles,
/// ring length 7.
#[must_use]
pub fn face_to_quad(table: &GeometryTable, face: usize, push: f64, atomic: bool) -> Vec<PlanarPoint> {
  let tri = &FACE_VERT_INDICES[face];
  let center = &table.face_centers[face];

  let corner_count = if atomic { 6 } else { 3 };
  let mut points = Vec::with_capacity(corner_count + 1);

  for jdx in 0..corner_count {
    let raw = if !atomic {
      VERTICES[tri[jdx]]
    } else if jdx % 2 == 0 {
      VERTICES[tri[jdx / 2]]
    } else {
      // Midpoint of the edge opposite this corner pair (unnormalized, as
      // the projection tolerates points slightly inside the sphere).
      let up = &VERTICES[tri[(jdx / 2 + 1) % 3]];
      let down = &VERTICES[tri[(jdx / 2 + 2) % 3]];
      Vec3d {
        x: (up.x + down.x) / 2.0,
        y: (up.y + down.y) / 2.0,
        z: (up.z + down.z) / 2.0,
      }
    };

    let pulled = Vec3d {
      x: raw.x * push + center.x * (1.0 - push),
      y: raw.y * push + center.y * (1.0 - push),
      z: raw.z * push + center.z * (1.0 - push),
    };
    let (hit_face, lcd) = locate(table, &pulled);
    points.push(project(table, hit_face, lcd, &pulled));
  }

  points.push(points[0]);
  points
}
