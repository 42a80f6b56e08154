// src/geometry.rs

//! Derived icosahedron geometry, built once behind a process-wide guard.

use crate::constants::{FACE_VERT_INDICES, NUM_ICOSA_FACES, VERTICES};
use crate::locate::locate;
use crate::math::vec3d::_normalize;
use crate::types::{PlanarPoint, Vec3d};
use crate::unfold::project;
use once_cell::sync::Lazy;

static GEOMETRY: Lazy<GeometryTable> = Lazy::new(GeometryTable::build);

/// Immutable geometry derived from the compiled-in icosahedron tables:
/// unit face centers and their planar map positions.
///
/// Construction is a one-time initialization barrier; every conversion goes
/// through [`GeometryTable::get`], which builds the table on first use and
/// hands out the same immutable instance afterwards. Nothing happens at
/// load time.
#[derive(Debug)]
pub struct GeometryTable {
  /// Unit-vector center of each face (normalized vertex mean).
  pub face_centers: [Vec3d; NUM_ICOSA_FACES],
  /// Planar map position of each face center, eagerly projected at build
  /// time. Useful for overlay labeling; also a self-check that every face
  /// unfolds to a finite, distinct position.
  pub face_center_planar: [PlanarPoint; NUM_ICOSA_FACES],
}

impl GeometryTable {
  /// The shared geometry instance, built on first access.
  #[must_use]
  pub fn get() -> &'static GeometryTable {
    &GEOMETRY
  }

  fn build() -> Self {
    let mut face_centers = [Vec3d::default(); NUM_ICOSA_FACES];
    for (center, tri) in face_centers.iter_mut().zip(FACE_VERT_INDICES.iter()) {
      let (a, b, c) = (&VERTICES[tri[0]], &VERTICES[tri[1]], &VERTICES[tri[2]]);
      let mean = Vec3d {
        x: (a.x + b.x + c.x) / 3.0,
        y: (a.y + b.y + c.y) / 3.0,
        z: (a.z + b.z + c.z) / 3.0,
      };
      *center = _normalize(&mean);
    }

    let mut table = GeometryTable {
      face_centers,
      face_center_planar: [PlanarPoint::default(); NUM_ICOSA_FACES],
    };

    // Project every face center through the full pipeline. `project` only
    // reads `face_centers`, so filling the planar slots afterwards is safe.
    for idx in 0..NUM_ICOSA_FACES {
      let center = table.face_centers[idx];
      let (face, lcd) = locate(&table, &center);
      let planar = project(&table, face, lcd, &center);
      table.face_center_planar[idx] = planar;
    }

    table
  }
}
