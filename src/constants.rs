//! Dymaxion projection constants: the compiled-in icosahedron definition.
//!
//! Everything here is static input data. Derived values (unit face centers
//! and their planar positions) live in [`crate::geometry::GeometryTable`].

use crate::types::{PlanarPlacement, Vec3d};

/// The number of vertices of a regular icosahedron.
pub const NUM_ICOSA_VERTS: usize = 12;
/// The number of faces of a regular icosahedron.
pub const NUM_ICOSA_FACES: usize = 20;
/// The number of LCD sub-triangles per face.
pub const NUM_LCD_TRIS: usize = 6;

/// sqrt(3)
pub const M_SQRT3: f64 = 1.732_050_807_568_877_2;

/// Template-triangle arc constant: 2 * asin(sqrt(5 - sqrt(5)) / sqrt(10)).
/// The central angle subtended by one icosahedron edge; planar results are
/// divided by this so the unfolded edge has length 1.
pub const G_ARC: f64 = 1.107_148_717_794_090_4;
/// Half of [`G_ARC`].
pub const G_T: f64 = 0.553_574_358_897_045_2;
/// Distance from face center to the mid-edge on the circumsphere:
/// sqrt(3 + sqrt(5)) / sqrt(5 + sqrt(5)).
pub const G_DVE: f64 = 0.850_650_808_352_039_8;
/// Icosahedron edge length on the unit circumsphere:
/// sqrt(8) / sqrt(5 + sqrt(5)).
pub const G_EL: f64 = 1.051_462_224_238_267_2;

/// Cartesian coordinates of the 12 icosahedron vertices on the unit sphere.
///
/// These are Gray's vertex coordinates at 6-decimal precision. The rounding
/// is part of the definition: downstream planar results reproduce the
/// published reference values only with this exact table.
#[rustfmt::skip]
pub static VERTICES: [Vec3d; NUM_ICOSA_VERTS] = [
  Vec3d { x:  0.420152, y:  0.078145, z:  0.904083 }, // vertex 0
  Vec3d { x:  0.995009, y: -0.091348, z:  0.040147 }, // vertex 1
  Vec3d { x:  0.518837, y:  0.835420, z:  0.181332 }, // vertex 2
  Vec3d { x: -0.414682, y:  0.655962, z:  0.630676 }, // vertex 3
  Vec3d { x: -0.515456, y: -0.381717, z:  0.767201 }, // vertex 4
  Vec3d { x:  0.355781, y: -0.843580, z:  0.402234 }, // vertex 5
  Vec3d { x:  0.414682, y: -0.655962, z: -0.630676 }, // vertex 6
  Vec3d { x:  0.515456, y:  0.381717, z: -0.767201 }, // vertex 7
  Vec3d { x: -0.355781, y:  0.843580, z: -0.402234 }, // vertex 8
  Vec3d { x: -0.995009, y:  0.091348, z: -0.040147 }, // vertex 9
  Vec3d { x: -0.518837, y: -0.835420, z: -0.181332 }, // vertex 10
  Vec3d { x: -0.420152, y: -0.078145, z: -0.904083 }, // vertex 11
];

/// Vertex indices of the 20 icosahedron faces.
///
/// The order within each triple is load-bearing: the first vertex is the
/// unfolding reference vertex, and the LCD tie-break ranks distances in
/// exactly this order.
#[rustfmt::skip]
pub static FACE_VERT_INDICES: [[usize; 3]; NUM_ICOSA_FACES] = [
  [ 0,  1,  2], // face 0
  [ 0,  2,  3], // face 1
  [ 0,  3,  4], // face 2
  [ 0,  4,  5], // face 3
  [ 0,  1,  5], // face 4
  [ 1,  2,  7], // face 5
  [ 2,  7,  8], // face 6
  [ 2,  3,  8], // face 7
  [ 3,  8,  9], // face 8
  [ 3,  4,  9], // face 9
  [ 4,  9, 10], // face 10
  [ 4,  5, 10], // face 11
  [ 5,  6, 10], // face 12
  [ 1,  5,  6], // face 13
  [ 1,  6,  7], // face 14
  [ 6,  7, 11], // face 15
  [ 7,  8, 11], // face 16
  [ 8,  9, 11], // face 17
  [ 9, 10, 11], // face 18
  [ 6, 10, 11], // face 19
];

/// Planar placement of each unfolded face in the classic Fuller layout.
///
/// Translations are face centroid positions on a triangular grid with unit
/// edge length (y in steps of `1 / (2 * sqrt(3))`); rotations orient each
/// face so the net stays edge-continuous where the layout keeps faces
/// joined.
#[rustfmt::skip]
pub static FACE_PLACEMENTS: [PlanarPlacement; NUM_ICOSA_FACES] = [
  PlanarPlacement { x_translate: 2.0, y_translate: 7.0 / (2.0 * M_SQRT3), rotation_degrees: 240.0 }, // face 0
  PlanarPlacement { x_translate: 2.0, y_translate: 5.0 / (2.0 * M_SQRT3), rotation_degrees: 300.0 }, // face 1
  PlanarPlacement { x_translate: 2.5, y_translate: 2.0 / M_SQRT3,         rotation_degrees:   0.0 }, // face 2
  PlanarPlacement { x_translate: 3.0, y_translate: 5.0 / (2.0 * M_SQRT3), rotation_degrees:  60.0 }, // face 3
  PlanarPlacement { x_translate: 2.5, y_translate: 4.0 / M_SQRT3,         rotation_degrees: 180.0 }, // face 4
  PlanarPlacement { x_translate: 1.5, y_translate: 4.0 / M_SQRT3,         rotation_degrees: 300.0 }, // face 5
  PlanarPlacement { x_translate: 1.0, y_translate: 5.0 / (2.0 * M_SQRT3), rotation_degrees: 300.0 }, // face 6
  PlanarPlacement { x_translate: 1.5, y_translate: 2.0 / M_SQRT3,         rotation_degrees:   0.0 }, // face 7
  PlanarPlacement { x_translate: 2.0, y_translate: 1.0 / (2.0 * M_SQRT3), rotation_degrees:   0.0 }, // face 8
  PlanarPlacement { x_translate: 2.5, y_translate: 1.0 / M_SQRT3,         rotation_degrees:  60.0 }, // face 9
  PlanarPlacement { x_translate: 3.5, y_translate: 1.0 / M_SQRT3,         rotation_degrees:  60.0 }, // face 10
  PlanarPlacement { x_translate: 3.5, y_translate: 2.0 / M_SQRT3,         rotation_degrees: 120.0 }, // face 11
  PlanarPlacement { x_translate: 4.0, y_translate: 5.0 / (2.0 * M_SQRT3), rotation_degrees:  60.0 }, // face 12
  PlanarPlacement { x_translate: 4.0, y_translate: 7.0 / (2.0 * M_SQRT3), rotation_degrees:   0.0 }, // face 13
  PlanarPlacement { x_translate: 5.0, y_translate: 7.0 / (2.0 * M_SQRT3), rotation_degrees:   0.0 }, // face 14
  PlanarPlacement { x_translate: 5.0, y_translate: 5.0 / (2.0 * M_SQRT3), rotation_degrees:  60.0 }, // face 15
  PlanarPlacement { x_translate: 5.5, y_translate: 1.0 / M_SQRT3,         rotation_degrees: 300.0 }, // face 16
  PlanarPlacement { x_translate: 5.0, y_translate: 1.0 / (2.0 * M_SQRT3), rotation_degrees: 240.0 }, // face 17
  PlanarPlacement { x_translate: 4.5, y_translate: 1.0 / M_SQRT3,         rotation_degrees: 180.0 }, // face 18
  PlanarPlacement { x_translate: 4.5, y_translate: 2.0 / M_SQRT3,         rotation_degrees:   0.0 }, // face 19
];

/// Alternate placement for face 8, applied to LCD sub-triangles 0-3.
///
/// Face 8 is split in the classic layout: the wedge along the (v3, v9) edge
/// stays with the default placement (joined to face 9), while these
/// sub-triangles move next to face 7 so east Asia remains contiguous around
/// vertex 3. The subset is authoritative data, not a derivable rule.
pub static FACE_8_SPLIT_PLACEMENT: PlanarPlacement = PlanarPlacement {
  x_translate: 1.5,
  y_translate: 1.0 / M_SQRT3,
  rotation_degrees: 300.0,
};

/// Alternate placement for face 15, applied to LCD sub-triangles 0-2.
///
/// The other split face: sub-triangles away from vertex 11 move out of the
/// polar fan so Antarctica remains contiguous around vertex 11.
pub static FACE_15_SPLIT_PLACEMENT: PlanarPlacement = PlanarPlacement {
  x_translate: 5.5,
  y_translate: 2.0 / M_SQRT3,
  rotation_degrees: 0.0,
};
