// tests/mesh_tests.rs

use xs_dymax::constants::FACE_VERT_INDICES;
use xs_dymax::*;

fn assert_point(p: PlanarPoint, x: f64, y: f64, context: &str) {
  assert!((p.x - x).abs() < 1e-12, "{}: x {} != {}", context, p.x, x);
  assert!((p.y - y).abs() < 1e-12, "{}: y {} != {}", context, p.y, y);
}

#[test]
fn test_vertex_to_plane_on_face_1() {
  // Vertex 3 in the context of face 1 lands on the face-1/face-7 seam,
  // nudged just off the exact corner.
  let table = GeometryTable::get();
  let p = vertex_to_plane(table, 3, &FACE_VERT_INDICES[1]);
  assert_point(p, 2.0000003322806266, 0.86617338071785721, "vertex 3 / face 1");
}

#[test]
fn test_vertex_to_plane_every_corner_is_finite() {
  let table = GeometryTable::get();
  for (face, tri) in FACE_VERT_INDICES.iter().enumerate() {
    for &vertex in tri {
      let p = vertex_to_plane(table, vertex, tri);
      assert!(
        p.x.is_finite() && p.y.is_finite(),
        "vertex {} of face {} -> ({}, {})",
        vertex,
        face,
        p.x,
        p.y
      );
    }
  }
}

#[test]
fn test_face_outline_reference_values() {
  // Face 1 pulled 75% of the way out from its center.
  let table = GeometryTable::get();
  let outline = face_to_quad(table, 1, 0.75, false);
  assert_eq!(outline.len(), 4);
  assert_point(outline[0], 2.35304555643014, 1.6472066200152073, "corner 0");
  assert_point(outline[1], 1.6469541348510974, 1.6472066169128479, "corner 1");
  assert_point(outline[2], 2.0000002495226172, 1.0357138290762697, "corner 2");
  assert_point(outline[3], 2.35304555643014, 1.6472066200152073, "closing point");
}

#[test]
fn test_atomic_outline_reference_values() {
  // Face 2 with the default push, alternating corner / edge midpoint.
  let table = GeometryTable::get();
  let outline = face_to_quad(table, 2, 0.9999, true);
  assert_eq!(outline.len(), 7);
  assert_point(outline[0], 2.5000000000000004, 1.7319766025309371, "corner 0");
  assert_point(outline[1], 2.4999999999999996, 0.91047644127707628, "midpoint 0");
  assert_point(outline[2], 2.0000641770607221, 0.86606258171231776, "corner 1");
  assert_point(outline[3], 2.7115043144181219, 1.2768125391293847, "midpoint 1");
  assert_point(outline[4], 2.9999358644979544, 0.86606239322682121, "corner 2");
  assert_point(outline[5], 2.2884956883792245, 1.2768126321958542, "midpoint 2");
  assert_point(outline[6], outline[0].x, outline[0].y, "closing point");
}

#[test]
fn test_all_rings_closed_and_sized() {
  let table = GeometryTable::get();
  for face in 0..NUM_ICOSA_FACES {
    for (atomic, expected_len) in [(false, 4), (true, 7)] {
      let ring = face_to_quad(table, face, 0.9999, atomic);
      assert_eq!(ring.len(), expected_len, "face {} atomic={}", face, atomic);
      assert_eq!(ring[0], ring[expected_len - 1], "face {} atomic={} not closed", face, atomic);
      for (i, p) in ring.iter().enumerate() {
        assert!(
          p.x.is_finite() && p.y.is_finite(),
          "face {} atomic={} point {} not finite",
          face,
          atomic,
          i
        );
      }
    }
  }
}

#[test]
fn test_push_zero_collapses_to_face_center() {
  // With push = 0 every outline point is the face center itself.
  let table = GeometryTable::get();
  let ring = face_to_quad(table, 6, 0.0, false);
  let center = table.face_center_planar[6];
  for p in &ring {
    assert!((p.x - center.x).abs() < 1e-12 && (p.y - center.y).abs() < 1e-12);
  }
}
