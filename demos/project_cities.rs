use xs_dymax::{face_to_quad, vertex_to_plane, DymaxConverter, GeometryTable, NUM_ICOSA_FACES};

fn main() {
  println!("--- Dymaxion Projection Demo ---");

  let converter = DymaxConverter::new();

  // 1. Project a few cities onto the unfolded map.
  let cities = [
    ("Washington, DC", -77.0367, 38.8951),
    ("London", -0.1278, 51.5074),
    ("Tokyo", 139.6917, 35.6895),
    ("Sydney", 151.2093, -33.8688),
    ("Honolulu", -157.8583, 21.3069),
    ("McMurdo Station", 166.6683, -77.8419),
  ];
  for (name, lng, lat) in cities {
    let (p, lcd) = converter.convert_with_lcd(lng, lat);
    println!("{name:>16}: ({lng:>9.4}, {lat:>8.4}) -> x {:.6}, y {:.6} (lcd {lcd})", p.x, p.y);
  }

  // 2. Face centers land on a triangular grid in the classic layout.
  let table = GeometryTable::get();
  println!("\nPlanar face centers:");
  for face in 0..NUM_ICOSA_FACES {
    let c = table.face_center_planar[face];
    println!("  face {face:>2}: ({:.6}, {:.6})", c.x, c.y);
  }

  // 3. Outline one face, and mark one of its corners.
  let outline = face_to_quad(table, 1, 0.9999, false);
  println!("\nFace 1 outline ({} points, closed):", outline.len());
  for p in &outline {
    println!("  ({:.6}, {:.6})", p.x, p.y);
  }

  let corner = vertex_to_plane(table, 3, &xs_dymax::constants::FACE_VERT_INDICES[1]);
  println!("Vertex 3 near face 1 maps to ({:.6}, {:.6})", corner.x, corner.y);
}
