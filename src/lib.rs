#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::unreadable_literal)] // Geometry constants are clearer raw
#![allow(clippy::approx_constant)] // sqrt(3) appears as a literal; std's SQRT_3 is unstable
#![allow(clippy::similar_names)] // Can be common in math-heavy code
#![allow(clippy::must_use_candidate)] // For functions where side effects are intended

//! `xs-dymax` is a Rust implementation of the forward Dymaxion (Fuller)
//! map projection.
//!
//! A geographic coordinate on the unit sphere is classified onto one of the
//! 20 faces of an inscribed icosahedron (and one of 6 LCD sub-triangles per
//! face), unfolded onto a planar template triangle with Fuller's exact
//! transformation, and placed into the classic map layout. Conversions are
//! memoized per [`DymaxConverter`] instance.
//!
//! ```
//! use xs_dymax::DymaxConverter;
//!
//! let converter = DymaxConverter::new();
//! let p = converter.convert(-77.0367, 38.8951); // Washington, DC
//! assert!((p.x - 3.3032683375782588).abs() < 1e-12);
//! assert!((p.y - 1.5338148735451902).abs() < 1e-12);
//! ```

// Declare modules
pub(crate) mod cache;
pub mod constants;
pub mod convert;
pub mod geometry;
pub mod locate;
pub mod math;
pub mod mesh;
pub mod spherical;
pub mod types;
pub mod unfold;

// Re-export key public types and functions for easier use
pub use constants::{NUM_ICOSA_FACES, NUM_ICOSA_VERTS, NUM_LCD_TRIS};
pub use convert::DymaxConverter;
pub use geometry::GeometryTable;
pub use locate::locate;
pub use math::rotate::{rotate2d, rotate3d, Axis};
pub use mesh::{face_to_quad, vertex_to_plane};
pub use spherical::{degs_to_rads, lon_lat_to_spherical, rads_to_degs, spherical_to_vec3d, vec3d_to_azimuth_polar};
pub use types::{DymaxError, PlanarPlacement, PlanarPoint, SphericalCoord, Vec3d};
pub use unfold::project;
