//! Core xs-dymax data structures.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 3D floating-point vector. Pipeline intermediates are unit vectors on the
/// sphere; `mesh` blends may sit slightly inside it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// Spherical polar coordinates on the unit sphere, as produced by the
/// forward conversion from lon/lat.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphericalCoord {
  /// Polar angle from +Z, in radians.
  pub theta: f64,
  /// Azimuth from +X, in radians.
  pub phi: f64,
}

/// A point in the shared Dymaxion map plane. Units are template-triangle
/// edge lengths: one icosahedron edge unfolds to length 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanarPoint {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
}

/// Positions one unfolded face in the shared 2D layout: rotate first, then
/// translate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanarPlacement {
  /// X translation applied after rotation.
  pub x_translate: f64,
  /// Y translation applied after rotation.
  pub y_translate: f64,
  /// Right-hand in-plane rotation, in degrees.
  pub rotation_degrees: f64,
}

/// Errors surfaced by the validating conversion entry points.
///
/// The raw pipeline is deliberately validation-free: non-finite input
/// propagates as NaN. These variants exist for callers (such as the TCP
/// service) that want a typed rejection instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DymaxError {
  /// Latitude outside [-90, 90] or a non-finite coordinate.
  #[error("latitude or longitude argument was outside of acceptable range")]
  LatLngDomain,
  /// The projection came back non-finite: the point fell on a sub-triangle
  /// boundary circle (gz ~ 0), where the unfolding transform is undefined.
  #[error("projection is degenerate for this coordinate")]
  Degenerate,
}
