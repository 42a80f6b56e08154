// src/spherical.rs

//! Conversions between lon/lat, spherical polar, and cartesian coordinates
//! on the unit sphere (not the WGS84 ellipsoid).

use crate::types::{SphericalCoord, Vec3d};

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians.to_degrees()
}

/// Converts a (longitude, latitude) point in degrees into spherical polar
/// coordinates with radius 1.
///
/// Negative longitudes are shifted by +360 before conversion, so phi lands
/// in [0, 2*PI) for in-range input. No validation: NaN or out-of-range
/// input propagates through the trigonometry downstream.
#[must_use]
pub fn lon_lat_to_spherical(lng: f64, lat: f64) -> SphericalCoord {
  let h_theta = 90.0 - lat;
  let h_phi = if lng < 0.0 { lng + 360.0 } else { lng };
  SphericalCoord {
    theta: degs_to_rads(h_theta),
    phi: degs_to_rads(h_phi),
  }
}

/// Converts spherical polar coordinates to a cartesian unit vector.
/// `theta` is the polar angle from +Z; `phi` is the azimuth from +X.
#[must_use]
pub fn spherical_to_vec3d(s: &SphericalCoord) -> Vec3d {
  Vec3d {
    x: s.theta.sin() * s.phi.cos(),
    y: s.theta.sin() * s.phi.sin(),
    z: s.theta.cos(),
  }
}

/// Converts a cartesian unit vector to its (azimuth, polar) angle pair:
/// azimuth = atan2(y, x), polar = acos(z).
///
/// Note the return order is the reverse of [`lon_lat_to_spherical`]'s
/// (theta, phi): here the azimuth comes first. The unfolding transform
/// consumes the pair in exactly this order, so the asymmetry is preserved
/// rather than corrected.
#[must_use]
pub fn vec3d_to_azimuth_polar(v: &Vec3d) -> (f64, f64) {
  (v.y.atan2(v.x), v.z.acos())
}
