// src/convert.rs

//! The memoized lon/lat → Dymaxion map conversion entry point.

use crate::cache::MemoCache;
use crate::geometry::GeometryTable;
use crate::locate::locate;
use crate::spherical::{lon_lat_to_spherical, spherical_to_vec3d};
use crate::types::{DymaxError, PlanarPoint};
use crate::unfold::project;

/// Memo key: exact bit patterns of both coordinates plus the lcd flag.
/// Keying on bits (rather than float equality) keeps NaN inputs memoizable
/// and replay bit-identical.
type ConvertKey = (u64, u64, bool);

#[derive(Debug, Clone, Copy)]
struct ConvertOutcome {
  point: PlanarPoint,
  lcd: usize,
}

/// Converts (longitude, latitude) in degrees to Dymaxion map coordinates.
///
/// Each instance scopes its own memo cache over the shared
/// [`GeometryTable`], so tests and independent services get isolated
/// converters. The cache is unbounded and lives as long as the converter;
/// conversion is a pure function of immutable geometry, so entries are
/// never invalidated.
#[derive(Debug, Default)]
pub struct DymaxConverter {
  cache: MemoCache<ConvertKey, ConvertOutcome>,
}

impl DymaxConverter {
  /// Creates a converter with an empty memo cache. The shared geometry is
  /// initialized on the first conversion if no one has touched it yet.
  #[must_use]
  pub fn new() -> Self {
    DymaxConverter {
      cache: MemoCache::new(),
    }
  }

  /// Converts a (longitude, latitude) pair in degrees to a planar map
  /// position.
  ///
  /// No input validation: non-finite or out-of-range coordinates propagate
  /// through the arithmetic as NaN. Repeated identical calls return the
  /// memoized result bit-identically.
  #[must_use]
  pub fn convert(&self, lng: f64, lat: f64) -> PlanarPoint {
    self.memoized(lng, lat, false).point
  }

  /// Like [`DymaxConverter::convert`], additionally reporting which LCD
  /// sub-triangle the point fell in.
  #[must_use]
  pub fn convert_with_lcd(&self, lng: f64, lat: f64) -> (PlanarPoint, usize) {
    let outcome = self.memoized(lng, lat, true);
    (outcome.point, outcome.lcd)
  }

  /// Validating variant: rejects non-finite coordinates and latitude
  /// outside [-90, 90] up front, and reports a projection that came back
  /// non-finite (the gz ~ 0 boundary-circle case) as
  /// [`DymaxError::Degenerate`].
  pub fn try_convert(&self, lng: f64, lat: f64) -> Result<(PlanarPoint, usize), DymaxError> {
    if !lng.is_finite() || !lat.is_finite() || lat.abs() > 90.0 {
      return Err(DymaxError::LatLngDomain);
    }
    let (point, lcd) = self.convert_with_lcd(lng, lat);
    if point.x.is_finite() && point.y.is_finite() {
      Ok((point, lcd))
    } else {
      Err(DymaxError::Degenerate)
    }
  }

  fn memoized(&self, lng: f64, lat: f64, with_lcd: bool) -> ConvertOutcome {
    let key = (lng.to_bits(), lat.to_bits(), with_lcd);
    self.cache.get_or_compute(key, || _lon_lat_to_dymax(lng, lat))
  }
}

/// The uncached pipeline: lon/lat → spherical → cartesian → face/LCD →
/// unfolded planar point.
fn _lon_lat_to_dymax(lng: f64, lat: f64) -> ConvertOutcome {
  let table = GeometryTable::get();
  let spherical = lon_lat_to_spherical(lng, lat);
  let point = spherical_to_vec3d(&spherical);
  let (face, lcd) = locate(table, &point);
  ConvertOutcome {
    point: project(table, face, lcd, &point),
    lcd,
  }
}
