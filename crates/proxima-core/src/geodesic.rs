//! Ellipsoidal distance between two coordinates.
//!
//! Delegates to `geographiclib-rs`, which solves the inverse geodesic problem
//! on the WGS-84 ellipsoid. Not a haversine: results differ from a spherical
//! model by up to ~0.5%.

use std::sync::LazyLock;

use geographiclib_rs::{Geodesic, InverseGeodesic};

use crate::actor::Coordinate;

static WGS84: LazyLock<Geodesic> = LazyLock::new(Geodesic::wgs84);

/// WGS-84 geodesic distance between `a` and `b`, in kilometres.
pub fn geodesic_km(a: &Coordinate, b: &Coordinate) -> f64 {
  let metres: f64 =
    WGS84.inverse(a.latitude(), a.longitude(), b.latitude(), b.longitude());
  metres / 1000.0
}
