//! Point-to-point distance functions and geodetic offsets.

use crate::models::{Coord, DistanceMetric, GeoPoint};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Straight-line distance between two planar coordinates.
pub fn euclidean_distance(a: Coord, b: Coord) -> f64 {
    (b[0] - a[0]).hypot(b[1] - a[1])
}

/// Great-circle distance in meters on a spherical Earth.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let hav = |angle: f64| (angle / 2.0).sin().powi(2);
    let (phi_a, phi_b) = (a.lat.to_radians(), b.lat.to_radians());
    let h = hav(phi_b - phi_a) + phi_a.cos() * phi_b.cos() * hav((b.lon - a.lon).to_radians());
    2.0 * EARTH_RADIUS_M * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Distance between two coordinates under the given metric.
///
/// For [`DistanceMetric::Haversine`] the coordinates are `[lon, lat]`.
pub fn metric_distance(metric: DistanceMetric, a: Coord, b: Coord) -> f64 {
    match metric {
        DistanceMetric::Euclidean => euclidean_distance(a, b),
        DistanceMetric::Haversine => {
            haversine_distance(GeoPoint::new(a[1], a[0]), GeoPoint::new(b[1], b[0]))
        }
    }
}

/// Position reached from `origin` after moving `north_m` and `east_m` meters.
pub fn offset_position(origin: GeoPoint, north_m: f64, east_m: f64) -> GeoPoint {
    offset_by_bearing(
        origin,
        north_m.hypot(east_m),
        east_m.atan2(north_m).to_degrees(),
    )
}

/// Position reached from `origin` along a great circle.
///
/// `bearing_deg` is measured clockwise from north. The resulting longitude
/// is wrapped into `[-180, 180)`.
pub fn offset_by_bearing(origin: GeoPoint, distance_m: f64, bearing_deg: f64) -> GeoPoint {
    if distance_m.abs() <= f64::EPSILON {
        return origin;
    }

    let delta = distance_m / EARTH_RADIUS_M;
    let theta = bearing_deg.to_radians();
    let phi = origin.lat.to_radians();

    let sin_lat = phi.sin() * delta.cos() + phi.cos() * delta.sin() * theta.cos();
    let sin_lat = sin_lat.clamp(-1.0, 1.0);
    let d_lon = (theta.sin() * delta.sin() * phi.cos())
        .atan2(delta.cos() - phi.sin() * sin_lat);

    let lon = (origin.lon + d_lon.to_degrees() + 180.0).rem_euclid(360.0) - 180.0;
    GeoPoint::new(sin_lat.asin().to_degrees(), lon)
}
