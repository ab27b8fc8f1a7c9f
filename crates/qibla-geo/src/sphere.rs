//! Spherical-Earth primitives.
//!
//! Both functions take degrees and work in f64 radians internally with no
//! intermediate rounding.

use qibla_types::GeoPoint;

/// Below this magnitude both bearing components are treated as zero.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// Initial great-circle bearing from `from` toward `to`, in [0, 360).
///
/// Uses `atan2(sin Δλ, cos φ1 · tan φ2 − sin φ1 · cos Δλ)`, which equals the
/// usual `cos φ2`-scaled form for any `to` off the poles. A `to` at ±90°
/// latitude is not supported.
///
/// When the bearing is undefined (`from` coincides with `to` or sits at its
/// antipode) the result is `0.0`. The cut-off applies to the dimensionless
/// `atan2` components, so offsets below roughly 1e-10 degrees (a few
/// micrometres) from either point also report `0.0`.
pub fn initial_bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    let y = d_lng.sin();
    let x = lat1.cos() * lat2.tan() - lat1.sin() * d_lng.cos();

    if y.abs() < DEGENERATE_EPSILON && x.abs() < DEGENERATE_EPSILON {
        return 0.0;
    }

    normalize_degrees(y.atan2(x).to_degrees())
}

/// Folds an `atan2` result in (-180, 180] into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    (degrees + 360.0) % 360.0
}

/// Central angle between two points in radians (Haversine).
pub fn central_angle(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 near the antipode.
    let a = a.clamp(0.0, 1.0);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance in kilometres on a sphere of `radius_km`.
pub fn haversine_km(from: GeoPoint, to: GeoPoint, radius_km: f64) -> f64 {
    radius_km * central_angle(from, to)
}
