use proptest::prelude::*;
use qibla::prelude::*;
use qibla::geo::haversine_km;

fn coordinates() -> impl Strategy<Value = GeoPoint> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| GeoPoint::new_unchecked(lat, lng))
}

proptest! {
    /// Invariant: bearing is normalized into [0, 360).
    #[test]
    fn bearing_in_range(observer in coordinates()) {
        let result = compute_qibla(observer);
        prop_assert!(result.bearing_degrees >= 0.0);
        prop_assert!(result.bearing_degrees < 360.0);
    }

    /// Invariant: distance is never negative and bearing is never NaN.
    #[test]
    fn no_negative_distance_or_nan(observer in coordinates()) {
        let result = compute_qibla(observer);
        prop_assert!(result.distance_km >= 0.0);
        prop_assert!(!result.bearing_degrees.is_nan());
    }

    /// Invariant: Haversine is symmetric in its arguments.
    #[test]
    fn haversine_symmetric(a in coordinates(), b in coordinates()) {
        let ab = haversine_km(a, b, EARTH_RADIUS_KM);
        let ba = haversine_km(b, a, EARTH_RADIUS_KM);
        prop_assert!((ab - ba).abs() < 1e-6, "{} vs {}", ab, ba);
    }

    /// Invariant: label agrees with the sector the bearing falls in.
    #[test]
    fn label_within_half_sector(bearing in 0.0f64..360.0) {
        let dir = compass_label(bearing);
        let diff = (bearing - dir.center_degrees()).rem_euclid(360.0);
        let diff = diff.min(360.0 - diff);
        prop_assert!(diff <= 22.5, "bearing {} labelled {:?}", bearing, dir);
    }

    /// Invariant: validated coordinates always yield a result.
    #[test]
    fn valid_coordinates_accepted(observer in coordinates()) {
        prop_assert!(qibla_for_coordinates(observer.latitude, observer.longitude).is_ok());
    }
}
