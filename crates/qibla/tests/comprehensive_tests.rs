use qibla::{
    CompassDirection, GeoPoint, KAABA, Locale, PlaceCatalog, QiblaConfig, QiblaError, compass_label,
    compute_qibla, describe, qibla_for_coordinates, qibla_for_place,
};

#[test]
fn test_self_bearing_convention() {
    let result = compute_qibla(GeoPoint::new_unchecked(21.4225, 39.8262));
    assert_eq!(result.distance_km, 0.0);
    assert_eq!(result.bearing_degrees, 0.0);
    assert_eq!(result.compass, CompassDirection::North);
}

#[test]
fn test_london_regression() {
    let result = compute_qibla(GeoPoint::new(51.5074, -0.1278).unwrap());
    assert!((result.bearing_degrees - 118.99).abs() < 0.1, "bearing {}", result.bearing_degrees);
    assert!((result.distance_km - 4794.0).abs() < 1.0, "distance {}", result.distance_km);
}

#[test]
fn test_jakarta_points_west_north_west() {
    let result = compute_qibla(GeoPoint::new(-6.2088, 106.8456).unwrap());
    assert!(result.bearing_degrees > 280.0 && result.bearing_degrees < 300.0);
    assert!(result.distance_km > 7000.0);
}

#[test]
fn test_close_to_makkah() {
    let result = compute_qibla(GeoPoint::new(21.5, 39.8).unwrap());
    assert!(result.distance_km < 15.0);
    assert!(result.distance_km > 0.0);
}

#[test]
fn test_distance_symmetry_with_swapped_roles() {
    let london = GeoPoint::new_unchecked(51.5074, -0.1278);
    let toward_kaaba = compute_qibla(london);
    let from_kaaba = QiblaConfig::builder().target(london).build().unwrap().compute(KAABA);
    assert!((toward_kaaba.distance_km - from_kaaba.distance_km).abs() < 1e-9);
}

#[test]
fn test_every_midpoint_boundary() {
    let expected = [
        (22.5, CompassDirection::NorthEast),
        (67.5, CompassDirection::East),
        (112.5, CompassDirection::SouthEast),
        (157.5, CompassDirection::South),
        (202.5, CompassDirection::SouthWest),
        (247.5, CompassDirection::West),
        (292.5, CompassDirection::NorthWest),
        (337.5, CompassDirection::North),
    ];
    for (bearing, direction) in expected {
        assert_eq!(compass_label(bearing), direction, "bearing {}", bearing);
    }
}

#[test]
fn test_every_catalog_city_has_a_qibla() {
    let catalog = PlaceCatalog::builtin().unwrap();
    for (country, city) in catalog.places() {
        let result = qibla_for_place(catalog, &country.slug, &city.slug).unwrap();
        assert!((0.0..360.0).contains(&result.bearing_degrees), "{}/{}", country.slug, city.slug);
        assert!(result.distance_km >= 0.0);
    }
}

#[test]
fn test_known_cities() {
    let catalog = PlaceCatalog::builtin().unwrap();

    let cairo = qibla_for_place(catalog, "egypt", "cairo").unwrap();
    assert_eq!(cairo.compass, CompassDirection::SouthEast);

    let casablanca = qibla_for_place(catalog, "morocco", "casablanca").unwrap();
    assert_eq!(casablanca.compass, CompassDirection::East);

    let karachi = qibla_for_place(catalog, "pakistan", "karachi").unwrap();
    assert_eq!(karachi.compass, CompassDirection::West);

    let new_york = qibla_for_place(catalog, "united-states", "new-york").unwrap();
    assert_eq!(new_york.compass, CompassDirection::NorthEast);
}

#[test]
fn test_invalid_geolocation_rejected() {
    assert!(matches!(
        qibla_for_coordinates(-91.0, 10.0),
        Err(QiblaError::InvalidCoordinate { .. })
    ));
    assert!(qibla_for_coordinates(0.0, f64::NAN).is_err());
}

#[test]
fn test_localized_description() {
    let catalog = PlaceCatalog::builtin().unwrap();
    let paris = qibla_for_place(catalog, "france", "paris").unwrap();
    let text = describe(&paris, Locale::Fr);
    assert!(text.contains("Sud-Est"), "{}", text);
    assert!(text.ends_with(&format!("{} km", paris.rounded_distance_km())));
}
