//! Qibla direction engine - core logic.
//!
//! Ties the pure calculator to its coordinate sources (the place catalog or
//! caller-supplied coordinates) and to localized output.

pub use qibla_types as types;
pub use qibla_geo as geo;
pub use qibla_i18n as i18n;
pub use qibla_catalog as catalog;

#[cfg(feature = "async")]
pub use qibla_network as network;

pub use qibla_types::{
    CompassDirection, EARTH_RADIUS_KM, GeoPoint, KAABA, Locale, QiblaError, QiblaResult,
};
pub use qibla_geo::{QiblaConfig, QiblaConfigBuilder, compass_label, compute_qibla};
pub use qibla_i18n::{Localizer, TableLocalizer, direction_name, localize_bearing};
pub use qibla_catalog::{City, Country, PlaceCatalog};

pub mod prelude {
    pub use crate::types::*;
    pub use crate::{compass_label, compute_qibla, describe, qibla_for_coordinates, qibla_for_place};
    pub use crate::{Localizer, PlaceCatalog, QiblaConfig, TableLocalizer};
}

/// Qibla for a catalog city.
///
/// # Errors
/// `PlaceNotFound` if the country or city slug is unknown.
///
/// # Example
/// ```rust
/// use qibla_core::{PlaceCatalog, qibla_for_place};
///
/// let catalog = PlaceCatalog::builtin().unwrap();
/// let result = qibla_for_place(catalog, "united-kingdom", "london").unwrap();
/// assert_eq!(result.rounded_distance_km(), 4794);
/// ```
pub fn qibla_for_place(
    catalog: &PlaceCatalog,
    country: &str,
    city: &str,
) -> Result<QiblaResult, QiblaError> {
    let city = catalog.city(country, city)?;
    Ok(compute_qibla(city.point()))
}

/// Qibla for raw coordinates, e.g. from device geolocation.
///
/// # Errors
/// `InvalidCoordinate` if either value is out of range or not finite.
pub fn qibla_for_coordinates(latitude: f64, longitude: f64) -> Result<QiblaResult, QiblaError> {
    let observer = GeoPoint::new(latitude, longitude)?;
    Ok(compute_qibla(observer))
}

/// One-line summary in `locale`, e.g. `"119.0° South-East, 4794 km"`.
pub fn describe(result: &QiblaResult, locale: Locale) -> String {
    TableLocalizer::new(locale).format_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qibla_for_place() {
        let catalog = PlaceCatalog::builtin().unwrap();
        let jakarta = qibla_for_place(catalog, "indonesia", "jakarta").unwrap();
        assert_eq!(jakarta.compass, CompassDirection::NorthWest);
        assert_eq!(jakarta.rounded_distance_km(), 7920);
    }

    #[test]
    fn test_qibla_for_unknown_place() {
        let catalog = PlaceCatalog::builtin().unwrap();
        let err = qibla_for_place(catalog, "indonesia", "gotham").unwrap_err();
        assert!(matches!(err, QiblaError::PlaceNotFound { .. }));
    }

    #[test]
    fn test_makkah_city_is_target() {
        let catalog = PlaceCatalog::builtin().unwrap();
        let makkah = qibla_for_place(catalog, "saudi-arabia", "makkah").unwrap();
        assert_eq!(makkah.distance_km, 0.0);
        assert_eq!(makkah.bearing_degrees, 0.0);
    }

    #[test]
    fn test_coordinates_validated_at_boundary() {
        assert!(qibla_for_coordinates(51.5074, -0.1278).is_ok());
        assert_eq!(
            qibla_for_coordinates(100.0, 0.0).unwrap_err(),
            QiblaError::invalid_coordinate(100.0, 0.0)
        );
    }

    #[test]
    fn test_describe() {
        let london = qibla_for_coordinates(51.5074, -0.1278).unwrap();
        assert_eq!(describe(&london, Locale::En), "119.0° South-East, 4794 km");
        assert_eq!(describe(&london, Locale::Id), "119.0° Tenggara, 4794 km");
    }
}
