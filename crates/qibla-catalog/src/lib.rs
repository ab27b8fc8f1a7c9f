//! Static country/city catalog.
//!
//! The catalog is read-only reference data: it is parsed and validated once,
//! then shared. [`PlaceCatalog::builtin`] returns the embedded dataset.

use qibla_types::{GeoPoint, QiblaError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

const BUILTIN_JSON: &str = include_str!("../data/places.json");

/// A city with its coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub slug: String,
    pub name: String,
    /// Name in the catalog's secondary language.
    pub localized_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new_unchecked(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub slug: String,
    pub name: String,
    pub localized_name: String,
    pub cities: Vec<City>,
}

impl Country {
    /// Finds a city in this country by slug (case-insensitive).
    pub fn city(&self, slug: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.slug.eq_ignore_ascii_case(slug))
    }
}

/// Validated, immutable set of countries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCatalog {
    countries: Vec<Country>,
}

impl PlaceCatalog {
    /// Parses and validates a catalog.
    ///
    /// # Errors
    /// `CatalogError` on malformed JSON, out-of-range coordinates, empty or
    /// duplicate slugs.
    pub fn from_json(json: &str) -> Result<Self, QiblaError> {
        let catalog: PlaceCatalog = serde_json::from_str(json)
            .map_err(|e| QiblaError::CatalogError(format!("Failed to parse catalog: {}", e)))?;
        catalog.validate()?;

        log::debug!(
            "Loaded place catalog: {} countries, {} cities",
            catalog.countries.len(),
            catalog.city_count()
        );
        Ok(catalog)
    }

    /// Builds a catalog from already constructed countries.
    pub fn from_countries(countries: Vec<Country>) -> Result<Self, QiblaError> {
        let catalog = Self { countries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The embedded dataset, parsed on first use.
    ///
    /// # Errors
    /// Only if the embedded JSON is broken; the error is cached.
    pub fn builtin() -> Result<&'static PlaceCatalog, QiblaError> {
        static BUILTIN: OnceLock<Result<PlaceCatalog, QiblaError>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| PlaceCatalog::from_json(BUILTIN_JSON))
            .as_ref()
            .map_err(Clone::clone)
    }

    fn validate(&self) -> Result<(), QiblaError> {
        let mut country_slugs = HashSet::new();

        for country in &self.countries {
            if country.slug.is_empty() {
                return Err(reject(format!("Country '{}' has an empty slug", country.name)));
            }
            if !country_slugs.insert(country.slug.to_ascii_lowercase()) {
                return Err(reject(format!("Duplicate country slug '{}'", country.slug)));
            }

            let mut city_slugs = HashSet::new();
            for city in &country.cities {
                if city.slug.is_empty() {
                    return Err(reject(format!(
                        "City '{}' in {} has an empty slug",
                        city.name, country.slug
                    )));
                }
                if !city_slugs.insert(city.slug.to_ascii_lowercase()) {
                    return Err(reject(format!(
                        "Duplicate city slug '{}/{}'",
                        country.slug, city.slug
                    )));
                }
                if !city.point().is_valid() {
                    return Err(reject(format!(
                        "City '{}/{}' has invalid coordinates {}",
                        country.slug, city.slug, city.point()
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn city_count(&self) -> usize {
        self.countries.iter().map(|c| c.cities.len()).sum()
    }

    /// # Errors
    /// `PlaceNotFound` for an unknown slug.
    pub fn country(&self, slug: &str) -> Result<&Country, QiblaError> {
        self.countries
            .iter()
            .find(|c| c.slug.eq_ignore_ascii_case(slug))
            .ok_or_else(|| QiblaError::place_not_found(slug, None))
    }

    /// # Errors
    /// `PlaceNotFound` for an unknown country or city.
    pub fn city(&self, country_slug: &str, city_slug: &str) -> Result<&City, QiblaError> {
        self.country(country_slug)?
            .city(city_slug)
            .ok_or_else(|| QiblaError::place_not_found(country_slug, Some(city_slug)))
    }

    /// First city with this slug in any country, along with its country.
    pub fn find_city(&self, city_slug: &str) -> Option<(&Country, &City)> {
        self.countries
            .iter()
            .find_map(|country| country.city(city_slug).map(|city| (country, city)))
    }

    /// Every (country, city) pair, in catalog order.
    pub fn places(&self) -> impl Iterator<Item = (&Country, &City)> {
        self.countries
            .iter()
            .flat_map(|country| country.cities.iter().map(move |city| (country, city)))
    }
}

fn reject(reason: String) -> QiblaError {
    log::warn!("Rejecting place catalog: {}", reason);
    QiblaError::CatalogError(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(slug: &str, latitude: f64, longitude: f64) -> City {
        City {
            slug: slug.to_string(),
            name: slug.to_string(),
            localized_name: slug.to_string(),
            latitude,
            longitude,
        }
    }

    fn country(slug: &str, cities: Vec<City>) -> Country {
        Country {
            slug: slug.to_string(),
            name: slug.to_string(),
            localized_name: slug.to_string(),
            cities,
        }
    }

    #[test]
    fn test_builtin_loads() {
        let catalog = PlaceCatalog::builtin().unwrap();
        assert!(catalog.countries().len() >= 10);
        assert!(catalog.city_count() >= catalog.countries().len());
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = PlaceCatalog::builtin().unwrap();
        let b = PlaceCatalog::builtin().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_city_lookup() {
        let catalog = PlaceCatalog::builtin().unwrap();
        let london = catalog.city("united-kingdom", "london").unwrap();
        assert_eq!(london.name, "London");
        assert_eq!(london.point(), GeoPoint::new_unchecked(51.5074, -0.1278));

        let makkah = catalog.city("Saudi-Arabia", "MAKKAH").unwrap();
        assert_eq!(makkah.latitude, 21.4225);
    }

    #[test]
    fn test_missing_places() {
        let catalog = PlaceCatalog::builtin().unwrap();
        assert_eq!(
            catalog.country("atlantis").unwrap_err(),
            QiblaError::place_not_found("atlantis", None)
        );
        assert_eq!(
            catalog.city("egypt", "giza").unwrap_err(),
            QiblaError::place_not_found("egypt", Some("giza"))
        );
    }

    #[test]
    fn test_find_city_across_countries() {
        let catalog = PlaceCatalog::builtin().unwrap();
        let (country, city) = catalog.find_city("jakarta").unwrap();
        assert_eq!(country.slug, "indonesia");
        assert_eq!(city.slug, "jakarta");
        assert!(catalog.find_city("gotham").is_none());
    }

    #[test]
    fn test_places_iterates_every_city() {
        let catalog = PlaceCatalog::builtin().unwrap();
        assert_eq!(catalog.places().count(), catalog.city_count());
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = PlaceCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, QiblaError::CatalogError(_)));
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let bad = country("nowhere", vec![city("x", 95.0, 0.0)]);
        let result = PlaceCatalog::from_countries(vec![bad]);
        assert!(matches!(result, Err(QiblaError::CatalogError(_))));
    }

    #[test]
    fn test_rejects_duplicate_slugs() {
        let dup_country = PlaceCatalog::from_countries(vec![
            country("egypt", vec![]),
            country("Egypt", vec![]),
        ]);
        assert!(dup_country.is_err());

        let dup_city = PlaceCatalog::from_countries(vec![country(
            "egypt",
            vec![city("cairo", 30.0, 31.0), city("cairo", 30.1, 31.1)],
        )]);
        assert!(dup_city.is_err());
    }

    #[test]
    fn test_from_json_minimal() {
        let json = r#"{
            "countries": [{
                "slug": "tunisia",
                "name": "Tunisia",
                "localized_name": "تونس",
                "cities": [{
                    "slug": "tunis",
                    "name": "Tunis",
                    "localized_name": "تونس",
                    "latitude": 36.8065,
                    "longitude": 10.1815
                }]
            }]
        }"#;
        let catalog = PlaceCatalog::from_json(json).unwrap();
        assert_eq!(catalog.city("tunisia", "tunis").unwrap().longitude, 10.1815);
    }
}
