use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from qibla operations.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum QiblaError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    #[error("Invalid coordinate ({latitude}, {longitude}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Unknown country or city slug.
    #[error("Place not found: {}", place_label(.country, .city))]
    PlaceNotFound { country: String, city: Option<String> },

    /// Malformed or inconsistent catalog data.
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Remote API failure.
    #[error("Network error: {0}")]
    NetworkError(String),
}

fn place_label(country: &str, city: &Option<String>) -> String {
    match city {
        Some(city) => format!("{}/{}", country, city),
        None => country.to_string(),
    }
}

impl QiblaError {
    /// Creates an `InvalidCoordinate` error.
    pub fn invalid_coordinate(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinate { latitude, longitude }
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    /// Creates a `PlaceNotFound` error for a country or a city within it.
    pub fn place_not_found(country: impl Into<String>, city: Option<&str>) -> Self {
        Self::PlaceNotFound {
            country: country.into(),
            city: city.map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_not_found_message() {
        let err = QiblaError::place_not_found("egypt", Some("giza"));
        assert_eq!(err.to_string(), "Place not found: egypt/giza");
        let err = QiblaError::place_not_found("atlantis", None);
        assert_eq!(err.to_string(), "Place not found: atlantis");
    }
}
