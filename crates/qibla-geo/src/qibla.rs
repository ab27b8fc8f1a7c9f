//! Qibla direction toward a configurable target.

use qibla_types::{EARTH_RADIUS_KM, GeoPoint, KAABA, QiblaError, QiblaResult};
use serde::{Deserialize, Serialize};

use crate::compass::compass_label;
use crate::sphere::{haversine_km, initial_bearing};

/// Target and sphere used for Qibla computations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QiblaConfig {
    pub target: GeoPoint,
    pub earth_radius_km: f64,
}

impl Default for QiblaConfig {
    fn default() -> Self {
        Self {
            target: KAABA,
            earth_radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl QiblaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> QiblaConfigBuilder {
        QiblaConfigBuilder::default()
    }

    /// Bearing, distance and compass label from `observer` to the target.
    ///
    /// Total over f64: out-of-range coordinates give unspecified values but
    /// never panic. Close to the target the bearing swings widely for small
    /// moves of the observer.
    pub fn compute(&self, observer: GeoPoint) -> QiblaResult {
        let bearing_degrees = initial_bearing(observer, self.target);
        let distance_km = haversine_km(observer, self.target, self.earth_radius_km);

        QiblaResult {
            bearing_degrees,
            distance_km,
            compass: compass_label(bearing_degrees),
        }
    }
}

/// Builder with validation for `QiblaConfig`.
#[derive(Debug, Default)]
pub struct QiblaConfigBuilder {
    target: Option<GeoPoint>,
    earth_radius_km: Option<f64>,
}

impl QiblaConfigBuilder {
    pub fn target(mut self, target: GeoPoint) -> Self {
        self.target = Some(target);
        self
    }

    pub fn earth_radius_km(mut self, radius: f64) -> Self {
        self.earth_radius_km = Some(radius);
        self
    }

    /// Builds and validates.
    ///
    /// # Errors
    /// `InvalidConfiguration` if the target is out of range or on a pole, or
    /// the radius is not a positive finite number.
    pub fn build(self) -> Result<QiblaConfig, QiblaError> {
        let target = self.target.unwrap_or(KAABA);
        let earth_radius_km = self.earth_radius_km.unwrap_or(EARTH_RADIUS_KM);

        if !target.is_valid() {
            return Err(QiblaError::invalid_config(format!("Target {} is out of range", target)));
        }
        if target.latitude.abs() == 90.0 {
            return Err(QiblaError::invalid_config("Target cannot be on a pole"));
        }
        if !earth_radius_km.is_finite() || earth_radius_km <= 0.0 {
            return Err(QiblaError::invalid_config(format!(
                "Earth radius must be positive, got {}", earth_radius_km
            )));
        }

        Ok(QiblaConfig { target, earth_radius_km })
    }
}

/// Qibla from `observer` using the Kaaba and a 6371 km sphere.
///
/// # Example
/// ```rust
/// use qibla_geo::compute_qibla;
/// use qibla_types::GeoPoint;
///
/// let london = GeoPoint::new(51.5074, -0.1278).unwrap();
/// let result = compute_qibla(london);
/// assert_eq!(result.display_bearing(), "119.0");
/// assert_eq!(result.rounded_distance_km(), 4794);
/// ```
pub fn compute_qibla(observer: GeoPoint) -> QiblaResult {
    QiblaConfig::default().compute(observer)
}
