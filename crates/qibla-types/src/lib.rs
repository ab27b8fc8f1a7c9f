//! Core types shared across the `qibla` crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod error;

pub use error::QiblaError;

/// Latitude bounds in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
/// Longitude bounds in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Location of the Kaaba in Makkah.
pub const KAABA: GeoPoint = GeoPoint::new_unchecked(21.4225, 39.8262);

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
///
/// Latitude must lie in [-90, 90] and longitude in [-180, 180]. Use
/// [`GeoPoint::new`] at trust boundaries; [`GeoPoint::new_unchecked`] is for
/// constants and data that was already validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a validated point.
    ///
    /// # Errors
    /// Returns `QiblaError::InvalidCoordinate` for NaN or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, QiblaError> {
        let point = Self { latitude, longitude };
        if point.is_valid() {
            Ok(point)
        } else {
            Err(QiblaError::invalid_coordinate(latitude, longitude))
        }
    }

    /// Creates a point without range checks.
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// True when both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        (LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&self.latitude)
            && (LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.latitude, self.longitude)
    }
}

/// The eight principal compass points, clockwise from North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassDirection {
    /// All directions in index order.
    pub const ALL: [CompassDirection; 8] = [
        CompassDirection::North,
        CompassDirection::NorthEast,
        CompassDirection::East,
        CompassDirection::SouthEast,
        CompassDirection::South,
        CompassDirection::SouthWest,
        CompassDirection::West,
        CompassDirection::NorthWest,
    ];

    /// Position in [`CompassDirection::ALL`], 0 = North.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index; wraps modulo 8.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 8]
    }

    /// Central bearing of this sector in degrees.
    pub fn center_degrees(self) -> f64 {
        self.index() as f64 * 45.0
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompassDirection::North => "North",
            CompassDirection::NorthEast => "North-East",
            CompassDirection::East => "East",
            CompassDirection::SouthEast => "South-East",
            CompassDirection::South => "South",
            CompassDirection::SouthWest => "South-West",
            CompassDirection::West => "West",
            CompassDirection::NorthWest => "North-West",
        };
        write!(f, "{}", s)
    }
}

/// Languages with a direction label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    En,
    Ar,
    Fr,
    Id,
    Tr,
    Ur,
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl Locale {
    pub const ALL: [Locale; 6] = [
        Locale::En,
        Locale::Ar,
        Locale::Fr,
        Locale::Id,
        Locale::Tr,
        Locale::Ur,
    ];

    /// BCP 47 primary language subtag.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
            Locale::Fr => "fr",
            Locale::Id => "id",
            Locale::Tr => "tr",
            Locale::Ur => "ur",
        }
    }

    /// Right-to-left script.
    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar | Locale::Ur)
    }
}

impl FromStr for Locale {
    type Err = QiblaError;

    /// Parses a language tag such as `"ar"` or `"en-GB"`; only the primary
    /// subtag is considered.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        Locale::ALL
            .into_iter()
            .find(|l| l.code() == primary)
            .ok_or_else(|| QiblaError::invalid_config(format!("Unsupported locale '{}'", tag)))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Direction and distance from an observer to the Qibla target.
///
/// Always recomputed; values keep full precision and are rounded only by the
/// display helpers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QiblaResult {
    /// Initial great-circle bearing, clockwise from true North, in [0, 360).
    pub bearing_degrees: f64,
    /// Great-circle distance in kilometres, never negative.
    pub distance_km: f64,
    pub compass: CompassDirection,
}

impl QiblaResult {
    /// Distance rounded to the nearest whole kilometre (half away from zero).
    pub fn rounded_distance_km(&self) -> u64 {
        self.distance_km.round() as u64
    }

    /// Bearing with one decimal place, e.g. `"119.0"`.
    pub fn display_bearing(&self) -> String {
        format!("{:.1}", self.bearing_degrees)
    }
}

impl fmt::Display for QiblaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {}, {} km",
            self.display_bearing(),
            self.compass,
            self.rounded_distance_km()
        )
    }
}
