//! # Qibla
//!
//! Qibla direction, great-circle distance and compass labels toward the Kaaba.
//!
//! This crate is a facade that re-exports functionality from the `qibla` ecosystem.
//!
//! ## Modules
//!
//! - `types`: Core types (GeoPoint, QiblaResult, CompassDirection, Locale)
//! - `geo`: Bearing and Haversine distance
//! - `i18n`: Localized direction names
//! - `catalog`: Built-in country/city coordinates
//! - `network`: Prayer timings API client (optional)
//!
//! ## Usage
//!
//! ```rust
//! use qibla::prelude::*;
//!
//! let jakarta = GeoPoint::new(-6.2088, 106.8456).unwrap();
//! let result = compute_qibla(jakarta);
//! assert_eq!(result.compass, CompassDirection::NorthWest);
//! ```

pub use qibla_core::*;
