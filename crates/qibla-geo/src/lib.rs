//! Great-circle bearing and distance toward the Kaaba.
//!
//! Everything here is a pure function over `Copy` values and may be called
//! from any number of threads.

pub mod compass;
pub mod qibla;
pub mod sphere;

pub use compass::{compass_label, sector_index};
pub use qibla::{QiblaConfig, QiblaConfigBuilder, compute_qibla};
pub use sphere::{central_angle, haversine_km, initial_bearing};
