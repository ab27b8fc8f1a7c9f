//! Network module for remote data fetching.
//!
//! Provides the prayer timings API client.
//! This module is gated behind the `async` feature.

#[cfg(feature = "async")]
pub mod timings;

#[cfg(feature = "async")]
pub use timings::{DailyTimings, HijriDay, TimingsClient, TimingsClientBuilder};
