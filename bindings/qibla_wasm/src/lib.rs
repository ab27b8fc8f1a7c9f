//! WASM bindings for Qibla - Qibla direction engine
//!
//! Exposes the calculator to browser code that obtains coordinates from the
//! Geolocation API or from the built-in city catalog.

use qibla_core::{Locale, PlaceCatalog, QiblaError, QiblaResult, describe, localize_bearing};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Computes the Qibla for device coordinates.
///
/// # Example (JavaScript)
/// ```js
/// navigator.geolocation.getCurrentPosition(({ coords }) => {
///   const q = computeQibla(coords.latitude, coords.longitude, "ar");
///   console.log(q.bearingDegrees, q.label);
/// });
/// ```
#[wasm_bindgen(js_name = computeQibla)]
pub fn compute_qibla(
    latitude: f64,
    longitude: f64,
    lang: Option<String>,
) -> Result<JsValue, JsValue> {
    let locale = parse_locale(lang.as_deref()).map_err(to_js)?;
    let result = qibla_core::qibla_for_coordinates(latitude, longitude).map_err(to_js)?;
    to_value(WasmQiblaResult::new(result, locale))
}

/// Computes the Qibla for a catalog city, e.g. `cityQibla("egypt", "cairo")`.
#[wasm_bindgen(js_name = cityQibla)]
pub fn city_qibla(country: &str, city: &str, lang: Option<String>) -> Result<JsValue, JsValue> {
    to_value(city_result(country, city, lang.as_deref()).map_err(to_js)?)
}

/// Localized compass label for a bearing in degrees.
#[wasm_bindgen(js_name = compassLabel)]
pub fn compass_label(bearing: f64, lang: Option<String>) -> Result<String, JsValue> {
    let locale = parse_locale(lang.as_deref()).map_err(to_js)?;
    Ok(localize_bearing(locale, bearing).to_string())
}

/// WASM-friendly representation of QiblaResult for TypeScript generation.
#[derive(Debug, Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmQiblaResult {
    pub bearing_degrees: f64,
    pub distance_km: f64,
    pub compass: String,
    pub label: String,
    pub summary: String,
    /// Whether `label` and `summary` are in a right-to-left script.
    pub rtl: bool,
}

impl WasmQiblaResult {
    fn new(result: QiblaResult, locale: Locale) -> Self {
        Self {
            bearing_degrees: result.bearing_degrees,
            distance_km: result.distance_km,
            compass: format!("{:?}", result.compass),
            label: qibla_core::direction_name(locale, result.compass).to_string(),
            summary: describe(&result, locale),
            rtl: locale.is_rtl(),
        }
    }
}

fn city_result(
    country: &str,
    city: &str,
    lang: Option<&str>,
) -> Result<WasmQiblaResult, QiblaError> {
    let locale = parse_locale(lang)?;
    let catalog = PlaceCatalog::builtin()?;
    let result = qibla_core::qibla_for_place(catalog, country, city)?;
    Ok(WasmQiblaResult::new(result, locale))
}

fn parse_locale(lang: Option<&str>) -> Result<Locale, QiblaError> {
    lang.map_or(Ok(Locale::default()), str::parse)
}

fn to_value(result: WasmQiblaResult) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js(e: QiblaError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
