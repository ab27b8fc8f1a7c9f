//! Python bindings for Qibla - Qibla direction engine

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use qibla_core::{Locale, PlaceCatalog, QiblaError, QiblaResult, describe, localize_bearing};

fn to_py_err(e: QiblaError) -> PyErr {
    match e {
        QiblaError::PlaceNotFound { .. } => PyKeyError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

/// Field set of the dict returned to Python; same fields as the wasm result.
#[derive(Debug, Clone, PartialEq)]
struct PyQiblaRecord {
    bearing_degrees: f64,
    distance_km: f64,
    compass: String,
    label: &'static str,
    summary: String,
    rtl: bool,
}

impl PyQiblaRecord {
    fn new(result: QiblaResult, locale: Locale) -> Self {
        Self {
            bearing_degrees: result.bearing_degrees,
            distance_km: result.distance_km,
            compass: format!("{:?}", result.compass),
            label: qibla_core::direction_name(locale, result.compass),
            summary: describe(&result, locale),
            rtl: locale.is_rtl(),
        }
    }

    fn into_dict(self, py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("bearing_degrees", self.bearing_degrees)?;
        dict.set_item("distance_km", self.distance_km)?;
        dict.set_item("compass", self.compass)?;
        dict.set_item("label", self.label)?;
        dict.set_item("summary", self.summary)?;
        dict.set_item("rtl", self.rtl)?;
        Ok(dict)
    }
}

fn coordinate_record(
    latitude: f64,
    longitude: f64,
    lang: &str,
) -> Result<PyQiblaRecord, QiblaError> {
    let locale: Locale = lang.parse()?;
    let result = qibla_core::qibla_for_coordinates(latitude, longitude)?;
    Ok(PyQiblaRecord::new(result, locale))
}

fn city_record(country: &str, city: &str, lang: &str) -> Result<PyQiblaRecord, QiblaError> {
    let locale: Locale = lang.parse()?;
    let catalog = PlaceCatalog::builtin()?;
    let result = qibla_core::qibla_for_place(catalog, country, city)?;
    Ok(PyQiblaRecord::new(result, locale))
}

fn bearing_label(bearing: f64, lang: &str) -> Result<&'static str, QiblaError> {
    let locale: Locale = lang.parse()?;
    Ok(localize_bearing(locale, bearing))
}

/// compute_qibla(latitude, longitude, lang="en") -> dict
///
/// Raises ValueError for out-of-range coordinates or an unknown language.
#[pyfunction]
#[pyo3(signature = (latitude, longitude, lang = "en"))]
fn compute_qibla(
    py: Python<'_>,
    latitude: f64,
    longitude: f64,
    lang: &str,
) -> PyResult<Py<PyDict>> {
    let record = coordinate_record(latitude, longitude, lang).map_err(to_py_err)?;
    Ok(record.into_dict(py)?.unbind())
}

/// city_qibla(country, city, lang="en") -> dict
///
/// Raises KeyError for an unknown country or city.
#[pyfunction]
#[pyo3(signature = (country, city, lang = "en"))]
fn city_qibla(py: Python<'_>, country: &str, city: &str, lang: &str) -> PyResult<Py<PyDict>> {
    let record = city_record(country, city, lang).map_err(to_py_err)?;
    Ok(record.into_dict(py)?.unbind())
}

/// compass_label(bearing, lang="en") -> str
#[pyfunction]
#[pyo3(signature = (bearing, lang = "en"))]
fn compass_label(bearing: f64, lang: &str) -> PyResult<&'static str> {
    bearing_label(bearing, lang).map_err(to_py_err)
}

#[pymodule]
fn qibla(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_qibla, m)?)?;
    m.add_function(wrap_pyfunction!(city_qibla, m)?)?;
    m.add_function(wrap_pyfunction!(compass_label, m)?)?;
    m.add("KAABA_LATITUDE", qibla_core::KAABA.latitude)?;
    m.add("KAABA_LONGITUDE", qibla_core::KAABA.longitude)?;
    Ok(())
}
