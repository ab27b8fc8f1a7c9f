//! Remote prayer timings.
//!
//! Fetches daily timings and the matching Hijri date from an Aladhan-compatible
//! API. Calculation happens on the remote side; this client only requests,
//! retries once, and decodes.

use chrono::{NaiveDate, NaiveTime};
use qibla_types::{GeoPoint, QiblaError};
use serde::Deserialize;
use std::time::Duration;

/// Public Aladhan API.
pub const DEFAULT_BASE_URL: &str = "https://api.aladhan.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Calculation method id; 3 is Muslim World League.
pub const DEFAULT_METHOD: u8 = 3;
pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Daily prayer times in the location's local time.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTimings {
    pub date: NaiveDate,
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
    pub hijri: HijriDay,
    /// IANA zone reported by the API, if any.
    pub timezone: Option<String>,
}

/// Hijri date as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HijriDay {
    pub day: u32,
    pub month: u32,
    pub month_name: String,
    pub year: i32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    data: ApiData,
}

#[derive(Debug, Deserialize)]
struct ApiData {
    timings: ApiTimings,
    date: ApiDate,
    meta: Option<ApiMeta>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiTimings {
    fajr: String,
    sunrise: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
}

#[derive(Debug, Deserialize)]
struct ApiDate {
    hijri: ApiHijri,
}

#[derive(Debug, Deserialize)]
struct ApiHijri {
    day: String,
    month: ApiHijriMonth,
    year: String,
}

#[derive(Debug, Deserialize)]
struct ApiHijriMonth {
    number: u32,
    en: String,
}

#[derive(Debug, Deserialize)]
struct ApiMeta {
    timezone: Option<String>,
}

/// HTTP client for the timings API.
#[derive(Debug, Clone)]
pub struct TimingsClient {
    http: reqwest::Client,
    base_url: String,
    method: u8,
    max_retries: u32,
}

impl TimingsClient {
    /// Client with default settings against `base_url`.
    ///
    /// # Errors
    /// `NetworkError` if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>) -> Result<Self, QiblaError> {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> TimingsClientBuilder {
        TimingsClientBuilder::default()
    }

    /// Fetches timings for `point` on `date`.
    ///
    /// Transport errors (including timeouts) and 5xx responses are retried up
    /// to `max_retries` times; 4xx responses and undecodable bodies are not.
    ///
    /// # Errors
    /// `NetworkError` once attempts are exhausted.
    pub async fn fetch_timings(
        &self,
        point: GeoPoint,
        date: NaiveDate,
    ) -> Result<DailyTimings, QiblaError> {
        let url = format!("{}/timings/{}", self.base_url, date.format("%d-%m-%Y"));
        let query = [
            ("latitude", point.latitude.to_string()),
            ("longitude", point.longitude.to_string()),
            ("method", self.method.to_string()),
        ];

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.request(&url, &query).await {
                Ok(body) => return decode(body, date),
                Err(Attempt::Fatal(e)) => return Err(e),
                Err(Attempt::Retryable(e)) if attempt <= self.max_retries => {
                    log::warn!("Timings request attempt {} failed, retrying: {}", attempt, e);
                }
                Err(Attempt::Retryable(e)) => return Err(e),
            }
        }
    }

    async fn request(&self, url: &str, query: &[(&str, String)]) -> Result<ApiResponse, Attempt> {
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                Attempt::Retryable(network_error(format!("Timings request failed: {}", e)))
            })?;

        let status = response.status();
        if status.is_server_error() {
            let message = format!("Timings API returned {}", status);
            return Err(Attempt::Retryable(network_error(message)));
        }
        if !status.is_success() {
            return Err(Attempt::Fatal(network_error(format!("Timings API returned {}", status))));
        }

        response
            .json::<ApiResponse>()
            .await
            .map_err(|e| {
                let message = format!("Failed to parse timings response: {}", e);
                Attempt::Fatal(network_error(message))
            })
    }
}

enum Attempt {
    Retryable(QiblaError),
    Fatal(QiblaError),
}

fn network_error(message: String) -> QiblaError {
    QiblaError::NetworkError(message)
}

fn decode(body: ApiResponse, date: NaiveDate) -> Result<DailyTimings, QiblaError> {
    let t = &body.data.timings;
    let hijri = &body.data.date.hijri;

    Ok(DailyTimings {
        date,
        fajr: parse_time("Fajr", &t.fajr)?,
        sunrise: parse_time("Sunrise", &t.sunrise)?,
        dhuhr: parse_time("Dhuhr", &t.dhuhr)?,
        asr: parse_time("Asr", &t.asr)?,
        maghrib: parse_time("Maghrib", &t.maghrib)?,
        isha: parse_time("Isha", &t.isha)?,
        hijri: HijriDay {
            day: parse_number("hijri day", &hijri.day)?,
            month: hijri.month.number,
            month_name: hijri.month.en.clone(),
            year: parse_number("hijri year", &hijri.year)?,
        },
        timezone: body.data.meta.and_then(|m| m.timezone),
    })
}

/// Parses `"HH:MM"`, ignoring a trailing zone annotation such as `" (WIB)"`.
fn parse_time(name: &str, value: &str) -> Result<NaiveTime, QiblaError> {
    let clock = value.split_whitespace().next().unwrap_or_default();
    NaiveTime::parse_from_str(clock, "%H:%M")
        .map_err(|e| network_error(format!("Invalid {} time '{}': {}", name, value, e)))
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, QiblaError> {
    value
        .trim()
        .parse()
        .map_err(|_| network_error(format!("Invalid {} '{}'", name, value)))
}

/// Builder for `TimingsClient`.
#[derive(Debug)]
pub struct TimingsClientBuilder {
    base_url: String,
    timeout: Duration,
    method: u8,
    max_retries: u32,
}

impl Default for TimingsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            method: DEFAULT_METHOD,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl TimingsClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn method(mut self, method: u8) -> Self {
        self.method = method;
        self
    }

    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// # Errors
    /// `NetworkError` if the HTTP client cannot be created.
    pub fn build(self) -> Result<TimingsClient, QiblaError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("qibla/", env!("CARGO_PKG_VERSION"), " (Qibla direction library)"))
            .timeout(self.timeout)
            .build()
            .map_err(|e| network_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(TimingsClient {
            http,
            base_url: self.base_url,
            method: self.method,
            max_retries: self.max_retries,
        })
    }
}
