//! HTTP client for the OpenWeather current-weather endpoint.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use tracing::debug;

use crate::cache::{WeatherCache, ENTRY_TTL};
use crate::error::{Result, WeatherError};
use crate::model::{CurrentResponse, WeatherRecord};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
/// Country qualifier appended to every city query.
const COUNTRY_SUFFIX: &str = "RU";
/// Response language for condition descriptions.
const RESPONSE_LANG: &str = "ru";
/// Bound on a single upstream request. Dropping the in-flight future cancels
/// the call, so the caller's per-message scope propagates naturally.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Client for current weather, deduplicating upstream calls through the
/// injected [`WeatherCache`]. Stateless per call; cheap to clone.
#[derive(Clone)]
pub struct OpenWeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
    cache: WeatherCache,
}

impl OpenWeatherClient {
    /// Builds a client against the production OpenWeather endpoint.
    pub fn new(api_key: String, cache: WeatherCache) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string(), cache)
    }

    /// Builds a client with a custom base URL (tests point this at a mock
    /// server).
    pub fn with_base_url(api_key: String, base_url: String, cache: WeatherCache) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url,
            cache,
        }
    }

    /// Fetches the current weather for `city`.
    ///
    /// Checks the bucketed cache first; at most one upstream call is issued
    /// per city per bucket. Only successful fetches populate the cache.
    ///
    /// # Errors
    ///
    /// [`WeatherError::EmptyCity`] for blank input (before any lookup or
    /// network I/O), [`WeatherError::Transport`] for network or timeout
    /// failures, [`WeatherError::UpstreamStatus`] for non-2xx responses,
    /// [`WeatherError::Decode`] for malformed bodies, and
    /// [`WeatherError::NotFound`] when the decoded body names no city.
    pub async fn current_weather(&self, city: &str) -> Result<WeatherRecord> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        let key = WeatherCache::bucket_key(city, Utc::now().timestamp());
        if let Some(record) = self.cache.get(&key).await {
            debug!(city, "cache hit");
            return Ok(record);
        }
        debug!(city, "cache miss, querying upstream");

        let url = format!("{}/data/2.5/weather", self.base_url);
        let query = format!("{city},{COUNTRY_SUFFIX}");
        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", RESPONSE_LANG),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let raw: CurrentResponse = serde_json::from_str(&body)?;
        if raw.name.trim().is_empty() {
            return Err(WeatherError::NotFound(city.to_string()));
        }

        let record = WeatherRecord::from(raw);
        self.cache.set(key, record.clone(), ENTRY_TTL).await;
        Ok(record)
    }
}
