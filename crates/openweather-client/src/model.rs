//! Domain model and the raw OpenWeather response shape.

use serde::{Deserialize, Serialize};

/// A single current-weather observation. Immutable once constructed; owned by
/// the caller that fetched it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Display name of the city as reported by the provider.
    pub city: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    /// Relative humidity, 0–100.
    pub humidity: u8,
    /// Primary condition description in the response language.
    pub description: String,
    /// Provider icon code, e.g. "01d". Empty when the provider sent no
    /// condition objects.
    pub icon: String,
    pub wind_speed_mps: f64,
    /// UTC observation timestamp, epoch seconds.
    pub observed_at: i64,
    /// Offset of the city's local time from UTC, in seconds.
    pub timezone_offset_secs: i64,
}

/// Raw body of the current-weather endpoint. Unknown fields are ignored;
/// missing required fields fail the decode as a whole.
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    pub name: String,
    pub dt: i64,
    pub timezone: i64,
    pub main: MainSection,
    #[serde(default)]
    pub weather: Vec<ConditionSection>,
    pub wind: WindSection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainSection {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConditionSection {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WindSection {
    pub speed: f64,
}

impl From<CurrentResponse> for WeatherRecord {
    fn from(raw: CurrentResponse) -> Self {
        let (description, icon) = raw
            .weather
            .into_iter()
            .next()
            .map(|c| (c.description, c.icon))
            .unwrap_or_default();

        Self {
            city: raw.name,
            temp_c: raw.main.temp,
            feels_like_c: raw.main.feels_like,
            humidity: raw.main.humidity,
            description,
            icon,
            wind_speed_mps: raw.wind.speed,
            observed_at: raw.dt,
            timezone_offset_secs: raw.timezone,
        }
    }
}
