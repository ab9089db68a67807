//! # openweather-client
//!
//! OpenWeather current-weather client with a time-bucketed dedup cache and a
//! Russian-language report formatter. Transport-agnostic on the consumer side:
//! the bot crate owns the cache and client and wires them into its handlers.

pub mod cache;
pub mod client;
pub mod error;
pub mod format;
pub mod model;

pub use cache::WeatherCache;
pub use client::OpenWeatherClient;
pub use error::{Result, WeatherError};
pub use format::format_report;
pub use model::WeatherRecord;
