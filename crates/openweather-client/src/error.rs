//! Error types for the weather client.
//!
//! [`WeatherError`] covers the full fetch path: input validation, transport,
//! upstream status, body decoding, and city resolution. Display strings are the
//! Russian user-facing causes shown in bot replies.

use thiserror::Error;

/// Failure modes of a weather fetch. Never cached; a transient upstream error
/// does not poison later lookups in the same time bucket.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("название города не может быть пустым")]
    EmptyCity,

    #[error("ошибка HTTP-запроса: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("ошибка API: {0}")]
    UpstreamStatus(u16),

    #[error("ошибка парсинга JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("город не найден: {0}")]
    NotFound(String),
}

/// Result type for weather operations; uses [`WeatherError`].
pub type Result<T> = std::result::Result<T, WeatherError>;
