//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for the bot (transport, configuration). Handlers surface
/// weather failures to the user as replies rather than propagating them, so
/// the taxonomy here covers only infrastructure faults.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("config error: {0}")]
    Config(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
