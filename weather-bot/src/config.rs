//! Bot configuration, loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

use crate::core::BotError;

/// Runtime configuration. Both secrets are required; their absence halts
/// startup.
#[derive(Debug)]
pub struct BotConfig {
    pub telegram_token: String,
    pub weather_api_key: String,
    /// Optional Telegram Bot API base URL override (tests point this at a
    /// mock server). Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
}

impl BotConfig {
    /// Loads from env. `token` overrides `TELEGRAM_BOT_TOKEN` when given.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram_token = match token {
            Some(t) => t,
            None => env::var("TELEGRAM_BOT_TOKEN")
                .context("TELEGRAM_BOT_TOKEN not set. Add it to .env or the environment")?,
        };
        let weather_api_key = env::var("OPENWEATHER_API_KEY")
            .context("OPENWEATHER_API_KEY not set. Add it to .env or the environment")?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            telegram_token,
            weather_api_key,
            telegram_api_url,
        })
    }

    /// Rejects blank secrets: an empty env var passes `load` but cannot work.
    pub fn validate(&self) -> crate::core::Result<()> {
        if self.telegram_token.trim().is_empty() {
            return Err(BotError::Config("TELEGRAM_BOT_TOKEN is empty".to_string()));
        }
        if self.weather_api_key.trim().is_empty() {
            return Err(BotError::Config("OPENWEATHER_API_KEY is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn load_reads_both_secrets_from_env() {
        env::set_var("TELEGRAM_BOT_TOKEN", "tg_token");
        env::set_var("OPENWEATHER_API_KEY", "ow_key");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELOXIDE_API_URL");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.telegram_token, "tg_token");
        assert_eq!(config.weather_api_key, "ow_key");
        assert!(config.telegram_api_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn load_fails_without_weather_api_key() {
        env::set_var("TELEGRAM_BOT_TOKEN", "tg_token");
        env::remove_var("OPENWEATHER_API_KEY");

        let err = BotConfig::load(None).unwrap_err();
        assert!(err.to_string().contains("OPENWEATHER_API_KEY"));
    }

    #[test]
    #[serial]
    fn load_fails_without_telegram_token() {
        env::remove_var("TELEGRAM_BOT_TOKEN");
        env::set_var("OPENWEATHER_API_KEY", "ow_key");

        let err = BotConfig::load(None).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    #[serial]
    fn explicit_token_overrides_env() {
        env::set_var("TELEGRAM_BOT_TOKEN", "env_token");
        env::set_var("OPENWEATHER_API_KEY", "ow_key");

        let config = BotConfig::load(Some("cli_token".to_string())).unwrap();
        assert_eq!(config.telegram_token, "cli_token");
    }

    #[test]
    #[serial]
    fn api_url_override_is_picked_up() {
        env::set_var("TELEGRAM_BOT_TOKEN", "tg_token");
        env::set_var("OPENWEATHER_API_KEY", "ow_key");
        env::remove_var("TELOXIDE_API_URL");
        env::set_var("TELEGRAM_API_URL", "http://127.0.0.1:8081");

        let config = BotConfig::load(None).unwrap();
        assert_eq!(
            config.telegram_api_url.as_deref(),
            Some("http://127.0.0.1:8081")
        );

        env::remove_var("TELEGRAM_API_URL");
    }

    #[test]
    #[serial]
    fn validate_rejects_blank_secrets() {
        let config = BotConfig {
            telegram_token: "  ".to_string(),
            weather_api_key: "ow_key".to_string(),
            telegram_api_url: None,
        };
        assert!(config.validate().is_err());

        let config = BotConfig {
            telegram_token: "tg_token".to_string(),
            weather_api_key: String::new(),
            telegram_api_url: None,
        };
        assert!(config.validate().is_err());
    }
}
