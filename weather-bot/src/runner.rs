//! Composition root: builds the cache, client, handlers, and chain, registers
//! the command menu, then runs the long-poll loop.

use std::sync::Arc;

use anyhow::Result;
use openweather_client::cache::SWEEP_INTERVAL;
use openweather_client::{OpenWeatherClient, WeatherCache};
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::handlers::{HelpHandler, WeatherHandler};
use crate::telegram::{register_commands, run_repl};

/// Main entry: validates config, initializes logging, wires the components,
/// and runs until the long-poll loop ends.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing()?;

    let cache = WeatherCache::new();
    let sweeper = cache.spawn_sweeper(SWEEP_INTERVAL);
    let client = Arc::new(OpenWeatherClient::new(
        config.weather_api_key.clone(),
        cache,
    ));

    let handler_chain = HandlerChain::new()
        .add_handler(Arc::new(HelpHandler::new()))
        .add_handler(Arc::new(WeatherHandler::new(client)));

    let bot = match &config.telegram_api_url {
        Some(url) => teloxide::Bot::new(config.telegram_token.clone())
            .set_api_url(reqwest::Url::parse(url)?),
        None => teloxide::Bot::new(config.telegram_token.clone()),
    };

    register_commands(&bot).await;
    info!("bot started");

    let result = run_repl(bot, handler_chain).await;
    sweeper.abort();
    result
}
