//! # weather-bot
//!
//! Telegram bot that reports current weather for Russian cities via
//! OpenWeather. The core module (message types, `Handler`, `Bot`) is
//! transport-agnostic; the telegram module adapts teloxide to it. Weather
//! fetching, caching, and report formatting live in the `openweather-client`
//! crate and are wired in here.

pub mod chain;
pub mod cli;
pub mod config;
pub mod core;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use chain::HandlerChain;
pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use core::{
    init_tracing, retry_with_backoff, Bot, BotError, Chat, Handler, HandlerResponse, Message,
    MessageDirection, Outbound, Result, ToCoreMessage, ToCoreUser, User,
};
pub use handlers::{HelpHandler, WeatherHandler};
pub use runner::run_bot;
pub use telegram::{
    command_menu, register_commands, run_repl, TelegramBotAdapter, TelegramMessageWrapper,
    TelegramUserWrapper,
};
