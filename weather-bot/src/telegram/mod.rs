//! Telegram framework layer: adapters, Bot implementation, command menu
//! registration, and the long-poll runner.

mod adapters;
mod bot_adapter;
mod commands;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use commands::{command_menu, register_commands};
pub use runner::run_repl;
