//! Transport-agnostic core: message types, the Handler and Bot traits, error
//! taxonomy, tracing initialization, and the retry utility.

pub mod bot;
pub mod error;
pub mod logger;
pub mod retry;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use retry::retry_with_backoff;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, Outbound, ToCoreMessage,
    ToCoreUser, User,
};
