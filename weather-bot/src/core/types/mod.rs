//! Core types: user, chat, message, handler response, and the Handler trait.

mod chat;
mod handler;
mod message;
mod response;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::{Message, MessageDirection};
pub use response::{HandlerResponse, Outbound};
pub use user::User;
