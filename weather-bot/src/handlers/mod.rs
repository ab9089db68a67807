//! Handler implementations: help short-circuit and the weather reply.

mod help_handler;
mod weather_handler;

pub use help_handler::HelpHandler;
pub use weather_handler::WeatherHandler;
