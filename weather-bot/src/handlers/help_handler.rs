//! Help handler: replies to /start and /help with the static command guide.

use async_trait::async_trait;

use crate::core::{Handler, HandlerResponse, Message, Outbound, Result};

const HELP_TEXT: &str = "🌍 *Привет, бро!* Я твой погодный гид по России! ☀️ \
Хочешь знать, брать ли зонт в Питере или шорты в Казани? \
Пиши город (например, Москва) или жми команды:\n\
/moscow — Погода в Москве\n\
/spb — Погода в Санкт-Петербурге\n\
/novosibirsk — Погода в Новосибирске\n\
/yekaterinburg — Погода в Екатеринбурге\n\
/kazan — Погода в Казани\n\
/anadyr — Погода в Анадыре\n\
/help — Показать это снова\n\
Лови вайб и погоду! 😎🚶‍♂️";

/// Replies with the help text on /start or /help; otherwise continues the
/// chain. Matching is against the normalized (trimmed, lowercased) text.
pub struct HelpHandler;

impl HelpHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelpHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let normalized = message.content.trim().to_lowercase();
        if normalized == "/start" || normalized == "/help" {
            return Ok(HandlerResponse::Reply(Outbound::markdown(HELP_TEXT)));
        }
        Ok(HandlerResponse::Continue)
    }
}
