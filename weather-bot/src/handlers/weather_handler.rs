//! Weather handler: resolves city aliases, fetches current weather, formats
//! the reply. Terminal handler of the chain; always replies.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use openweather_client::{format_report, OpenWeatherClient};
use tracing::{info, warn};

use crate::core::{Handler, HandlerResponse, Message, Outbound, Result};

/// Maps the fixed command tokens to canonical city names. Built once at
/// startup; never mutated afterwards.
fn city_aliases() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("/moscow", "Москва"),
        ("/spb", "Санкт-Петербург"),
        ("/novosibirsk", "Новосибирск"),
        ("/yekaterinburg", "Екатеринбург"),
        ("/kazan", "Казань"),
        ("/anadyr", "Анадырь"),
    ])
}

/// Fetches and formats weather for the requested city. Failures become plain
/// error replies carrying the cause; no retry at this layer, the user may
/// retry by re-sending.
pub struct WeatherHandler {
    client: Arc<OpenWeatherClient>,
    aliases: HashMap<&'static str, &'static str>,
}

impl WeatherHandler {
    pub fn new(client: Arc<OpenWeatherClient>) -> Self {
        Self {
            client,
            aliases: city_aliases(),
        }
    }

    /// Alias matching uses the normalized token; free text keeps the user's
    /// original casing.
    fn resolve_city<'a>(&'a self, raw: &'a str) -> &'a str {
        let normalized = raw.trim().to_lowercase();
        match self.aliases.get(normalized.as_str()).copied() {
            Some(canonical) => canonical,
            None => raw.trim(),
        }
    }
}

#[async_trait]
impl Handler for WeatherHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let city = self.resolve_city(&message.content);
        match self.client.current_weather(city).await {
            Ok(record) => {
                info!(chat_id = message.chat.id, city = %record.city, "weather fetched");
                Ok(HandlerResponse::Reply(Outbound::markdown(format_report(
                    &record,
                ))))
            }
            Err(err) => {
                warn!(chat_id = message.chat.id, city = %city, error = %err, "weather fetch failed");
                Ok(HandlerResponse::Reply(Outbound::plain(format!(
                    "❌ Ошибка: {err}"
                ))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openweather_client::WeatherCache;

    fn handler() -> WeatherHandler {
        let cache = WeatherCache::new();
        WeatherHandler::new(Arc::new(OpenWeatherClient::with_base_url(
            "key".to_string(),
            "http://127.0.0.1:1".to_string(),
            cache,
        )))
    }

    #[test]
    fn aliases_resolve_to_canonical_names() {
        let h = handler();
        assert_eq!(h.resolve_city("/spb"), "Санкт-Петербург");
        assert_eq!(h.resolve_city(" /MOSCOW "), "Москва");
        assert_eq!(h.resolve_city("/anadyr"), "Анадырь");
    }

    #[test]
    fn free_text_keeps_original_casing() {
        let h = handler();
        assert_eq!(h.resolve_city("ВоРоНеЖ"), "ВоРоНеЖ");
        assert_eq!(h.resolve_city("  Казань  "), "Казань");
    }
}
