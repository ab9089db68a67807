//! Startup registration of the bot command menu.

use std::time::Duration;

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{info, warn};

use crate::core::retry_with_backoff;

const REGISTER_ATTEMPTS: u32 = 3;
const REGISTER_BASE_DELAY: Duration = Duration::from_secs(2);

/// The fixed command menu. Mirrors the help text and the alias table.
pub fn command_menu() -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", "Запустить бота"),
        BotCommand::new("help", "Список команд"),
        BotCommand::new("moscow", "Погода в Москве"),
        BotCommand::new("spb", "Погода в Санкт-Петербурге"),
        BotCommand::new("novosibirsk", "Погода в Новосибирске"),
        BotCommand::new("yekaterinburg", "Погода в Екатеринбурге"),
        BotCommand::new("kazan", "Погода в Казани"),
        BotCommand::new("anadyr", "Погода в Анадыре"),
    ]
}

/// Registers the command menu, retrying up to 3 attempts with exponential
/// backoff (2 s, 4 s). Total failure is logged and non-fatal: the bot still
/// answers, users just lose the menu.
pub async fn register_commands(bot: &teloxide::Bot) {
    let result = retry_with_backoff(REGISTER_ATTEMPTS, REGISTER_BASE_DELAY, || {
        let bot = bot.clone();
        async move { bot.set_my_commands(command_menu()).await }
    })
    .await;

    match result {
        Ok(_) => info!("bot command menu registered"),
        Err(err) => warn!(
            error = %err,
            attempts = REGISTER_ATTEMPTS,
            "failed to register command menu"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_help_and_every_city_command() {
        let menu = command_menu();
        let names: Vec<&str> = menu.iter().map(|c| c.command.as_str()).collect();

        assert_eq!(
            names,
            [
                "start",
                "help",
                "moscow",
                "spb",
                "novosibirsk",
                "yekaterinburg",
                "kazan",
                "anadyr"
            ]
        );
    }
}
