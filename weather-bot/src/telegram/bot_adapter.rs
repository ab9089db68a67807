//! Wraps teloxide::Bot and implements the core [`crate::core::Bot`] trait.
//! Production code sends replies via Telegram; tests substitute a capturing
//! implementation.

use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::core::{Bot as CoreBot, BotError, Chat, Outbound, Result};

/// Thin wrapper around teloxide::Bot implementing core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send(&self, chat: &Chat, outbound: &Outbound) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), outbound.text.clone());
        let request = if outbound.markdown {
            request.parse_mode(ParseMode::Markdown)
        } else {
            request
        };
        request
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }
}
