//! Long-poll loop: converts Telegram updates to core messages, runs the
//! handler chain, and delivers the reply through the [`crate::core::Bot`]
//! trait.

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{error, info};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;
use crate::chain::HandlerChain;
use crate::core::{Bot as CoreBot, HandlerResponse, ToCoreMessage};

/// Starts the long-poll loop. Each text update is converted to a core
/// message and handled to completion before its reply is sent; non-text and
/// empty updates are ignored. Delivery failures are logged, never retried.
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> anyhow::Result<()> {
    let adapter = Arc::new(TelegramBotAdapter::new(bot.clone()));

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();
        let adapter = adapter.clone();

        async move {
            match msg.text() {
                Some(text) if !text.is_empty() => {}
                _ => {
                    info!(chat_id = msg.chat.id.0, "ignoring non-text update");
                    return Ok(());
                }
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                content = %core_msg.content,
                "received message"
            );

            match chain.handle(&core_msg).await {
                Ok(HandlerResponse::Reply(outbound)) => {
                    if let Err(e) = adapter.send(&core_msg.chat, &outbound).await {
                        error!(error = %e, chat_id = core_msg.chat.id, "failed to send reply");
                    }
                }
                Ok(HandlerResponse::Continue) | Ok(HandlerResponse::Stop) => {}
                Err(e) => {
                    error!(error = %e, chat_id = core_msg.chat.id, "handler chain failed");
                }
            }

            Ok(())
        }
    })
    .await;

    Ok(())
}
