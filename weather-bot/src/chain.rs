//! # Handler chain
//!
//! Runs handlers in registration order until one returns `Stop` or `Reply`.
//! Each message is handled to completion independently; the chain keeps no
//! state between messages.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

/// Ordered chain of handlers; the first `Stop` or `Reply` ends the run.
#[derive(Clone)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs the chain for one message.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "handler chain started"
        );

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(message).await?;
            debug!(handler = %name, response = ?response, "handler processed");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    debug!(handler = %name, "chain stopped by handler");
                    return Ok(response);
                }
                HandlerResponse::Continue => {}
            }
        }

        Ok(HandlerResponse::Continue)
    }
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}

// Behavior tests live in tests/chain_test.rs
