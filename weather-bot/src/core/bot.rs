//! Bot abstraction for delivering replies.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::{Chat, Outbound};

/// Abstraction for sending replies. Implementations map to a transport
/// (Telegram in production, a capturing double in tests).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Delivers `outbound` to the given chat. Delivery failures are the
    /// caller's to log; the core never retries them.
    async fn send(&self, chat: &Chat, outbound: &Outbound) -> Result<()>;
}
