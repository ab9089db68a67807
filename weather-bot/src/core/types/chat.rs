//! Identity of the chat a message belongs to.

use serde::{Deserialize, Serialize};

/// Chat the message arrived in and the reply goes back to. `chat_type` keeps
/// the transport's rendering of the chat kind (private, group, channel).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
