//! Identity of the message sender.

use serde::{Deserialize, Serialize};

/// Sender of an inbound message. Telegram guarantees an id; the name fields
/// depend on what the user filled into their profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Placeholder identity for updates that carry no sender, such as channel
    /// posts.
    pub fn unknown() -> Self {
        Self {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        }
    }
}
