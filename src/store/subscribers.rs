use std::collections::HashSet;

use tokio::sync::RwLock;
use tracing::debug;

/// In-memory set of chats that opted into reminders.
///
/// There is no unsubscribe path; membership lasts until the process exits.
#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    chats: RwLock<HashSet<i64>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent opt-in.
    pub async fn subscribe(&self, chat_id: i64) {
        let inserted = self.chats.write().await.insert(chat_id);
        if inserted {
            debug!("Chat {} subscribed", chat_id);
        }
    }

    /// Membership check gating /reload, /list and /add.
    pub async fn is_subscribed(&self, chat_id: i64) -> bool {
        self.chats.read().await.contains(&chat_id)
    }

    /// A point-in-time copy of the subscriber list for the reminder sweep.
    pub async fn snapshot(&self) -> Vec<i64> {
        self.chats.read().await.iter().copied().collect()
    }

    /// Number of subscribed chats.
    pub async fn subscriber_count(&self) -> usize {
        self.chats.read().await.len()
    }
}
