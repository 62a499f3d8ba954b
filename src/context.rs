use crate::store::{BirthdayStore, SubscriberRegistry};

/// Shared state handed to the dispatcher, the reminder service and the
/// health endpoints.
pub struct BotContext {
    pub birthdays: BirthdayStore,
    pub subscribers: SubscriberRegistry,
}

impl BotContext {
    pub fn new(birthdays: BirthdayStore) -> Self {
        Self {
            birthdays,
            subscribers: SubscriberRegistry::new(),
        }
    }
}
