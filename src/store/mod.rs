/// CSV-backed birthday records
pub mod birthdays;
/// Chats opted into reminders
pub mod subscribers;

pub use birthdays::{AddOutcome, BirthdayRecord, BirthdayStore};
pub use subscribers::SubscriberRegistry;
