/// Calendar arithmetic for day-month birthdays
pub mod datetime;
/// Emoji-prefixed reply helpers
pub mod feedback;
/// Structured logging helpers
pub mod logging;
/// Telegram MarkdownV2 escaping
pub mod markdown;
/// Input validation for bot commands
pub mod validation;
