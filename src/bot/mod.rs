/// Telegram command definitions and per-command handlers
pub mod commands;
/// Update dispatch wiring
pub mod handlers;
