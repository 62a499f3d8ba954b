use tracing::{debug, error, info};

/// Logs command receipt with consistent format
pub fn log_command_start(command: &str, chat_id: i64) {
    info!("CMD_START: {} in chat {}", command, chat_id);
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_SUCCESS: {} in chat {} - {}", command, chat_id, d),
        None => info!("CMD_SUCCESS: {} in chat {}", command, chat_id),
    }
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, chat_id: i64, error: &str) {
    error!("CMD_ERROR: {} in chat {} - {}", command, chat_id, error);
}

/// Logs commands dropped because the chat never subscribed
pub fn log_ignored_command(command: &str, chat_id: i64) {
    debug!("CMD_IGNORED: {} in chat {} - not subscribed", command, chat_id);
}
