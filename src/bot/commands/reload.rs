use std::sync::Arc;

use teloxide::prelude::*;

use crate::context::BotContext;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{
    log_command_error, log_command_start, log_command_success, log_ignored_command,
};

pub async fn handle_reload(bot: Bot, msg: Message, ctx: &Arc<BotContext>) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    if !ctx.subscribers.is_subscribed(chat_id).await {
        log_ignored_command("/reload", chat_id);
        return Ok(());
    }
    log_command_start("/reload", chat_id);
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    match ctx.birthdays.load().await {
        Ok(count) => {
            log_command_success("/reload", chat_id, Some(&format!("{} records", count)));
            feedback
                .success(&format!("Birthday list reloaded: {} records", count))
                .await?;
        }
        Err(e) => {
            log_command_error("/reload", chat_id, &e.to_string());
            feedback
                .error("Failed to reload the birthday list from the record file")
                .await?;
        }
    }

    Ok(())
}
