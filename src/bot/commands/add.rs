use std::sync::Arc;

use teloxide::prelude::*;

use crate::context::BotContext;
use crate::store::AddOutcome;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{
    log_command_error, log_command_start, log_command_success, log_ignored_command,
};
use crate::utils::validation::{parse_birthday, split_add_args, validate_name};

const ADD_USAGE: &str = "/add Ann 01-01";

pub async fn handle_add(
    bot: Bot,
    msg: Message,
    args: String,
    ctx: &Arc<BotContext>,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    if !ctx.subscribers.is_subscribed(chat_id).await {
        log_ignored_command("/add", chat_id);
        return Ok(());
    }
    log_command_start("/add", chat_id);
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    let Some((name, date)) = split_add_args(&args) else {
        feedback
            .validation_error("Expected a name followed by a DD-MM birthday", ADD_USAGE)
            .await?;
        return Ok(());
    };

    if let Err(e) = validate_name(name) {
        feedback.validation_error(&e.to_string(), ADD_USAGE).await?;
        return Ok(());
    }

    let (day, month) = match parse_birthday(date) {
        Ok(parsed) => parsed,
        Err(e) => {
            feedback.validation_error(&e.to_string(), ADD_USAGE).await?;
            return Ok(());
        }
    };

    match ctx.birthdays.add(name, day, month).await {
        Ok(AddOutcome::Added) => {
            log_command_success(
                "/add",
                chat_id,
                Some(&format!("{} {:02}-{:02}", name, day, month)),
            );
            feedback
                .success(&format!("Added {} ({:02}-{:02})", name, day, month))
                .await?;
        }
        Ok(AddOutcome::Duplicate) => {
            log_command_success("/add", chat_id, Some("duplicate rejected"));
            feedback
                .warning(&format!(
                    "{} with birthday {:02}-{:02} is already on the list",
                    name, day, month
                ))
                .await?;
        }
        Err(e) => {
            log_command_error("/add", chat_id, &e.to_string());
            feedback
                .error("Failed to save the new birthday to the record file")
                .await?;
        }
    }

    Ok(())
}
