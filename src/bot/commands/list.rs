use std::sync::Arc;

use chrono::Utc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::context::BotContext;
use crate::utils::datetime::format_day_month;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{log_command_start, log_command_success, log_ignored_command};
use crate::utils::markdown::escape_markdown;

/// How far ahead /list looks, in days (inclusive).
const UPCOMING_WINDOW_DAYS: i64 = 7;

pub async fn handle_list(bot: Bot, msg: Message, ctx: &Arc<BotContext>) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    if !ctx.subscribers.is_subscribed(chat_id).await {
        log_ignored_command("/list", chat_id);
        return Ok(());
    }
    log_command_start("/list", chat_id);

    let today = Utc::now().date_naive();
    let upcoming = ctx.birthdays.upcoming(today, UPCOMING_WINDOW_DAYS).await;

    if upcoming.is_empty() {
        let feedback = CommandFeedback::new(bot, msg.chat.id);
        feedback
            .info(&format!(
                "No birthdays in the next {} days",
                UPCOMING_WINDOW_DAYS
            ))
            .await?;
        return Ok(());
    }

    let mut text = String::from("📅 *Upcoming birthdays:*\n");
    for entry in &upcoming {
        text.push_str(&format!(
            "• {} \\- {}\n",
            escape_markdown(&format_day_month(entry.date)),
            escape_markdown(&entry.record.name)
        ));
    }

    log_command_success("/list", chat_id, Some(&format!("{} upcoming", upcoming.len())));
    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::MarkdownV2)
        .await?;

    Ok(())
}
