use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::context::BotContext;
use crate::utils::logging::{log_command_start, log_command_success};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: Arc<BotContext>,
) -> ResponseResult<()> {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            let chat_id = msg.chat.id.0;
            log_command_start("/start", chat_id);
            ctx.subscribers.subscribe(chat_id).await;
            bot.send_message(
                msg.chat.id,
                "👋 Hi! I'll remind you about upcoming birthdays.\n\n\
                 Use /list to see the next 7 days, /add <name> <DD-MM> to store a new one, \
                 and /help for everything else.",
            )
            .await?;
            log_command_success("/start", chat_id, None);
        }
        Command::Reload => {
            crate::bot::commands::reload::handle_reload(bot, msg, &ctx).await?;
        }
        Command::List => {
            crate::bot::commands::list::handle_list(bot, msg, &ctx).await?;
        }
        Command::Add { args } => {
            crate::bot::commands::add::handle_add(bot, msg, args, &ctx).await?;
        }
    }
    Ok(())
}
