pub mod message;

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;

use crate::context::BotContext;

/// Wires incoming updates to the command handler.
pub struct BotHandler {
    pub ctx: Arc<BotContext>,
}

impl BotHandler {
    pub fn new(ctx: Arc<BotContext>) -> Self {
        Self { ctx }
    }

    /// Messages that do not parse as a known command fall through without a
    /// reply.
    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        let ctx = self.ctx.clone();

        Update::filter_message()
            .filter_command::<crate::bot::commands::Command>()
            .endpoint(move |bot, msg, cmd| {
                let ctx = ctx.clone();
                async move { message::command_handler(bot, msg, cmd, ctx).await }
            })
    }
}
