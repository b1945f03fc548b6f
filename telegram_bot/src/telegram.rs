use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ChatAction;
use tracing::instrument;

use crate::generator::ResponseGenerator;
use crate::listener::{Outcome, Replier, TimeCommandListener};

/// Replies into one Telegram chat.
pub struct TelegramReplier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramReplier {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl Replier for TelegramReplier {
    async fn typing(&self) -> Result<()> {
        self.bot
            .send_chat_action(self.chat_id, ChatAction::Typing)
            .send()
            .await?;
        Ok(())
    }

    async fn reply(&self, text: String) -> Result<()> {
        let reply_msg = self.bot.send_message(self.chat_id, text).send().await?;
        tracing::Span::current().record("reply_id", reply_msg.id.0);
        Ok(())
    }
}

#[instrument(skip_all, fields(chat_id = msg.chat.id.0, user, outcome, reply_id))]
pub async fn bot_msg_handler<G: ResponseGenerator>(
    bot: Bot,
    msg: Message,
    listener: Arc<TimeCommandListener<G>>,
) -> Result<()> {
    let span = tracing::Span::current();
    if let Some(user) = msg.from().and_then(|user| user.username.as_deref()) {
        span.record("user", user);
    }

    let replier = TelegramReplier::new(bot, msg.chat.id);
    let outcome = listener.handle(msg.text(), &replier).await?;

    span.record("outcome", tracing::field::debug(&outcome));
    if outcome != Outcome::Ignored {
        tracing::info!("SUCCESS");
    }
    Ok(())
}
