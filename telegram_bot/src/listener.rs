use anyhow::Result;
use async_trait::async_trait;

use crate::command::is_time_command;
use crate::fallback::fallback_message;
use crate::generator::ResponseGenerator;

/// Delivery side of a chat: where the reply to an inbound message goes.
#[async_trait]
pub trait Replier: Send + Sync {
    /// Shows a "typing" indicator. Not a chat message.
    async fn typing(&self) -> Result<()>;

    async fn reply(&self, text: String) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not a `/time` command; nothing was sent.
    Ignored,
    Generated,
    FellBack,
}

/// Answers `/time` with generated text and ignores everything else.
#[derive(Debug)]
pub struct TimeCommandListener<G> {
    generator: G,
    bot_username: Option<String>,
}

impl<G: ResponseGenerator> TimeCommandListener<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            bot_username: None,
        }
    }

    /// Lets `/time@<username>` match in group chats.
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    /// Sends at most one reply. Generation errors never escape: they turn
    /// into the fallback message. Only a failed delivery is returned as `Err`.
    pub async fn handle<R: Replier>(&self, text: Option<&str>, replier: &R) -> Result<Outcome> {
        let Some(text) = text else {
            return Ok(Outcome::Ignored);
        };
        if !is_time_command(text, self.bot_username.as_deref()) {
            return Ok(Outcome::Ignored);
        }

        if let Err(e) = replier.typing().await {
            tracing::warn!("Could not send typing action: {:#}", e);
        }

        let (reply, outcome) = match self.generator.generate().await {
            Ok(generated) if !generated.trim().is_empty() => (generated, Outcome::Generated),
            Ok(_) => {
                tracing::warn!("Generator returned blank text, sending fallback");
                (fallback(), Outcome::FellBack)
            }
            Err(e) => {
                tracing::warn!("Generation failed, sending fallback: {:#}", e);
                (fallback(), Outcome::FellBack)
            }
        };

        replier.reply(reply).await?;
        Ok(outcome)
    }
}

fn fallback() -> String {
    fallback_message(&mut rand::thread_rng())
}
