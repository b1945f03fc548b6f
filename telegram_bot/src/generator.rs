use anyhow::Result;
use async_trait::async_trait;
use openrouter_client::{ChatMessage, ChatRequest, Client};
use tracing::instrument;

use crate::persona::Persona;

/// Produces the text sent in reply to `/time`.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    async fn generate(&self) -> Result<String>;
}

/// Asks an OpenRouter model to play the configured [`Persona`].
#[derive(Debug, Clone)]
pub struct PersonaGenerator {
    client: Client,
    model: String,
    persona: Persona,
}

impl PersonaGenerator {
    pub fn new(client: Client, model: impl Into<String>, persona: Persona) -> Self {
        Self {
            client,
            model: model.into(),
            persona,
        }
    }

    fn request(&self) -> ChatRequest {
        ChatRequest::new(
            self.model.clone(),
            vec![
                ChatMessage::system(self.persona.system_prompt()),
                ChatMessage::user(self.persona.user_prompt()),
            ],
        )
        .with_max_tokens(self.persona.max_tokens())
    }
}

#[async_trait]
impl ResponseGenerator for PersonaGenerator {
    #[instrument(skip_all, fields(persona = ?self.persona))]
    async fn generate(&self) -> Result<String> {
        let text = self.client.chat_completion(&self.request()).await?;
        Ok(text)
    }
}
