use anyhow::Result;
use clap::Parser;
use openrouter_client::Client;
use std::sync::Arc;
use teloxide::prelude::*;

use telegram_bot::telegram::bot_msg_handler;
use telegram_bot::{Args, PersonaGenerator, TimeCommandListener};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let args = Args::parse();
    tracing::info!("Starting TG bot with {:?}", args);

    let client = Client::new(args.client_config())?;
    let generator = PersonaGenerator::new(client, args.model.clone(), args.persona);

    let bot = Bot::new(args.tg_token.clone());
    let bot_info = bot.get_me().await?;
    tracing::info!("Started bot: @{}", bot_info.username());

    let listener =
        Arc::new(TimeCommandListener::new(generator).with_bot_username(bot_info.username()));

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let listener = listener.clone();
        async move {
            if let Err(e) = bot_msg_handler(bot, msg, listener).await {
                tracing::error!("Error sending message: {:?}", e);
            }
            Ok(())
        }
    })
    .await;
    Ok(())
}
