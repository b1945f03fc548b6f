use clap::Parser;
use openrouter_client::{ClientConfig, DEFAULT_BASE_URL};
use std::fmt::Debug;
use std::time::Duration;

use crate::persona::Persona;

pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";
pub const DEFAULT_REFERER: &str = "https://github.com/tengfone/clockblocker";

#[derive(Parser, Clone)]
#[clap(
    author,
    version,
    about = "Telegram bot that answers /time with anything but the time"
)]
pub struct Args {
    #[clap(long, env = "TELEGRAM_TOKEN", value_parser = non_blank, hide_env_values = true)]
    pub tg_token: String,
    #[clap(long, env = "OPENROUTER_API_KEY", value_parser = non_blank, hide_env_values = true)]
    pub openrouter_api_key: String,
    #[clap(long, env = "OPENROUTER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub openrouter_base_url: String,
    #[clap(short, long, env = "OPENROUTER_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
    #[clap(short, long, env = "CLOCKBLOCKER_PERSONA", value_enum, default_value_t = Persona::Philosopher)]
    pub persona: Persona,
    #[clap(long, env = "OPENROUTER_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
    #[clap(long, env = "OPENROUTER_REFERER", default_value = DEFAULT_REFERER)]
    pub referer: String,
    #[clap(long, env = "OPENROUTER_APP_TITLE", default_value = "clockblocker")]
    pub app_title: String,
}

impl Args {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.openrouter_api_key.clone())
            .with_base_url(self.openrouter_base_url.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs))
            .with_referer(self.referer.clone())
            .with_app_title(self.app_title.clone())
    }
}

impl Debug for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Args")
            .field("tg_token", &"<redacted>")
            .field("openrouter_api_key", &"<redacted>")
            .field("openrouter_base_url", &self.openrouter_base_url)
            .field("model", &self.model)
            .field("persona", &self.persona)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("referer", &self.referer)
            .field("app_title", &self.app_title)
            .finish()
    }
}

fn non_blank(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err("must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREDENTIALS: [&str; 5] = [
        "telegram_bot",
        "--tg-token",
        "123:abc",
        "--openrouter-api-key",
        "sk-or-test",
    ];

    #[test]
    fn defaults_apply_when_only_credentials_are_given() {
        let args = Args::try_parse_from(CREDENTIALS).unwrap();
        assert_eq!(args.tg_token, "123:abc");
        assert_eq!(args.model, DEFAULT_MODEL);
        assert_eq!(args.persona, Persona::Philosopher);
        assert_eq!(args.request_timeout_secs, 30);

        let config = args.client_config();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.referer.as_deref(), Some(DEFAULT_REFERER));
    }

    #[test]
    fn blank_token_is_rejected() {
        let result = Args::try_parse_from([
            "telegram_bot",
            "--tg-token",
            "   ",
            "--openrouter-api-key",
            "sk-or-test",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn persona_and_model_can_be_overridden() {
        let args = Args::try_parse_from(
            CREDENTIALS
                .iter()
                .copied()
                .chain(["--persona", "oracle", "-m", "openai/gpt-4o-mini"]),
        )
        .unwrap();
        assert_eq!(args.persona, Persona::Oracle);
        assert_eq!(args.model, "openai/gpt-4o-mini");
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let args = Args::try_parse_from(CREDENTIALS).unwrap();
        let printed = format!("{:?}", args);
        assert!(!printed.contains("123:abc"));
        assert!(!printed.contains("sk-or-test"));
    }
}
