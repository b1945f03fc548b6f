//! Minimal client for the OpenRouter chat-completion API.
//!
//! Only the non-streaming `/chat/completions` call is supported. Every request
//! is sent once; there are no retries.

mod error;
mod types;

pub use error::{ClientError, Result};
pub use types::{ChatMessage, ChatRequest, Role};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use std::fmt::Debug;
use std::time::Duration;
use tracing::instrument;
use types::{ChatResponse, ErrorBody};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    /// Sent as `HTTP-Referer`, used by OpenRouter for app attribution.
    pub referer: Option<String>,
    /// Sent as `X-Title`.
    pub app_title: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            referer: None,
            app_title: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    pub fn with_app_title(mut self, app_title: impl Into<String>) -> Self {
        self.app_title = Some(app_title.into());
        self
    }

    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        if let Some(referer) = &self.referer {
            headers.insert(
                HeaderName::from_static("http-referer"),
                HeaderValue::from_str(referer)?,
            );
        }
        if let Some(title) = &self.app_title {
            headers.insert(
                HeaderName::from_static("x-title"),
                HeaderValue::from_str(title)?,
            );
        }
        Ok(headers)
    }
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("referer", &self.referer)
            .field("app_title", &self.app_title)
            .finish()
    }
}

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    url: String,
}

impl Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").field("url", &self.url).finish()
    }
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(config.default_headers()?)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            url: format!(
                "{}/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
        })
    }

    /// Sends one completion request and returns the text of the first choice.
    #[instrument(skip_all, fields(model = %request.model))]
    pub async fn chat_completion(&self, request: &ChatRequest) -> Result<String> {
        let response = self.http.post(&self.url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(error_body) => error_body.error.message,
                Err(_) => body,
            };
            return Err(ClientError::Status { status, message });
        }

        let completion: ChatResponse = serde_json::from_str(&body)?;
        if let Some(error) = completion.error {
            return Err(ClientError::Api {
                message: error.message,
                code: error.code.map(|code| code.to_string()),
            });
        }

        let text = completion
            .first_content()
            .ok_or(ClientError::EmptyCompletion)?;
        tracing::debug!("Completion of {} chars", text.chars().count());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let client = Client::new(ClientConfig::new("key").with_base_url("http://host/api/v1/"))
            .unwrap();
        assert_eq!(client.url, "http://host/api/v1/chat/completions");
    }

    #[test]
    fn config_debug_hides_api_key() {
        let config = ClientConfig::new("sk-or-secret");
        assert!(!format!("{:?}", config).contains("sk-or-secret"));
    }

    #[test]
    fn api_key_with_newline_is_rejected() {
        let err = Client::new(ClientConfig::new("bad\nkey")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader(_)));
    }
}
