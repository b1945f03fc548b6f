use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of `POST /chat/completions`.
#[derive(Serialize, Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Choice {
    pub message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiError {
    pub message: String,
    pub code: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ErrorBody {
    pub error: ApiError,
}

impl ChatResponse {
    /// Text of the first choice, trimmed. `None` when absent or blank.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_owned())
            .filter(|content| !content.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_unset_sampling_fields() {
        let request = ChatRequest::new("some/model", vec![ChatMessage::user("hi")]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "some/model",
                "messages": [{"role": "user", "content": "hi"}],
            })
        );
    }

    #[test]
    fn request_carries_sampling_fields_when_set() {
        let request = ChatRequest::new("m", vec![ChatMessage::system("s")])
            .with_max_tokens(300)
            .with_temperature(1.0);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 300);
        assert_eq!(json["temperature"], 1.0);
        assert_eq!(json["messages"][0]["role"], "system");
    }

    #[test]
    fn first_content_skips_blank_text() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"   \n"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_content(), None);

        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn first_content_is_trimmed() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"id":"gen-1","choices":[{"message":{"content":"  Time is a flat circle.\n"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.first_content().as_deref(),
            Some("Time is a flat circle.")
        );
    }
}
