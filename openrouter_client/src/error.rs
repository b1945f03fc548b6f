use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion API returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("completion API error: {message}")]
    Api {
        message: String,
        code: Option<String>,
    },

    #[error("could not decode completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("completion contained no text")]
    EmptyCompletion,

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, ClientError>;
