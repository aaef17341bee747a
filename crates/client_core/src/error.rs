use shared::error::{ClientesFailure, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientesError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to deserialize response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientesError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientesError::Transport(_) => ErrorCode::Transport,
            ClientesError::Status { .. } => ErrorCode::Status,
            ClientesError::Decode(_) => ErrorCode::Decode,
        }
    }
}

impl From<ClientesError> for ClientesFailure {
    fn from(value: ClientesError) -> Self {
        ClientesFailure::new(value.code(), value.to_string())
    }
}
