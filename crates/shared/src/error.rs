use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request never produced a response.
    Transport,
    /// The server answered with a non-2xx status.
    Status,
    /// The response body was not the expected JSON.
    Decode,
    /// Client-side rules rejected the draft before any request was made.
    Validation,
}

impl ErrorCode {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCode::Transport => "falha de rede",
            ErrorCode::Status => "resposta inesperada do servidor",
            ErrorCode::Decode => "resposta inválida do servidor",
            ErrorCode::Validation => "dados inválidos",
        }
    }
}

/// Cloneable failure summary handed from the network layer to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{}: {message}", code.label())]
pub struct ClientesFailure {
    pub code: ErrorCode,
    pub message: String,
}

impl ClientesFailure {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
