//! Backend-to-UI events and the status texts derived from them.

use client_core::{LoadOutcome, SubmitOutcome, SubmitRejected};
use shared::{domain::Cliente, error::ClientesFailure};

#[derive(Debug)]
pub enum UiEvent {
    ClientesLoaded(Result<Vec<Cliente>, ClientesFailure>),
    ClienteCreated(Result<Cliente, ClientesFailure>),
    BackendFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub severity: StatusSeverity,
    pub message: String,
}

impl StatusLine {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: StatusSeverity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: StatusSeverity::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == StatusSeverity::Error
    }
}

pub fn status_for_load(outcome: &LoadOutcome) -> StatusLine {
    match outcome {
        LoadOutcome::Loaded { count: 0 } => StatusLine::info("Nenhum cliente cadastrado"),
        LoadOutcome::Loaded { count: 1 } => StatusLine::info("1 cliente carregado"),
        LoadOutcome::Loaded { count } => StatusLine::info(format!("{count} clientes carregados")),
        LoadOutcome::Failed(failure) => {
            StatusLine::error(format!("Erro ao carregar clientes ({failure})"))
        }
    }
}

pub fn status_for_submit(outcome: &SubmitOutcome) -> StatusLine {
    match outcome {
        SubmitOutcome::Created(_) => StatusLine::info("Cliente cadastrado com sucesso!"),
        SubmitOutcome::Failed(failure) => {
            StatusLine::error(format!("Erro ao cadastrar cliente ({failure})"))
        }
    }
}

pub fn status_for_rejection(rejected: &SubmitRejected) -> StatusLine {
    match rejected {
        SubmitRejected::Invalid(errors) => StatusLine::error(format!(
            "Corrija os campos destacados ({})",
            ClientesFailure::from(errors)
        )),
        SubmitRejected::InFlight => StatusLine::info("Aguarde, cadastro em andamento"),
    }
}
