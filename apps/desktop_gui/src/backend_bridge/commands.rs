//! Backend commands queued from UI to backend worker.

use shared::domain::ClienteDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadClientes,
    CreateCliente { draft: ClienteDraft },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadClientes => "load_clientes",
            BackendCommand::CreateCliente { .. } => "create_cliente",
        }
    }
}
