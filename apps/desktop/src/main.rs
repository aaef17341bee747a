use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, normalize_server_url, ClienteFormController, ClientesTable, HttpClientesApi,
    LoadOutcome, SubmitOutcome, SubmitRejected,
};
use shared::{domain::ClienteField, error::ClientesFailure, validation::FieldErrors};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "clientes", about = "List and register clientes against a REST endpoint")]
struct Args {
    /// Base URL of the server exposing /clientes (overrides clientes.toml and env).
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print every cliente known to the server.
    List,
    /// Register a new cliente, then print the updated table.
    Create {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        email: String,
        /// Date of birth as YYYY-MM-DD.
        #[arg(long)]
        nascimento: String,
        #[arg(long)]
        cep: String,
    },
}

fn render_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {}: {message}", field.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();
    let args = Args::parse();

    let raw_server_url = args.server_url.as_deref().unwrap_or(&settings.server_url);
    let server_url = normalize_server_url(raw_server_url)?;
    let api = HttpClientesApi::new(server_url);
    let mut controller = ClienteFormController::new();

    let loaded = controller.load(&api).await;

    match args.command {
        Command::List => {
            if let Some(LoadOutcome::Failed(failure)) = loaded {
                bail!("Erro ao carregar clientes: {failure}");
            }
        }
        Command::Create {
            nome,
            email,
            nascimento,
            cep,
        } => {
            if let Some(LoadOutcome::Failed(failure)) = &loaded {
                warn!("continuing without the current list: {failure}");
            }

            controller.toggle();
            controller.set_field(ClienteField::Nome, nome);
            controller.set_field(ClienteField::Email, email);
            controller.set_field(ClienteField::Nascimento, nascimento);
            controller.set_field(ClienteField::Cep, cep);

            match controller.submit(&api).await {
                Ok(SubmitOutcome::Created(cliente)) => {
                    println!("Cliente cadastrado com sucesso! ({})", cliente.nome);
                }
                Ok(SubmitOutcome::Failed(failure)) => {
                    bail!("Erro ao cadastrar cliente: {failure}");
                }
                Err(SubmitRejected::Invalid(errors)) => {
                    eprintln!("{}", render_field_errors(&errors));
                    bail!("Cliente não cadastrado ({})", ClientesFailure::from(&errors));
                }
                Err(SubmitRejected::InFlight) => {
                    bail!("Cliente não cadastrado: outra requisição em andamento");
                }
            }
        }
    }

    print!("{}", ClientesTable::new(controller.clientes()).render_text());
    Ok(())
}
