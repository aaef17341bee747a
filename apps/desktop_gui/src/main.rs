mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::{commands::BackendCommand, runtime};
use clap::Parser;
use client_core::{load_settings, normalize_server_url};
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use ui::ClientesApp;

#[derive(Parser, Debug)]
#[command(name = "clientes_gui", about = "Desktop screen for listing and registering clientes")]
struct Args {
    /// Base URL of the server exposing /clientes (overrides clientes.toml and env).
    #[arg(long)]
    server_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();
    let args = Args::parse();

    let raw_server_url = args.server_url.as_deref().unwrap_or(&settings.server_url);
    let server_url = normalize_server_url(raw_server_url)?;
    tracing::info!(server_url = %server_url, "starting clientes gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let _backend = runtime::launch(server_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Clientes")
            .with_inner_size([960.0, 600.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Clientes",
        options,
        Box::new(move |_cc| Ok(Box::new(ClientesApp::new(cmd_tx, ui_rx, server_url)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run clientes gui: {err}"))
}
