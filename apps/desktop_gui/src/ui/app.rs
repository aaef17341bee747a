use std::time::Duration;

use client_core::{ClienteFormController, ClientesTable};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::ClienteField;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{status_for_load, status_for_rejection, status_for_submit, StatusLine, UiEvent},
    orchestration::dispatch_backend_command,
};

pub const MODAL_TITLE: &str = "Cadastro Cliente";

pub struct ClientesApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: ClienteFormController,
    server_url: String,
    status: Option<StatusLine>,
}

impl ClientesApp {
    /// Builds the screen and issues the initial list request.
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        server_url: String,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            controller: ClienteFormController::new(),
            server_url,
            status: None,
        };
        app.request_initial_load();
        app
    }

    pub fn controller(&self) -> &ClienteFormController {
        &self.controller
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    fn request_initial_load(&mut self) {
        if !self.controller.begin_load() {
            return;
        }
        match dispatch_backend_command(&self.cmd_tx, BackendCommand::LoadClientes) {
            Ok(()) => self.status = Some(StatusLine::info("Carregando clientes...")),
            Err(failure) => {
                let outcome = self.controller.apply_load(Err(failure));
                self.status = Some(status_for_load(&outcome));
            }
        }
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ClientesLoaded(result) => {
                    let outcome = self.controller.apply_load(result);
                    self.status = Some(status_for_load(&outcome));
                }
                UiEvent::ClienteCreated(result) => {
                    let outcome = self.controller.apply_submit(result);
                    self.status = Some(status_for_submit(&outcome));
                }
                UiEvent::BackendFailed(reason) => {
                    tracing::error!("backend worker failed: {reason}");
                    self.status = Some(StatusLine::error(reason));
                }
            }
        }
    }

    pub fn try_submit(&mut self) {
        let draft = match self.controller.begin_submit() {
            Ok(draft) => draft,
            Err(rejected) => {
                self.status = Some(status_for_rejection(&rejected));
                return;
            }
        };
        match dispatch_backend_command(&self.cmd_tx, BackendCommand::CreateCliente { draft }) {
            Ok(()) => self.status = Some(StatusLine::info("Salvando cliente...")),
            Err(failure) => {
                let outcome = self.controller.apply_submit(Err(failure));
                self.status = Some(status_for_submit(&outcome));
            }
        }
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("clientes_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Clientes");
                if ui.button("+").on_hover_text("Cadastrar cliente").clicked() {
                    self.controller.toggle();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&self.server_url);
                });
            });
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("clientes_status").show(ctx, |ui| {
            match self.status() {
                Some(status) if status.is_error() => {
                    ui.colored_label(ui.visuals().error_fg_color, &status.message);
                }
                Some(status) => {
                    ui.label(&status.message);
                }
                None => {
                    ui.label("");
                }
            }
        });
    }

    fn show_table(&self, ctx: &egui::Context) {
        let table = ClientesTable::new(self.controller().clientes());
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("clientes_table")
                    .striped(true)
                    .num_columns(table.headers().len())
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for header in table.headers() {
                            ui.strong(header);
                        }
                        ui.end_row();
                        for row in table.rows() {
                            for cell in &row {
                                ui.label(cell);
                            }
                            ui.end_row();
                        }
                    });
                if table.is_empty() {
                    ui.add_space(8.0);
                    ui.weak("Nenhum cliente cadastrado");
                }
            });
        });
    }

    fn show_modal(&mut self, ctx: &egui::Context) {
        if !self.controller.is_open() {
            return;
        }

        let mut open = true;
        let mut close_requested = false;
        let mut submit_requested = false;

        egui::Window::new(MODAL_TITLE)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                for field in ClienteField::ALL {
                    self.show_field(ui, field);
                    ui.add_space(6.0);
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Fechar").clicked() {
                        close_requested = true;
                    }
                    let save = egui::Button::new("Salvar");
                    if ui
                        .add_enabled(!self.controller.is_submitting(), save)
                        .clicked()
                    {
                        submit_requested = true;
                    }
                    if self.controller.is_submitting() {
                        ui.spinner();
                    }
                });
            });

        if submit_requested {
            self.try_submit();
        }
        if (!open || close_requested) && self.controller.is_open() {
            self.controller.toggle();
        }
    }

    fn show_field(&mut self, ui: &mut egui::Ui, field: ClienteField) {
        ui.label(field.label());
        let mut value = self.controller.draft().get(field).to_string();
        let edit = egui::TextEdit::singleline(&mut value)
            .id_salt(field.key())
            .hint_text(field.placeholder())
            .desired_width(320.0);
        if ui.add(edit).changed() {
            self.controller.set_field(field, value);
        }
        if let Some(message) = self.controller.field_error(field) {
            ui.colored_label(ui.visuals().error_fg_color, message);
        }
    }
}

impl eframe::App for ClientesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_toolbar(ctx);
        self.show_status_bar(ctx);
        self.show_table(ctx);
        self.show_modal(ctx);

        if self.controller.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;

