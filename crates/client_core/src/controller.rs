//! Form controller for the clientes screen: modal visibility, draft state, validation and
//! the load/submit flows.
//!
//! The controller never performs I/O on its own. Each flow is split in a `begin_*` step that
//! decides whether a request should go out and an `apply_*` step that folds the response back
//! into state, so a front-end can run the request wherever it likes (the GUI runs it on a
//! backend worker thread). [`ClienteFormController::load`] and
//! [`ClienteFormController::submit`] compose both steps around a single [`ClientesApi`] call.

use shared::{
    domain::{Cliente, ClienteDraft, ClienteField},
    error::ClientesFailure,
    validation::{validate_draft, FieldErrors},
};
use tracing::{debug, error, info, warn};

use crate::api::ClientesApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Failed(ClientesFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Cliente),
    Failed(ClientesFailure),
}

/// Why a submission did not produce a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    Invalid(FieldErrors),
    InFlight,
}

#[derive(Debug, Default)]
pub struct ClienteFormController {
    visibility: ModalVisibility,
    draft: ClienteDraft,
    errors: FieldErrors,
    clientes: Vec<Cliente>,
    load_started: bool,
    submit_in_flight: bool,
    // Bumped whenever the draft is discarded, so a late create result can tell whether the
    // form still holds what was submitted.
    draft_generation: u64,
    submitted_generation: Option<u64>,
}

impl ClienteFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == ModalVisibility::Open
    }

    pub fn draft(&self) -> &ClienteDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn field_error(&self, field: ClienteField) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn clientes(&self) -> &[Cliente] {
        &self.clientes
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_in_flight
    }

    /// Unconditional open/close. Closing discards the draft.
    pub fn toggle(&mut self) {
        self.visibility = match self.visibility {
            ModalVisibility::Closed => ModalVisibility::Open,
            ModalVisibility::Open => {
                self.reset_draft();
                ModalVisibility::Closed
            }
        };
    }

    pub fn set_field(&mut self, field: ClienteField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors = validate_draft(&self.draft);
    }

    /// True exactly once: the first mount issues the list request.
    pub fn begin_load(&mut self) -> bool {
        if self.load_started {
            return false;
        }
        self.load_started = true;
        info!("loading clientes");
        true
    }

    pub fn apply_load(&mut self, result: Result<Vec<Cliente>, ClientesFailure>) -> LoadOutcome {
        match result {
            Ok(clientes) => {
                let count = clientes.len();
                self.clientes = clientes;
                info!(count, "clientes loaded");
                LoadOutcome::Loaded { count }
            }
            Err(failure) => {
                error!(code = ?failure.code, "failed to load clientes: {}", failure.message);
                LoadOutcome::Failed(failure)
            }
        }
    }

    /// Validates the draft and, when it may be sent, marks a submission as in flight and
    /// returns the payload to post.
    pub fn begin_submit(&mut self) -> Result<ClienteDraft, SubmitRejected> {
        self.errors = validate_draft(&self.draft);
        if !self.errors.is_empty() {
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }
        if self.submit_in_flight {
            warn!("ignoring submit while another cliente creation is pending");
            return Err(SubmitRejected::InFlight);
        }
        self.submit_in_flight = true;
        self.submitted_generation = Some(self.draft_generation);
        Ok(self.draft.clone())
    }

    /// Folds a create result back into state. The draft is cleared and the modal closed only
    /// if the form still holds the submitted draft; one the user started after discarding it
    /// is left alone.
    pub fn apply_submit(&mut self, result: Result<Cliente, ClientesFailure>) -> SubmitOutcome {
        self.submit_in_flight = false;
        let draft_is_current = self
            .submitted_generation
            .take()
            .map_or(true, |generation| generation == self.draft_generation);
        match result {
            Ok(cliente) => {
                info!(id = ?cliente.id, "cliente created");
                self.clientes.push(cliente.clone());
                if draft_is_current {
                    self.reset_draft();
                    self.visibility = ModalVisibility::Closed;
                } else {
                    debug!("keeping the draft started after the submitted one was discarded");
                }
                SubmitOutcome::Created(cliente)
            }
            Err(failure) => {
                error!(code = ?failure.code, "failed to create cliente: {}", failure.message);
                SubmitOutcome::Failed(failure)
            }
        }
    }

    pub async fn load<A>(&mut self, api: &A) -> Option<LoadOutcome>
    where
        A: ClientesApi + ?Sized,
    {
        if !self.begin_load() {
            return None;
        }
        let result = api.list_clientes().await.map_err(ClientesFailure::from);
        Some(self.apply_load(result))
    }

    pub async fn submit<A>(&mut self, api: &A) -> Result<SubmitOutcome, SubmitRejected>
    where
        A: ClientesApi + ?Sized,
    {
        let draft = self.begin_submit()?;
        let result = api
            .create_cliente(&draft)
            .await
            .map_err(ClientesFailure::from);
        Ok(self.apply_submit(result))
    }

    fn reset_draft(&mut self) {
        self.draft_generation = self.draft_generation.wrapping_add(1);
        self.draft = ClienteDraft::default();
        self.errors.clear();
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
