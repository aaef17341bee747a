//! Controller layer: UI events, status derivation, and command orchestration.
//!
//! Form state itself lives in [`client_core::ClienteFormController`]; this layer only moves
//! its requests to the backend worker and its results back.

pub mod events;
pub mod orchestration;
