pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod table;

pub use api::{ClientesApi, HttpClientesApi};
pub use config::{load_settings, normalize_server_url, ClientSettings};
pub use controller::{
    ClienteFormController, LoadOutcome, ModalVisibility, SubmitOutcome, SubmitRejected,
};
pub use error::ClientesError;
pub use table::ClientesTable;
