//! UI layer for the desktop GUI: the clientes screen and its create modal.

pub mod app;

pub use app::ClientesApp;
