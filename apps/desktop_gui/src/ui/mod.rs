//! UI layer for desktop GUI: app shell and the form's widgets.

pub mod action_button;
pub mod app;
pub mod field_group;
pub mod record_table;

pub use app::{RecordsApp, StartupConfig};
