//! Bridge between the egui thread and the async worker that talks to the users service.

pub mod commands;
pub mod runtime;
