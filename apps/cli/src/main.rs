use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{
    FormField, FormState, HttpUserDirectory, OperationKind, RecordController, DEFAULT_SERVER_URL,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Runs one record operation against the users service and prints the
/// resulting collection.
#[derive(Parser, Debug)]
#[command(name = "records")]
struct Args {
    #[arg(long, env = "USERS_API_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,
    #[arg(long, default_value = "")]
    id: String,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    surname: String,
    #[arg(long, default_value = "")]
    age: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Add a user from --name, --surname and --age.
    Create,
    /// List every user.
    Read,
    /// Overwrite user --id with the other fields.
    Update,
    /// Remove user --id.
    Delete,
}

impl From<Command> for OperationKind {
    fn from(command: Command) -> Self {
        match command {
            Command::Create => OperationKind::Create,
            Command::Read => OperationKind::Read,
            Command::Update => OperationKind::Update,
            Command::Delete => OperationKind::Delete,
        }
    }
}

impl Args {
    fn form_values(&self) -> [(FormField, &str); 4] {
        [
            (FormField::Id, self.id.as_str()),
            (FormField::Name, self.name.as_str()),
            (FormField::Surname, self.surname.as_str()),
            (FormField::Age, self.age.as_str()),
        ]
    }
}

fn fill_form(controller: &mut RecordController, args: &Args) {
    for (field, value) in args.form_values() {
        controller.handle_input_change(field, value);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let directory = HttpUserDirectory::new(&args.server_url)?;
    info!(server_url = %directory.base_url(), command = ?args.command, "starting");
    let mut controller = RecordController::with_form(Arc::new(directory), FormState::default());
    fill_form(&mut controller, &args);

    controller.perform(args.command.into()).await?;
    print!("{}", controller.table());
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
