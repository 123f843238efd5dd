use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{HttpUserDirectory, UserDirectory, DEFAULT_SERVER_URL};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{RecordsApp, StartupConfig};

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the users service.
    #[arg(long, env = "USERS_API_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,
}

impl From<Args> for StartupConfig {
    fn from(args: Args) -> Self {
        Self {
            server_url: args.server_url,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let startup = StartupConfig::from(Args::parse());
    let directory: Arc<dyn UserDirectory> = Arc::new(HttpUserDirectory::new(&startup.server_url)?);
    tracing::info!(server_url = %startup.server_url, "starting desktop gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, directory);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("User Records")
            .with_inner_size([760.0, 600.0])
            .with_min_inner_size([520.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "User Records",
        options,
        Box::new(|_cc| Ok(Box::new(RecordsApp::new(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop gui exited with an error: {err}"))
}
