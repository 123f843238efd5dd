use client_core::{FormField, OperationKind, DEFAULT_SERVER_URL};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::reducer::RecordViewState;
use crate::ui::{action_button::ActionButton, field_group, record_table};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub server_url: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

pub struct RecordsApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: RecordViewState,
    startup: StartupConfig,
}

impl RecordsApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: RecordViewState::default(),
            startup,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply(event);
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let mut changes: Vec<(FormField, String)> = Vec::new();
        field_group::show(ui, self.state.form(), |field, value| {
            changes.push((field, value));
        });
        for (field, value) in changes {
            self.state.handle_input_change(field, value);
        }

        ui.add_space(10.0);

        let mut clicked = None;
        ui.horizontal(|ui| {
            for kind in OperationKind::ALL {
                ActionButton::for_operation(kind).show(ui, || clicked = Some(kind));
            }
        });
        if let Some(kind) = clicked {
            // Failures are already logged by the reducer.
            let _ = self.state.submit(kind, &self.cmd_tx);
        }
    }
}

impl eframe::App for RecordsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);
            ui.horizontal(|ui| {
                ui.heading("User records");
                ui.weak(self.startup.server_url.as_str());
                if self.state.in_flight() > 0 {
                    ui.spinner();
                }
            });
            ui.add_space(6.0);

            egui::Frame::NONE
                .fill(ui.visuals().faint_bg_color.gamma_multiply(0.55))
                .corner_radius(12.0)
                .inner_margin(egui::Margin::symmetric(14, 12))
                .show(ui, |ui| self.show_form(ui));

            ui.add_space(10.0);
            ui.separator();
            record_table::show(ui, &self.state.table());
        });

        if self.state.in_flight() > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
