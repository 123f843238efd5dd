//! The four labeled text inputs, in display order.

use client_core::{FormField, FormState};
use eframe::egui;

/// Draws one input per field and forwards every edit as `(field, new text)`.
pub fn show(ui: &mut egui::Ui, form: &FormState, mut on_change: impl FnMut(FormField, String)) {
    egui::Grid::new("field_group")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            for field in FormField::ALL {
                ui.label(egui::RichText::new(field.label()).strong());
                let mut value = form.value(field).to_string();
                let edit = egui::TextEdit::singleline(&mut value)
                    .id_salt(field.key())
                    .hint_text(
                        egui::RichText::new(field.label())
                            .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
                    )
                    .desired_width(f32::INFINITY);
                let response = ui.add_sized([260.0, 28.0], edit);
                if response.changed() {
                    on_change(field, value);
                }
                ui.end_row();
            }
        });
}
