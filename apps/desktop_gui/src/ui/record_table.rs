use client_core::RecordTable;
use eframe::egui;

pub fn show(ui: &mut egui::Ui, table: &RecordTable) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("record_table")
                .striped(true)
                .num_columns(4)
                .min_col_width(64.0)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for header in table.headers() {
                        ui.label(egui::RichText::new(header).strong());
                    }
                    ui.end_row();
                    for row in table.rows() {
                        for cell in row {
                            ui.label(cell.as_str());
                        }
                        ui.end_row();
                    }
                });
        });
}
