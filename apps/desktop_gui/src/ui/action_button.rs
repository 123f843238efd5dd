use client_core::OperationKind;
use eframe::egui;

const PRIMARY_FILL: egui::Color32 = egui::Color32::from_rgb(88, 101, 242);
const SECONDARY_FILL: egui::Color32 = egui::Color32::from_rgb(111, 53, 53);
const SECONDARY_STROKE: egui::Color32 = egui::Color32::from_rgb(175, 96, 96);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEmphasis {
    Primary,
    Secondary,
}

impl ButtonEmphasis {
    /// Delete is the only destructive action.
    pub fn for_operation(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Delete => ButtonEmphasis::Secondary,
            OperationKind::Create | OperationKind::Read | OperationKind::Update => {
                ButtonEmphasis::Primary
            }
        }
    }
}

/// One labeled control. Clicks are forwarded as-is; it is never disabled.
pub struct ActionButton<'a> {
    label: &'a str,
    emphasis: ButtonEmphasis,
}

impl<'a> ActionButton<'a> {
    pub fn new(label: &'a str, emphasis: ButtonEmphasis) -> Self {
        Self { label, emphasis }
    }

    pub fn for_operation(kind: OperationKind) -> ActionButton<'static> {
        ActionButton::new(kind.label(), ButtonEmphasis::for_operation(kind))
    }

    pub fn emphasis(&self) -> ButtonEmphasis {
        self.emphasis
    }

    pub fn show(self, ui: &mut egui::Ui, on_click: impl FnOnce()) -> egui::Response {
        let text = egui::RichText::new(self.label).strong().color(egui::Color32::WHITE);
        let button = match self.emphasis {
            ButtonEmphasis::Primary => egui::Button::new(text).fill(PRIMARY_FILL),
            ButtonEmphasis::Secondary => egui::Button::new(text)
                .fill(SECONDARY_FILL)
                .stroke(egui::Stroke::new(1.0, SECONDARY_STROKE)),
        }
        .min_size(egui::vec2(96.0, 32.0));
        let response = ui.add(button);
        if response.clicked() {
            on_click();
        }
        response
    }
}
