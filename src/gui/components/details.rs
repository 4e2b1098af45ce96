// src/gui/components/details.rs
use eframe::egui;

/// Read-only, selectable block of "Label: value" lines.
pub fn draw(ui: &mut egui::Ui, details: &str) {
    if details.is_empty() {
        return;
    }
    ui.label("Product details:");
    egui::ScrollArea::vertical().show(ui, |ui| {
        let mut text = details;
        ui.add(
            egui::TextEdit::multiline(&mut text)
                .desired_width(f32::INFINITY)
                .desired_rows(12),
        );
    });
}
