// src/gui/components/summary.rs
use eframe::egui;

pub fn draw(ui: &mut egui::Ui, summary: &str, thumbnail: Option<&egui::TextureHandle>) {
    ui.vertical_centered(|ui| {
        if !summary.is_empty() {
            ui.label(egui::RichText::new(summary).strong().size(15.0));
        }
        if let Some(tex) = thumbnail {
            ui.add_space(6.0);
            ui.image((tex.id(), tex.size_vec2()));
        }
    });
}
