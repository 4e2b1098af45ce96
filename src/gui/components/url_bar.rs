// src/gui/components/url_bar.rs
use eframe::egui;

/// URL field plus the fetch button. True when a fetch was requested
/// (button click or Enter in the field).
pub fn draw(ui: &mut egui::Ui, url: &mut String) -> bool {
    ui.label("Amazon product URL:");
    let field = ui.add(
        egui::TextEdit::singleline(url)
            .hint_text("https://www.amazon.co.uk/dp/…")
            .desired_width(f32::INFINITY),
    );
    let entered = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    let clicked = ui.button("Fetch Product Details").clicked();
    entered || clicked
}
