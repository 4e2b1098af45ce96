// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use listing_scrape::{
    config::{consts::WINDOW_TITLE, state::GuiState},
    gui, log,
};

fn main() {
    log::init(false, false);

    let gui = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([gui.window_w, gui.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        tracing::error!("GUI failed: {e}");
        eprintln!("GUI failed: {e}");
        std::process::exit(1);
    }
}
