// src/gui/app.rs
use std::error::Error;

use eframe::egui;
use tracing::info;

use crate::{
    config::{consts::WINDOW_TITLE, state::AppState},
    core::net::HttpTransport,
};

use super::{
    actions,
    components::{details, notice, summary, url_bar},
    view::{GuiView, ImageSlot},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // UI thread only
    pub state: AppState,
    pub url_text: String,

    // What the last run produced; the runner writes here
    pub view: GuiView,
    pub texture: Option<egui::TextureHandle>,

    // Built on first fetch, reused after
    pub transport: Option<HttpTransport>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        state.gui.out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();
        info!("Init: out_dir={:?}", state.gui.out_dir_text);
        Self {
            view: GuiView::new(state.gui.thumbnail_px),
            state,
            url_text: s!(),
            texture: None,
            transport: None,
        }
    }

    /// Apply a pending thumbnail change from the last run.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        match std::mem::take(&mut self.view.image) {
            ImageSlot::Unchanged => {}
            ImageSlot::Clear => self.texture = None,
            ImageSlot::Set(img) => {
                self.texture = Some(ctx.load_texture("thumbnail", img, egui::TextureOptions::LINEAR));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_texture(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.view.status());
                ui.separator();
                ui.label("Output folder:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.state.gui.out_dir_text)
                        .hint_text("current folder")
                        .desired_width(f32::INFINITY),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if url_bar::draw(ui, &mut self.url_text) {
                actions::fetch(self);
            }
            ui.add_space(8.0);
            summary::draw(ui, &self.view.summary, self.texture.as_ref());
            ui.add_space(8.0);
            details::draw(ui, &self.view.details);
        });

        notice::draw(ctx, &mut self.view.notices);
    }
}
