// src/gui/view.rs
//
// What the window shows. The runner writes here through `DisplaySink`;
// `App::update` reads it every frame.

use std::collections::VecDeque;

use eframe::egui::ColorImage;
use tracing::warn;

use crate::{
    display::{DisplaySink, Notice, NoticeKind},
    runner::Stage,
};

use super::thumbnail;

/// Pending change to the thumbnail texture, consumed by the next frame.
#[derive(Default)]
pub enum ImageSlot {
    #[default]
    Unchanged,
    Clear,
    Set(ColorImage),
}

pub struct GuiView {
    pub summary: String,
    pub details: String,
    pub image: ImageSlot,
    /// Shown one at a time as modals, oldest first
    pub notices: VecDeque<Notice>,
    pub stage: Stage,
    thumbnail_px: u32,
}

impl GuiView {
    pub fn new(thumbnail_px: u32) -> Self {
        Self {
            summary: s!(),
            details: s!(),
            image: ImageSlot::Unchanged,
            notices: VecDeque::new(),
            stage: Stage::Idle,
            thumbnail_px,
        }
    }

    pub fn status(&self) -> &'static str {
        match self.stage {
            Stage::Idle => "Idle",
            Stage::Fetching => "Fetching page…",
            Stage::Extracting => "Reading page…",
            Stage::Rendering => "Loading image…",
            Stage::Exporting => "Saving files…",
            Stage::Failed => "Failed",
        }
    }
}

impl DisplaySink for GuiView {
    fn stage(&mut self, stage: Stage) {
        self.stage = stage;
    }

    fn show_summary(&mut self, text: &str) {
        self.summary = s!(text);
    }

    fn show_details(&mut self, lines: &[String]) {
        self.details = lines.join("\n");
    }

    fn show_image(&mut self, bytes: Option<&[u8]>) {
        self.image = match bytes {
            None => ImageSlot::Clear,
            Some(b) => match thumbnail::decode(b, self.thumbnail_px) {
                Ok(img) => ImageSlot::Set(img),
                Err(e) => {
                    warn!("UI: thumbnail decode failed: {e}");
                    self.notify(NoticeKind::Warning, &format!("Failed to load image: {e}"));
                    ImageSlot::Clear
                }
            },
        };
    }

    fn notify(&mut self, kind: NoticeKind, message: &str) {
        self.notices.push_back(Notice { kind, message: s!(message) });
    }
}
