// src/gui/components/notice.rs
use std::collections::VecDeque;

use eframe::egui;

use crate::display::{Notice, NoticeKind};

/// Modal for the oldest queued notice; OK (or Escape / click outside)
/// dismisses it and the next one shows on the following frame.
pub fn draw(ctx: &egui::Context, queue: &mut VecDeque<Notice>) {
    let Some(notice) = queue.front() else { return };

    let modal = egui::Modal::new(egui::Id::new("notice")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.heading(egui::RichText::new(notice.kind.title()).color(color(notice.kind)));
        ui.add_space(6.0);
        ui.label(&notice.message);
        ui.add_space(10.0);
        ui.button("OK").clicked()
    });

    if modal.inner || modal.should_close() {
        queue.pop_front();
    }
}

fn color(kind: NoticeKind) -> egui::Color32 {
    match kind {
        NoticeKind::Error => egui::Color32::from_rgb(200, 60, 60),
        NoticeKind::Warning => egui::Color32::from_rgb(210, 150, 40),
        NoticeKind::Info => egui::Color32::from_rgb(60, 150, 80),
    }
}
