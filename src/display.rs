// src/display.rs
//! Display surface the runner writes to. Frontends (GUI/CLI) implement
//! [`DisplaySink`]; every method defaults to a no-op so a sink only
//! overrides what it shows.

use crate::record::ProductRecord;
use crate::runner::Stage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    pub fn title(self) -> &'static str {
        match self {
            NoticeKind::Error => "Error",
            NoticeKind::Warning => "Warning",
            NoticeKind::Info => "Success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub trait DisplaySink {
    /// Pipeline moved to `stage`.
    fn stage(&mut self, _stage: Stage) {}

    /// One-line `"{name} - {price}"`.
    fn show_summary(&mut self, _text: &str) {}

    /// Price line followed by one line per detail.
    fn show_details(&mut self, _lines: &[String]) {}

    /// Raw encoded image, or `None` to clear a previous one.
    fn show_image(&mut self, _bytes: Option<&[u8]>) {}

    fn notify(&mut self, _kind: NoticeKind, _message: &str) {}
}

/// A no-op sink.
pub struct NullDisplay;
impl DisplaySink for NullDisplay {}

/// Keeps everything it is shown. Headless runs and tests read it back.
#[derive(Default, Debug)]
pub struct Recorder {
    pub stages: Vec<Stage>,
    pub summary: Option<String>,
    pub details: Vec<String>,
    pub image: Option<Vec<u8>>,
    pub image_calls: usize,
    pub notices: Vec<Notice>,
    /// Every call in arrival order: `stage`, `summary`, `details`, `image`, `notify`
    pub events: Vec<&'static str>,
}

impl Recorder {
    pub fn notices_of(&self, kind: NoticeKind) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.as_str())
            .collect()
    }
}

impl DisplaySink for Recorder {
    fn stage(&mut self, stage: Stage) {
        self.events.push("stage");
        self.stages.push(stage);
    }
    fn show_summary(&mut self, text: &str) {
        self.events.push("summary");
        self.summary = Some(s!(text));
    }
    fn show_details(&mut self, lines: &[String]) {
        self.events.push("details");
        self.details = lines.to_vec();
    }
    fn show_image(&mut self, bytes: Option<&[u8]>) {
        self.events.push("image");
        self.image_calls += 1;
        self.image = bytes.map(<[u8]>::to_vec);
    }
    fn notify(&mut self, kind: NoticeKind, message: &str) {
        self.events.push("notify");
        self.notices.push(Notice { kind, message: s!(message) });
    }
}

pub fn summary_line(record: &ProductRecord) -> String {
    format!("{} - {}", record.name, record.price)
}

pub fn detail_lines(record: &ProductRecord) -> Vec<String> {
    let mut lines = Vec::with_capacity(record.details.len() + 1);
    lines.push(format!("Price: {}", record.price));
    for (k, v) in record.details.iter() {
        lines.push(format!("{k}: {v}"));
    }
    lines
}
