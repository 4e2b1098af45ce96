// src/export/mod.rs
//
// Record → durable artifact. Each exporter opens its file, writes once and
// drops the handle before returning.

pub mod csv;
pub mod pdf;

pub use self::csv::export_csv;
pub use self::pdf::export_pdf;

/// Separator between "About this item" bullets in flat (one-cell) output.
pub const ABOUT_SEPARATOR: &str = " \u{2022} ";
pub const ABOUT_LABEL: &str = "About this item";
pub const ABOUT_HEADING: &str = "About this item:";
