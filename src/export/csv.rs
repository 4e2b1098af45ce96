// src/export/csv.rs
use std::io::Write;
use std::path::PathBuf;

use ::csv::{Writer, WriterBuilder};
use tracing::info;

use super::{ABOUT_LABEL, ABOUT_SEPARATOR};
use crate::config::options::ExportOptions;
use crate::error::PipelineError;
use crate::file::output_path;
use crate::record::ProductRecord;

/// The two-column rows for one record, in file order.
pub fn record_rows(record: &ProductRecord) -> Vec<[String; 2]> {
    let mut rows = Vec::with_capacity(record.details.len() + 3);
    rows.push([s!("Product Name"), record.name.clone()]);
    rows.push([s!("Price"), record.price.clone()]);
    for (k, v) in record.details.iter() {
        rows.push([s!(k), s!(v)]);
    }
    // Always present, even with no bullets
    rows.push([s!(ABOUT_LABEL), record.about_items.join(ABOUT_SEPARATOR)]);
    rows
}

/// Write the record's rows to any writer. No header row.
pub fn write_record<W: Write>(w: W, record: &ProductRecord) -> Result<(), PipelineError> {
    let mut out: Writer<W> = WriterBuilder::new().has_headers(false).from_writer(w);
    for row in record_rows(record) {
        out.write_record(&row)?;
    }
    out.flush()?;
    Ok(())
}

/// `<stem>.csv` in the output directory, created or truncated.
pub fn export_csv(record: &ProductRecord, export: &ExportOptions) -> Result<PathBuf, PipelineError> {
    let path = output_path(&record.name, "csv", export)?;
    let file = std::fs::File::create(&path)?;
    write_record(file, record)?;
    info!("Export: CSV → {}", path.display());
    Ok(path)
}
