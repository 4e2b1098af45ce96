// src/runner.rs
//
// One full run per user action:
//   URL → page GET → parse → extract → image GET → display → CSV → PDF
// Field absence is handled inside `specs`; here only transport and render
// failures stop the run.

use std::path::PathBuf;

use tracing::{debug, error, info, warn};
use url::Url;

use crate::{
    config::options::AppOptions,
    core::{html::Document, net::{FetchError, Transport}},
    display::{detail_lines, summary_line, DisplaySink, NoticeKind},
    error::PipelineError,
    export::{export_csv, export_pdf},
    record::ProductRecord,
    specs,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Fetching,
    Extracting,
    Rendering,
    Exporting,
    Failed,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub record: ProductRecord,
    pub csv_path: Option<PathBuf>,
    pub pdf_path: Option<PathBuf>,
    pub warnings: usize,
}

/// Run the pipeline once. Every outcome is also reported through `sink`
/// (errors as an `Error` notice); the `Result` is for callers that need it.
pub fn run(
    url: &str,
    transport: &dyn Transport,
    sink: &mut dyn DisplaySink,
    opts: &AppOptions,
) -> Result<RunSummary, PipelineError> {
    match run_stages(url, transport, sink, opts) {
        Ok(summary) => {
            sink.stage(Stage::Idle);
            Ok(summary)
        }
        Err(e) => {
            error!("Run: failed: {e}");
            sink.stage(Stage::Failed);
            sink.notify(NoticeKind::Error, &e.user_message());
            sink.stage(Stage::Idle);
            Err(e)
        }
    }
}

fn run_stages(
    url: &str,
    transport: &dyn Transport,
    sink: &mut dyn DisplaySink,
    opts: &AppOptions,
) -> Result<RunSummary, PipelineError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(PipelineError::EmptyUrl);
    }

    // 1. Page
    sink.stage(Stage::Fetching);
    info!("Run: begin url={url}");
    let page_url = Url::parse(url).map_err(|source| FetchError::InvalidUrl { url: s!(url), source })?;
    let html = transport.get_text(page_url.as_str(), Some(opts.fetch.page_timeout))?;
    debug!("Run: page {} bytes", html.len());

    // 2. Parse + extract
    sink.stage(Stage::Extracting);
    let extraction = specs::extract(&Document::parse(&html));
    let mut warnings = 0usize;

    // 3. Image, shown as soon as it arrives
    sink.stage(Stage::Rendering);
    let image = match extraction.image_url.as_deref() {
        Some(raw) => match fetch_image(transport, &page_url, raw) {
            Ok(bytes) => {
                sink.show_image(Some(&bytes));
                Some(bytes)
            }
            Err(e) => {
                warn!("Run: image fetch failed: {e}");
                warnings += 1;
                sink.show_image(None);
                sink.notify(NoticeKind::Warning, &format!("Failed to load image: {e}"));
                None
            }
        },
        None => {
            warn!("Run: no product image tag");
            warnings += 1;
            sink.show_image(None);
            sink.notify(NoticeKind::Warning, "Could not find product image");
            None
        }
    };

    let record = extraction.into_record(image);
    sink.show_summary(&summary_line(&record));
    sink.show_details(&detail_lines(&record));

    // 4. Export
    sink.stage(Stage::Exporting);
    let export = &opts.export;

    let csv_path = if export.csv {
        let p = export_csv(&record, export)?;
        sink.notify(NoticeKind::Info, &format!("CSV saved as {}", p.display()));
        Some(p)
    } else {
        None
    };

    let pdf_path = if export.pdf {
        let p = export_pdf(&record, export)?;
        sink.notify(NoticeKind::Info, &format!("PDF saved as {}", p.display()));
        Some(p)
    } else {
        None
    };

    info!("Run: OK name={:?} details={} warnings={warnings}", record.name, record.details.len());
    Ok(RunSummary { record, csv_path, pdf_path, warnings })
}

/// Resolve `raw` against the page URL and GET it with no timeout.
pub fn fetch_image(transport: &dyn Transport, page: &Url, raw: &str) -> Result<Vec<u8>, FetchError> {
    let url = page
        .join(raw)
        .map_err(|source| FetchError::InvalidUrl { url: s!(raw), source })?;
    debug!("Run: image url={url}");
    transport.get(url.as_str(), None)
}
