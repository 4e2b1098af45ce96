// tests/pipeline.rs
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use httpmock::prelude::*;
use image::{ImageFormat, Rgb, RgbImage};

use listing_scrape::config::consts::USER_AGENT;
use listing_scrape::config::options::AppOptions;
use listing_scrape::core::net::{FetchError, HttpTransport, Transport};
use listing_scrape::display::{NoticeKind, NullDisplay, Recorder};
use listing_scrape::error::PipelineError;
use listing_scrape::runner::{self, Stage};
use listing_scrape::s;

const FIXTURE: &str = include_str!("fixtures/listing.html");
const PAGE: &str = "https://shop.example/dp/B0KETTLE";
const IMAGE: &str = "https://shop.example/images/I/kettle._SL1500_.jpg";

/// Canned responses by URL. Unknown URLs answer 404.
#[derive(Default)]
struct FakeTransport {
    responses: HashMap<String, Result<Vec<u8>, String>>,
    calls: RefCell<Vec<(String, Option<Duration>)>>,
}

impl FakeTransport {
    fn with(mut self, url: &str, body: Result<Vec<u8>, &str>) -> Self {
        self.responses.insert(s!(url), body.map_err(String::from));
        self
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, FetchError> {
        self.calls.borrow_mut().push((s!(url), timeout));
        match self.responses.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(msg)) => Err(FetchError::Other(msg.clone())),
            None => Err(FetchError::Status { code: 404, url: s!(url) }),
        }
    }
}

fn png() -> Vec<u8> {
    let mut buf = Vec::new();
    RgbImage::from_pixel(32, 24, Rgb([20, 120, 200]))
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

fn options_in(dir: &Path) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.export = opts.export.with_out_dir(dir);
    opts
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = match fs::read_dir(dir) {
        Ok(rd) => rd.map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}

const STEM: &str = "Acme Electric Kettle, 1.7 Litr";

#[test]
fn empty_url_makes_no_network_calls() {
    let tmp = tempfile::tempdir().unwrap();
    let t = FakeTransport::default();
    let mut rec = Recorder::default();

    let err = runner::run("   ", &t, &mut rec, &options_in(tmp.path())).unwrap_err();

    assert!(matches!(err, PipelineError::EmptyUrl));
    assert_eq!(t.call_count(), 0);
    assert_eq!(rec.notices_of(NoticeKind::Error), vec!["Please enter a URL"]);
    assert_eq!(rec.stages, vec![Stage::Failed, Stage::Idle]);
    assert!(files_in(tmp.path()).is_empty());
}

#[test]
fn unparseable_url_is_a_fetch_error() {
    let t = FakeTransport::default();
    let mut rec = Recorder::default();

    let err = runner::run("not a url", &t, &mut rec, &AppOptions::default()).unwrap_err();

    assert!(matches!(err, PipelineError::Fetch(FetchError::InvalidUrl { .. })));
    assert_eq!(t.call_count(), 0);
}

#[test]
fn full_run_shows_and_saves_everything() {
    let tmp = tempfile::tempdir().unwrap();
    let img = png();
    let t = FakeTransport::default()
        .with(PAGE, Ok(FIXTURE.as_bytes().to_vec()))
        .with(IMAGE, Ok(img.clone()));
    let mut rec = Recorder::default();

    let summary = runner::run(PAGE, &t, &mut rec, &options_in(tmp.path())).unwrap();

    // Page has a timeout, the image does not
    let calls = t.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], (s!(PAGE), Some(Duration::from_secs(10))));
    assert_eq!(calls[1], (s!(IMAGE), None));

    assert_eq!(rec.summary.as_deref(), Some("Acme Electric Kettle, 1.7 Litre, Brushed Steel - £29..99"));
    assert_eq!(rec.details[0], "Price: £29..99");
    assert_eq!(rec.details[1], "Brand: Acme Home");
    assert_eq!(rec.image.as_deref(), Some(img.as_slice()));
    assert!(rec.notices_of(NoticeKind::Warning).is_empty());
    assert_eq!(
        rec.stages,
        vec![Stage::Fetching, Stage::Extracting, Stage::Rendering, Stage::Exporting, Stage::Idle]
    );

    let info = rec.notices_of(NoticeKind::Info);
    assert_eq!(info.len(), 2);
    assert!(info[0].starts_with("CSV saved as ") && info[0].ends_with(".csv"));
    assert!(info[1].starts_with("PDF saved as ") && info[1].ends_with(".pdf"));

    assert_eq!(summary.warnings, 0);
    assert_eq!(summary.record.image.as_deref(), Some(img.as_slice()));
    assert_eq!(files_in(tmp.path()), vec![format!("{STEM}.csv"), format!("{STEM}.pdf")]);
}

#[test]
fn image_is_shown_before_summary_and_details() {
    let tmp = tempfile::tempdir().unwrap();
    let t = FakeTransport::default()
        .with(PAGE, Ok(FIXTURE.as_bytes().to_vec()))
        .with(IMAGE, Ok(png()));
    let mut rec = Recorder::default();

    runner::run(PAGE, &t, &mut rec, &options_in(tmp.path())).unwrap();

    let display: Vec<&str> = rec.events.iter().copied().filter(|e| *e != "stage").collect();
    assert_eq!(display, vec!["image", "summary", "details", "notify", "notify"]);
}

#[test]
fn failed_image_is_cleared_before_summary() {
    let tmp = tempfile::tempdir().unwrap();
    let t = FakeTransport::default()
        .with(PAGE, Ok(FIXTURE.as_bytes().to_vec()))
        .with(IMAGE, Err("timed out"));
    let mut rec = Recorder::default();

    runner::run(PAGE, &t, &mut rec, &options_in(tmp.path())).unwrap();

    let display: Vec<&str> = rec.events.iter().copied().filter(|e| *e != "stage").collect();
    assert_eq!(display[..4], ["image", "notify", "summary", "details"]);
}

#[test]
fn page_transport_error_creates_no_files() {
    let tmp = tempfile::tempdir().unwrap();
    let t = FakeTransport::default().with(PAGE, Err("connection reset"));
    let mut rec = Recorder::default();

    let err = runner::run(PAGE, &t, &mut rec, &options_in(tmp.path())).unwrap_err();

    assert!(matches!(err, PipelineError::Fetch(_)));
    assert_eq!(t.call_count(), 1);
    assert_eq!(
        rec.notices_of(NoticeKind::Error),
        vec!["Failed to fetch the product page: connection reset"]
    );
    assert!(rec.summary.is_none());
    assert!(files_in(tmp.path()).is_empty());
}

#[test]
fn missing_image_tag_warns_and_still_exports() {
    let tmp = tempfile::tempdir().unwrap();
    let html = FIXTURE.replace("id=\"landingImage\"", "id=\"otherImage\"");
    let t = FakeTransport::default().with(PAGE, Ok(html.into_bytes()));
    let mut rec = Recorder::default();

    let summary = runner::run(PAGE, &t, &mut rec, &options_in(tmp.path())).unwrap();

    assert_eq!(t.call_count(), 1);
    assert_eq!(rec.notices_of(NoticeKind::Warning), vec!["Could not find product image"]);
    assert_eq!(rec.image_calls, 1);
    assert!(rec.image.is_none());
    assert_eq!(summary.warnings, 1);
    assert_eq!(files_in(tmp.path()).len(), 2);
}

#[test]
fn image_fetch_failure_warns_and_exports_without_image() {
    let tmp = tempfile::tempdir().unwrap();
    let t = FakeTransport::default()
        .with(PAGE, Ok(FIXTURE.as_bytes().to_vec()))
        .with(IMAGE, Err("timed out"));
    let mut rec = Recorder::default();

    let summary = runner::run(PAGE, &t, &mut rec, &options_in(tmp.path())).unwrap();

    assert_eq!(rec.notices_of(NoticeKind::Warning), vec!["Failed to load image: timed out"]);
    assert!(summary.record.image.is_none());
    assert!(summary.pdf_path.is_some_and(|p| p.exists()));
}

#[test]
fn export_flags_skip_artifacts() {
    let tmp = tempfile::tempdir().unwrap();
    let t = FakeTransport::default()
        .with(PAGE, Ok(FIXTURE.as_bytes().to_vec()))
        .with(IMAGE, Ok(png()));
    let mut opts = options_in(tmp.path());
    opts.export.pdf = false;

    let summary = runner::run(PAGE, &t, &mut NullDisplay, &opts).unwrap();

    assert!(summary.csv_path.is_some());
    assert!(summary.pdf_path.is_none());
    assert_eq!(files_in(tmp.path()), vec![format!("{STEM}.csv")]);
}

#[test]
fn placeholder_page_still_exports() {
    let tmp = tempfile::tempdir().unwrap();
    let t = FakeTransport::default().with(PAGE, Ok(b"<html><body>Robot check</body></html>".to_vec()));
    let mut rec = Recorder::default();

    let summary = runner::run(PAGE, &t, &mut rec, &options_in(tmp.path())).unwrap();

    assert_eq!(summary.record.name, "Product name not found");
    assert_eq!(summary.record.price, "Price not found");
    assert_eq!(
        files_in(tmp.path()),
        vec![s!("Product name not found.csv"), s!("Product name not found.pdf")]
    );
}

// Real HTTP through `HttpTransport`

#[test]
fn http_run_against_mock_server() {
    let server = MockServer::start();
    let img = png();
    let page = server.mock(|when, then| {
        when.method(GET).path("/dp/B0KETTLE").header("user-agent", USER_AGENT);
        then.status(200).header("content-type", "text/html; charset=utf-8").body(FIXTURE);
    });
    let image = server.mock(|when, then| {
        when.method(GET).path("/images/I/kettle._SL1500_.jpg");
        then.status(200).header("content-type", "image/png").body(&img);
    });

    let tmp = tempfile::tempdir().unwrap();
    let opts = options_in(tmp.path());
    let transport = HttpTransport::new(&opts.fetch).unwrap();
    let mut rec = Recorder::default();

    let summary = runner::run(&server.url("/dp/B0KETTLE"), &transport, &mut rec, &opts).unwrap();

    page.assert();
    image.assert();
    assert_eq!(summary.record.image.as_deref(), Some(img.as_slice()));
    assert_eq!(summary.record.details.get("Colour"), Some("Brushed Steel"));
    assert_eq!(files_in(tmp.path()).len(), 2);
}

#[test]
fn http_404_page_is_a_fetch_error() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/dp/GONE");
        then.status(404).body("Not Found");
    });

    let tmp = tempfile::tempdir().unwrap();
    let opts = options_in(tmp.path());
    let transport = HttpTransport::new(&opts.fetch).unwrap();
    let mut rec = Recorder::default();

    let err = runner::run(&server.url("/dp/GONE"), &transport, &mut rec, &opts).unwrap_err();

    page.assert();
    assert!(matches!(err, PipelineError::Fetch(FetchError::Status { code: 404, .. })));
    let errors = rec.notices_of(NoticeKind::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Failed to fetch the product page: HTTP 404 for url"));
    assert!(files_in(tmp.path()).is_empty());
}

#[test]
fn http_image_error_is_only_a_warning() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/dp/B0KETTLE");
        then.status(200).body(FIXTURE);
    });
    server.mock(|when, then| {
        when.method(GET).path("/images/I/kettle._SL1500_.jpg");
        then.status(500);
    });

    let tmp = tempfile::tempdir().unwrap();
    let opts = options_in(tmp.path());
    let transport = HttpTransport::new(&opts.fetch).unwrap();
    let mut rec = Recorder::default();

    let summary = runner::run(&server.url("/dp/B0KETTLE"), &transport, &mut rec, &opts).unwrap();

    let warnings = rec.notices_of(NoticeKind::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("Failed to load image: HTTP 500"));
    assert!(summary.record.image.is_none());
    assert_eq!(files_in(tmp.path()).len(), 2);
}

#[test]
fn http_page_is_decoded_by_its_charset() {
    let server = MockServer::start();
    // windows-1252: 0xA3 is the pound sign
    let body = b"<html><body><span id=\"productTitle\">Kettle \xA3 deal</span>\
<span class=\"a-price-whole\">5</span></body></html>";
    server.mock(|when, then| {
        when.method(GET).path("/dp/LATIN1");
        then.status(200)
            .header("content-type", "text/html; charset=windows-1252")
            .body(&body[..]);
    });

    let tmp = tempfile::tempdir().unwrap();
    let opts = options_in(tmp.path());
    let transport = HttpTransport::new(&opts.fetch).unwrap();

    let summary = runner::run(&server.url("/dp/LATIN1"), &transport, &mut NullDisplay, &opts).unwrap();

    assert_eq!(summary.record.name, "Kettle £ deal");
    assert_eq!(summary.record.price, "£5");
}
