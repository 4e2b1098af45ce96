// src/log.rs
//
// tracing → `.store/debug.log` (append), timestamped with time since start.
// The CLI also mirrors events to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{
    fmt::{self, time::Uptime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::consts::{LOG_FILE, LOG_FILTER, LOG_FILTER_VERBOSE, STORE_DIR};

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored. If the log file can't be opened, events go to stderr instead.
pub fn init(verbose: bool, console: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { LOG_FILTER_VERBOSE } else { LOG_FILTER })
    });

    let file = fs::create_dir_all(STORE_DIR)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(log_path()))
        .ok();
    let console = console || file.is_none();

    let file_layer = file.map(|f| {
        fmt::layer()
            .with_writer(Mutex::new(f))
            .with_ansi(false)
            .with_timer(Uptime::default())
            .with_target(false)
    });

    let console_layer = console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .compact()
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();
}
