// src/gui/actions/fetch.rs
use tracing::{error, info};

use crate::{
    core::net::HttpTransport,
    display::{DisplaySink, NoticeKind},
    error::PipelineError,
    gui::app::App,
    runner,
};

/// Click handler for "Fetch Product Details". Blocks the UI until the run ends.
pub fn fetch(app: &mut App) {
    app.state.options.export.set_out_dir(&app.state.gui.out_dir_text);

    if app.transport.is_none() {
        match HttpTransport::new(&app.state.options.fetch) {
            Ok(t) => app.transport = Some(t),
            Err(e) => {
                error!("Fetch: client setup failed: {e}");
                app.view.notify(NoticeKind::Error, &PipelineError::from(e).user_message());
                return;
            }
        }
    }
    let Some(transport) = app.transport.as_ref() else { return };

    // Errors are already on screen as a notice
    if let Ok(summary) = runner::run(&app.url_text, transport, &mut app.view, &app.state.options) {
        info!("Fetch: done, warnings={}", summary.warnings);
    }
}
