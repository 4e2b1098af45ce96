// src/config/state.rs
use super::consts::THUMBNAIL_PX;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Bounding box for the thumbnail, in pixels (square)
    pub thumbnail_px: u32,

    /// Output folder as typed; applied to `options.export` on fetch
    pub out_dir_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 520.0,
            window_h: 680.0,
            thumbnail_px: THUMBNAIL_PX,
            out_dir_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
