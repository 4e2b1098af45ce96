// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Bound on the page GET. The image GET is never bounded.
    pub page_timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            page_timeout: Duration::from_secs(PAGE_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

/// What to do when `<stem>.<ext>` already exists in the output directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Collision {
    #[default]
    Overwrite,
    /// `<stem> (2).<ext>`, `<stem> (3).<ext>`, …
    Dedupe,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Empty means the process working directory.
    out_dir: PathBuf,
    pub stem_max_chars: usize,
    pub collision: Collision,
    pub csv: bool,
    pub pdf: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::new(),
            stem_max_chars: STEM_MAX_CHARS,
            collision: Collision::Overwrite,
            csv: true,
            pdf: true,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse user text into the output directory. Blank resets to the working directory.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() { PathBuf::new() } else { PathBuf::from(s) };
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }
}
