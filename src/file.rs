// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::config::consts::STEM_FALLBACK;
use crate::config::options::{Collision, ExportOptions};
use crate::core::sanitize::filename_stem;

/// Where the `<ext>` artifact for a product called `name` goes.
/// Creates the output directory if needed.
pub fn output_path(name: &str, ext: &str, export: &ExportOptions) -> io::Result<PathBuf> {
    let dir = export.out_dir();
    if !dir.as_os_str().is_empty() {
        ensure_directory(dir)?;
    }

    let stem = filename_stem(name, export.stem_max_chars, STEM_FALLBACK);
    Ok(match export.collision {
        Collision::Overwrite => dir.join(join!(&stem, ".", ext)),
        Collision::Dedupe => next_free_path(dir, &stem, ext),
    })
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// First of `<stem>.<ext>`, `<stem> (2).<ext>`, `<stem> (3).<ext>`, … not on disk.
pub fn next_free_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let first = dir.join(format!("{stem}.{ext}"));
    if !first.exists() {
        return first;
    }
    (2usize..)
        .map(|n| dir.join(format!("{stem} ({n}).{ext}")))
        .find(|p| !p.exists())
        .unwrap_or(first)
}
