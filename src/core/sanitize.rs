// src/core/sanitize.rs

/// Characters that are illegal in a file name on at least one of Windows/macOS/Linux.
fn is_unsafe_in_filename(ch: char) -> bool {
    matches!(ch, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || ch.is_control()
}

/// File stem from a product name: the first `max_chars` characters, each unsafe
/// character replaced by `_`. A trailing `.` or space also becomes `_` (Windows
/// strips those silently). One-for-one replacement, so the stem keeps exactly
/// `min(max_chars, name.chars().count())` characters.
///
/// Returns `fallback` when the name is empty.
pub fn filename_stem(name: &str, max_chars: usize, fallback: &str) -> String {
    let mut out: Vec<char> = name
        .chars()
        .take(max_chars)
        .map(|ch| if is_unsafe_in_filename(ch) { '_' } else { ch })
        .collect();

    if let Some(last) = out.last_mut() {
        if *last == '.' || *last == ' ' {
            *last = '_';
        }
    }
    if out.is_empty() {
        return s!(fallback);
    }
    out.into_iter().collect()
}
