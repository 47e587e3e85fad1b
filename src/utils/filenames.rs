use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::extractor::UNTITLED;

// Maximum length of a sanitized filename stem
const MAX_STEM_CHARS: usize = 100;

// Everything except word characters, whitespace, and hyphens is dropped
static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap_or_else(|e| panic!("invalid regex: {e}")));

/// Sanitize a title into a filename stem.
///
/// Keeps only word characters, whitespace, and hyphens, trims surrounding
/// whitespace, and caps the result at 100 characters. An empty result
/// (including an empty or all-punctuation input) falls back to `"Untitled"`.
///
/// # Examples
///
/// ```
/// use export_formatter::utils::sanitize_title;
///
/// assert_eq!(sanitize_title("Firewall: Main/Office!"), "Firewall MainOffice");
/// assert_eq!(sanitize_title("///"), "Untitled");
/// ```
pub fn sanitize_title(title: &str) -> String {
    let cleaned = UNSAFE_CHARS.replace_all(title, "");
    let capped: String = cleaned.trim().chars().take(MAX_STEM_CHARS).collect();

    if capped.is_empty() { UNTITLED.to_string() } else { capped }
}

/// Derive a collision-free output path for a record title.
///
/// Sanitizes the title into a stem and probes `output_dir` for an unused
/// name, numbering collisions as `stem_1.ext`, `stem_2.ext`, and so on in
/// first-seen order. Existing files are never overwritten.
///
/// Safe only for a single-threaded run where each allocated path is written
/// immediately; there is no reservation step, so concurrent writers could
/// race between the probe and the write.
pub fn allocate_output_path(title: &str, output_dir: &Path, extension: &str) -> PathBuf {
    let stem = sanitize_title(title);

    let mut candidate = output_dir.join(format!("{stem}.{extension}"));
    let mut counter = 1;
    while candidate.exists() {
        candidate = output_dir.join(format!("{stem}_{counter}.{extension}"));
        counter += 1;
    }
    candidate
}
