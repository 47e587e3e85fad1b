//! Document rendering backends.
//!
//! The pipeline talks to renderers only through [`DocumentRenderer`], so the
//! backend producing the actual files is swappable. The shipped backend is
//! [`HtmlRenderer`]; the trait is the seam where a PDF or other paginated
//! backend would plug in.

use std::path::Path;

use anyhow::Result;
use serde_json::Value;

pub mod html;

pub use html::HtmlRenderer;

/// A backend that turns one validated record into one document file.
pub trait DocumentRenderer {
    /// File extension (without the dot) for documents this backend writes.
    fn extension(&self) -> &str;

    /// Render `record` (a validated JSON mapping) to `output_path`.
    ///
    /// `title_override`, when non-empty, takes precedence over the record's
    /// own `name` for the document heading. A failure applies to this one
    /// document only; callers log it and move on.
    fn render(
        &self,
        record: &Value,
        output_path: &Path,
        title_override: Option<&str>,
    ) -> Result<()>;
}

/// Escape free text for HTML-style markup and turn newlines into explicit
/// line breaks.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\n', "<br/>")
}
