use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::{nested_text, value_to_text};
use crate::render::{DocumentRenderer, escape_text};

const DEFAULT_TITLE: &str = "Configuration Report";

const STYLE: &str = "\
body { font-family: Courier, monospace; max-width: 48em; margin: 2em auto; }
img.logo { display: block; margin: 0 auto 1em auto; max-height: 72px; }
table.meta td, table.meta th { text-align: left; vertical-align: top; border-bottom: 1px solid #ddd; padding: 2px 8px; }
table.questions { border-collapse: collapse; width: 100%; }
table.questions th { background: #e0e0e0; }
table.questions td, table.questions th { border: 1px solid #888; vertical-align: top; padding: 4px; }";

/// HTML rendering backend.
///
/// Produces one standalone document per record: an optional branding image,
/// a title heading, a metadata table of the non-empty identity fields, a
/// notes section when present, and a Setting/Value table built from the
/// record's `questions` sequence.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    logo_path: Option<PathBuf>,
}

impl HtmlRenderer {
    pub fn new(logo_path: Option<PathBuf>) -> Self {
        Self { logo_path }
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn extension(&self) -> &str {
        "html"
    }

    fn render(
        &self,
        record: &Value,
        output_path: &Path,
        title_override: Option<&str>,
    ) -> Result<()> {
        let document = build_document(record, title_override, self.logo_path.as_deref())?;
        fs::write(output_path, document)
            .with_context(|| format!("Failed to write document: {}", output_path.display()))?;
        Ok(())
    }
}

fn build_document(
    record: &Value,
    title_override: Option<&str>,
    logo_path: Option<&Path>,
) -> Result<String> {
    let display_title = match title_override {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => record
            .get("name")
            .map(value_to_text)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
    };

    let mut html = String::new();
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html><head><meta charset=\"utf-8\">")?;
    writeln!(html, "<title>{}</title>", escape_text(&display_title))?;
    writeln!(html, "<style>{STYLE}</style>")?;
    writeln!(html, "</head><body>")?;

    // Branding image, only when the configured file is actually there
    if let Some(logo) = logo_path
        && logo.exists()
    {
        writeln!(
            html,
            "<img class=\"logo\" src=\"{}\" alt=\"logo\">",
            escape_text(&logo.display().to_string())
        )?;
    }

    writeln!(html, "<h1>{}</h1>", escape_text(&display_title))?;

    write_metadata(&mut html, record)?;
    write_notes(&mut html, record)?;
    write_questions(&mut html, record)?;

    writeln!(html, "</body></html>")?;
    Ok(html)
}

fn write_metadata(html: &mut String, record: &Value) -> Result<()> {
    let rows = [
        ("Name:", record.get("name").map(value_to_text).unwrap_or_default()),
        ("Company:", nested_text(record, &["company", "name"])),
        ("Site:", nested_text(record, &["site", "name"])),
        ("Type:", nested_text(record, &["type", "name"])),
        ("Status:", nested_text(record, &["status", "name"])),
    ];

    // Empty rows are elided entirely
    let populated: Vec<_> = rows.iter().filter(|(_, value)| !value.is_empty()).collect();
    if populated.is_empty() {
        return Ok(());
    }

    writeln!(html, "<table class=\"meta\">")?;
    for (label, value) in populated {
        writeln!(html, "<tr><th>{label}</th><td>{}</td></tr>", escape_text(value))?;
    }
    writeln!(html, "</table>")?;
    Ok(())
}

fn write_notes(html: &mut String, record: &Value) -> Result<()> {
    let notes = record.get("notes").map(value_to_text).unwrap_or_default();
    let vendor = record.get("vendorNotes").map(value_to_text).unwrap_or_default();
    if notes.is_empty() && vendor.is_empty() {
        return Ok(());
    }

    writeln!(html, "<h3>Notes</h3>")?;
    if !notes.is_empty() {
        writeln!(html, "<p><b>General:</b> {}</p>", escape_text(&notes))?;
    }
    if !vendor.is_empty() {
        writeln!(html, "<p><b>Vendor:</b> {}</p>", escape_text(&vendor))?;
    }
    Ok(())
}

fn write_questions(html: &mut String, record: &Value) -> Result<()> {
    let Some(questions) = record.get("questions").and_then(Value::as_array) else {
        return Ok(());
    };

    let mut rows = Vec::new();
    for entry in questions {
        let Some(entry) = entry.as_object() else {
            continue;
        };
        let question = entry.get("question").map(value_to_text).unwrap_or_default();
        let question = question.trim();
        if question.is_empty() {
            continue;
        }
        let answer = entry.get("answer").map(value_to_text).unwrap_or_default();
        rows.push((question.to_string(), answer.trim().to_string()));
    }

    if rows.is_empty() {
        return Ok(());
    }

    writeln!(html, "<h3>Details</h3>")?;
    writeln!(html, "<table class=\"questions\">")?;
    writeln!(html, "<tr><th>Setting</th><th>Value</th></tr>")?;
    for (question, answer) in rows {
        writeln!(
            html,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_text(&question),
            escape_text(&answer)
        )?;
    }
    writeln!(html, "</table>")?;
    Ok(())
}
