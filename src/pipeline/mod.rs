//! Single-pass run orchestration.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Run-fatal errors**: only failing to open the input file or create the
//!   output directory aborts the run, via `anyhow::Result` with context.
//!
//! - **Per-record failures are contained**: a candidate that fails to decode
//!   is logged with its closing line number and a short prefix of the text;
//!   a decoded object that fails validation is logged at warning level; a
//!   render failure is logged with the target path. In every case the loop
//!   proceeds to the next line, and the counters in [`RunSummary`] record
//!   what happened.
//!
//! - **Byte-level tolerance**: the input is decoded lossily, so invalid
//!   UTF-8 sequences are replaced rather than failing the run.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::extractor::{Candidate, RecordExtractor};
use crate::models::{RunSummary, is_genuine_record};
use crate::render::DocumentRenderer;
use crate::utils::allocate_output_path;

const PROGRESS_INTERVAL: u64 = 10;
const ERROR_CONTEXT_CHARS: usize = 50;

/// Stream `input` once, extracting embedded JSON records and rendering each
/// valid one as a document in `output_dir` (created if absent).
///
/// Lines are read raw and decoded lossily, fed through the
/// [`RecordExtractor`], and each closed candidate is decoded, validated,
/// allocated a collision-free filename, and handed to `renderer`. All
/// per-record failures are logged and skipped.
///
/// # Errors
///
/// Returns an error only if the input file cannot be opened or read, or the
/// output directory cannot be created. Decode, validation, and render
/// failures never abort the run; they are tallied in the returned
/// [`RunSummary`].
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use export_formatter::{HtmlRenderer, process_file};
///
/// let renderer = HtmlRenderer::new(None);
/// let summary = process_file(Path::new("export.txt"), Path::new("out"), &renderer)?;
/// println!("Generated {} documents", summary.documents_created);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    renderer: &dyn DocumentRenderer,
) -> Result<RunSummary> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    info!("Starting processing of {}", input.display());

    let mut reader = BufReader::new(file);
    let mut extractor = RecordExtractor::new();
    let mut summary = RunSummary::default();

    let mut raw = Vec::new();
    loop {
        raw.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut raw)
            .with_context(|| format!("Failed to read from {}", input.display()))?;
        if bytes_read == 0 {
            break;
        }
        summary.lines_read += 1;

        let line = String::from_utf8_lossy(&raw);
        let line = line.trim_end_matches(['\n', '\r']);

        if let Some(candidate) = extractor.push_line(line) {
            resolve_candidate(&candidate, summary.lines_read, output_dir, renderer, &mut summary);
        }
    }

    if extractor.is_accumulating() {
        warn!("Unterminated candidate buffer at end of input; discarded");
    }

    info!("DONE. {summary}");
    Ok(summary)
}

/// Decode, validate, and render one closed candidate, containing every
/// failure locally.
fn resolve_candidate(
    candidate: &Candidate,
    line_number: u64,
    output_dir: &Path,
    renderer: &dyn DocumentRenderer,
    summary: &mut RunSummary,
) {
    let value: Value = match serde_json::from_str(&candidate.json_text) {
        Ok(value) => value,
        Err(e) => {
            let prefix: String = candidate.json_text.chars().take(ERROR_CONTEXT_CHARS).collect();
            error!("Line {line_number}: JSON parse error. Context: {prefix}... Error: {e}");
            summary.decode_failures += 1;
            return;
        }
    };

    if !is_genuine_record(&value) {
        warn!("Line {line_number}: skipped valid but empty/fragment JSON");
        summary.rejected_records += 1;
        return;
    }

    let output_path = allocate_output_path(&candidate.title, output_dir, renderer.extension());
    match renderer.render(&value, &output_path, Some(&candidate.title)) {
        Ok(()) => {
            summary.documents_created += 1;
            if summary.documents_created % PROGRESS_INTERVAL == 0 {
                info!("Created {} documents (at line {line_number})", summary.documents_created);
            }
        }
        Err(e) => {
            error!("Render failed for {}: {e:#}", output_path.display());
            summary.render_failures += 1;
        }
    }
}
