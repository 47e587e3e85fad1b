//! Export Formatter - carve structured records out of noisy export dumps
//!
//! This library extracts discrete JSON objects embedded in loosely-formatted
//! text dumps (ticketing/configuration exports where objects are interleaved
//! with free-text headers and noise), validates which ones represent genuine
//! records, and renders each valid record as a standalone document. It
//! supports:
//!
//! - Brace-aware lexical scanning that ignores braces inside quoted strings
//! - Single-pass streaming extraction with bounded per-record state
//! - Heuristic pairing of each record with a preceding title line
//! - Graceful skip-and-log handling of malformed fragments
//! - Collision-free output filenames derived from record titles
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use export_formatter::{HtmlRenderer, process_file};
//!
//! let renderer = HtmlRenderer::new(None);
//! let summary = process_file(Path::new("export.txt"), Path::new("out"), &renderer)?;
//! println!("Generated {} documents", summary.documents_created);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use extractor::{Candidate, RecordExtractor, ScanSignal, scan};
pub use models::{RunSummary, is_genuine_record};
pub use pipeline::process_file;
pub use render::{DocumentRenderer, HtmlRenderer};
pub use utils::{allocate_output_path, sanitize_title};
