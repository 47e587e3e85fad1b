//! Streaming extraction of JSON objects embedded in noisy text dumps
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **No schema guarantee**: the input is arbitrary text with JSON objects
//!   interleaved between free-text headers and noise. Object boundaries are
//!   detected lexically (brace balance outside quoted strings), never by
//!   parsing the whole input.
//!
//! - **Single pass, bounded state**: the extractor is a two-state machine
//!   (idle / accumulating) holding only the current candidate buffer and the
//!   pending title. Nothing else is retained between records, so memory use
//!   is bounded by the largest single object, not the file.
//!
//! - **Malformed fragments are the caller's problem**: a closed candidate is
//!   handed upward as raw text; decode failures are logged and skipped by
//!   the pipeline rather than aborting the run.

pub mod scanner;
pub mod state;

pub use scanner::{ScanSignal, scan};
pub use state::{Candidate, RecordExtractor, UNTITLED};
