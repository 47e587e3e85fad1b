//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// Builder for synthetic export dumps: titles, records, and noise
/// interleaved the way real ticketing exports look.
pub struct DumpBuilder {
    lines: Vec<String>,
}

impl DumpBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a free-text header line (a title candidate)
    pub fn title(mut self, title: &str) -> Self {
        self.lines.push(title.to_string());
        self
    }

    /// Add a record as pretty-printed multi-line JSON
    pub fn record(mut self, record: &Value) -> Self {
        let pretty = serde_json::to_string_pretty(record).expect("serializable record");
        self.lines.extend(pretty.lines().map(str::to_string));
        self
    }

    /// Add a record as single-line JSON with a trailing comma, the way
    /// concatenated dumps often leave them
    pub fn inline_record(mut self, record: &Value) -> Self {
        let compact = serde_json::to_string(record).expect("serializable record");
        self.lines.push(format!("{compact},"));
        self
    }

    /// Add an arbitrary raw line (noise, malformed fragments, ...)
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Add a blank line
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Write the dump to `input.txt` inside `dir` and return its path
    pub fn write(self, dir: &Path) -> PathBuf {
        let path = dir.join("input.txt");
        fs::write(&path, self.lines.join("\n") + "\n").expect("Failed to write dump");
        path
    }
}

impl Default for DumpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a workspace temp dir plus the conventional output subdirectory path
pub fn workspace() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let out = dir.path().join("out");
    (dir, out)
}

/// List the file names in `dir`, sorted, for stable assertions
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read output dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
