use serde::{Deserialize, Serialize};

/// Counters accumulated over one run.
///
/// Per-record failures are tallied here rather than propagated; only the
/// `documents_created` count reflects files actually written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub lines_read: u64,
    pub documents_created: u64,
    pub decode_failures: u64,
    pub rejected_records: u64,
    pub render_failures: u64,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Processed {} lines. Generated {} documents ({} decode failures, {} rejected, {} render failures)",
            self.lines_read,
            self.documents_created,
            self.decode_failures,
            self.rejected_records,
            self.render_failures
        )
    }
}
