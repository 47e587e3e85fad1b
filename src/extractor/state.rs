use crate::extractor::scanner::scan;

/// Sentinel title used when no qualifying header line preceded a record.
pub const UNTITLED: &str = "Untitled";

/// Header lines at or above this length are treated as noise, not titles.
const MAX_TITLE_CHARS: usize = 150;

/// A closed candidate buffer: the accumulated text of one prospective
/// record, plus the title line that was pending when its opening brace
/// was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Joined buffer text, trimmed, with at most one trailing comma removed.
    pub json_text: String,
    /// The pending title bound to this record ([`UNTITLED`] if none).
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Accumulating,
}

/// Streaming record extractor.
///
/// Consumes the input one line at a time and emits a [`Candidate`] each time
/// a prospective JSON object closes. Object boundaries are detected with a
/// signed brace balance over [`scan`] signals rather than a full tokenizer:
/// the buffer opens on the first line showing an unquoted `{` while idle,
/// and closes the first time the balance drops to zero or below — including
/// on the opening line itself when the object fits on one line. A balance
/// that goes negative (stray trailing braces) still closes the buffer rather
/// than wedging the machine.
///
/// While idle, the most recent short, brace-free line is remembered as the
/// pending title for the next record; it resets to [`UNTITLED`] after every
/// close so a title is never reused across records.
#[derive(Debug)]
pub struct RecordExtractor {
    state: State,
    buffer: Vec<String>,
    brace_balance: i32,
    pending_title: String,
}

impl RecordExtractor {
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            buffer: Vec::new(),
            brace_balance: 0,
            pending_title: UNTITLED.to_string(),
        }
    }

    /// True if a candidate buffer is open (useful for end-of-input
    /// diagnostics; an open buffer at EOF is an unterminated object).
    pub fn is_accumulating(&self) -> bool {
        self.state == State::Accumulating
    }

    /// Feed one line (without its newline terminator).
    ///
    /// Returns `Some(candidate)` when this line closes a candidate buffer.
    /// Blank and whitespace-only lines are skipped in both states.
    pub fn push_line(&mut self, line: &str) -> Option<Candidate> {
        let stripped = line.trim();
        if stripped.is_empty() {
            return None;
        }

        let signal = scan(line);

        match self.state {
            State::Idle => {
                if signal.has_opening_brace {
                    self.state = State::Accumulating;
                    self.buffer.clear();
                    self.buffer.push(line.to_string());
                    self.brace_balance = signal.net_brace_delta;

                    // A one-line object opens and closes on the same line
                    if self.brace_balance <= 0 {
                        return Some(self.close());
                    }
                } else if is_title_candidate(stripped) {
                    self.pending_title = stripped.to_string();
                }
                None
            }
            State::Accumulating => {
                self.buffer.push(line.to_string());
                self.brace_balance += signal.net_brace_delta;

                if self.brace_balance <= 0 {
                    return Some(self.close());
                }
                None
            }
        }
    }

    fn close(&mut self) -> Candidate {
        self.state = State::Idle;
        let mut text = self.buffer.join("\n").trim().to_string();
        self.buffer.clear();

        // Dumps commonly leave a trailing comma after each object
        if text.ends_with(',') {
            text.pop();
        }

        let title = std::mem::replace(&mut self.pending_title, UNTITLED.to_string());
        Candidate { json_text: text, title }
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// A line qualifies as a title only if it carries no brace characters and
/// stays under the length cutoff. Longer or brace-bearing lines are noise.
fn is_title_candidate(stripped: &str) -> bool {
    !stripped.contains('{')
        && !stripped.contains('}')
        && stripped.chars().count() < MAX_TITLE_CHARS
}
