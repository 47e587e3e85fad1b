use std::sync::LazyLock;

use regex::Regex;

// A maximal quoted span: an unescaped quote up to the next unescaped quote.
// Escaped quotes are removed before this runs, so `[^"]*` cannot terminate
// early on a `\"` inside the string.
static QUOTED_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]*""#).unwrap_or_else(|e| panic!("invalid regex: {e}")));

/// Per-line signal from the brace-aware scanner.
///
/// Braces inside quoted strings never contribute to either field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSignal {
    /// Count of `{` minus count of `}` outside quoted spans.
    pub net_brace_delta: i32,
    /// True if at least one `{` appears outside quoted spans.
    pub has_opening_brace: bool,
}

/// Scan one line of text for brace activity, ignoring quoted strings.
///
/// Escaped-quote sequences (`\"`) are removed first so they cannot falsely
/// terminate a string span, then every `"..."` span is stripped, and the
/// braces in the remainder are counted. This is a heuristic, not a JSON
/// tokenizer: it does not handle string literals spanning multiple lines,
/// nor single-quoted strings.
///
/// # Examples
///
/// ```
/// use export_formatter::extractor::scan;
///
/// let signal = scan(r#"{"a": "b{c}d"}"#);
/// assert!(signal.has_opening_brace);
/// assert_eq!(signal.net_brace_delta, 0);
/// ```
pub fn scan(line: &str) -> ScanSignal {
    let without_escapes = line.replace("\\\"", "");
    let cleaned = QUOTED_SPAN.replace_all(&without_escapes, "");

    let open_count = cleaned.matches('{').count();
    let close_count = cleaned.matches('}').count();

    ScanSignal {
        net_brace_delta: open_count as i32 - close_count as i32,
        has_opening_brace: open_count > 0,
    }
}
