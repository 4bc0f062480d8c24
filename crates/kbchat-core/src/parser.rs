//! Response post-processing.
//!
//! Pure string transformation, isolated from I/O so it can be tested
//! without a network. Applied exactly once per raw response: the
//! output contains markup markers, so re-parsing it is undefined.

/// Marker substituted for a double line break
pub const PARAGRAPH_BREAK: &str = "<br /><br />";
/// Marker substituted for a remaining single line break
pub const LINE_BREAK: &str = "<br />";

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// Result of splitting a raw assistant response
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    /// Answer text with line breaks rewritten as display markers
    pub display: String,
    /// Reasoning segment, present only if the raw text carried one
    pub think: Option<String>,
}

/// Split an optional reasoning segment out of `raw` and rewrite the
/// remaining line breaks as display markers.
///
/// The reasoning segment is the text strictly between the first
/// `<think>` and the first `</think>` after it, trimmed. A missing
/// closing tag yields everything after the opening tag. The display
/// text is everything after the first `</think>` in the whole input,
/// which means a closing tag without an opening one still truncates
/// the front. That asymmetry matches the backend contract and is
/// pinned by tests.
pub fn parse_response(raw: &str) -> ParsedResponse {
    let think = raw.split_once(THINK_OPEN).map(|(_, rest)| {
        let inner = match rest.split_once(THINK_CLOSE) {
            Some((inner, _)) => inner,
            None => rest,
        };
        inner.trim().to_string()
    });

    let answer = match raw.split_once(THINK_CLOSE) {
        Some((_, after)) => after.trim(),
        None => raw.trim(),
    };

    // Double breaks must be rewritten before single breaks so a blank
    // line is not counted twice.
    let display = answer
        .replace("\n\n", PARAGRAPH_BREAK)
        .replace('\n', LINE_BREAK);

    ParsedResponse { display, think }
}
