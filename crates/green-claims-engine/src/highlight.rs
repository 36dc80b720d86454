//! HTML highlighting of scan matches for rendering collaborators
//!
//! Matches are wrapped in `<mark class="highlight-{severity}">` and all text is
//! HTML-escaped. Overlapping matches cannot nest, so only the most severe
//! (then widest) of them is marked. Any inconsistency between the matches and the text returns
//! the text unchanged.

use shared_types::{ScanMatch, Severity};
use thiserror::Error;
use tracing::warn;

use crate::patterns::byte_range;

#[derive(Debug, Error)]
enum HighlightError {
    #[error("match at {position} lies outside the text")]
    OutOfBounds { position: usize },

    #[error("match at {position} does not match the text (expected {expected:?})")]
    TextMismatch { position: usize, expected: String },
}

/// Annotated copy of `text`, or `text` itself if the matches do not fit it
pub fn highlight(text: &str, matches: &[ScanMatch]) -> String {
    match try_highlight(text, matches) {
        Ok(html) => html,
        Err(err) => {
            warn!(error = %err, "Highlighting failed, returning original text");
            text.to_string()
        }
    }
}

struct Span<'m> {
    start: usize,
    end: usize,
    scan_match: &'m ScanMatch,
}

fn try_highlight(text: &str, matches: &[ScanMatch]) -> Result<String, HighlightError> {
    let mut spans = Vec::with_capacity(matches.len());
    for m in matches {
        let (start, end) = byte_range(text, m.position, m.len())
            .ok_or(HighlightError::OutOfBounds {
                position: m.position,
            })?;
        if text[start..end] != m.match_text {
            return Err(HighlightError::TextMismatch {
                position: m.position,
                expected: m.match_text.clone(),
            });
        }
        spans.push(Span {
            start,
            end,
            scan_match: m,
        });
    }

    let spans = keep_strongest(spans);

    let mut pieces: Vec<String> = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = text.len();
    for span in spans {
        if span.end > cursor {
            continue;
        }
        pieces.push(escape_html(&text[span.end..cursor]));
        pieces.push(mark(span.scan_match));
        cursor = span.start;
    }
    pieces.push(escape_html(&text[..cursor]));

    pieces.reverse();
    Ok(pieces.concat())
}

/// Drop spans that overlap a stronger one: higher severity first, then the
/// wider span. The survivors come back right to left.
fn keep_strongest(mut spans: Vec<Span<'_>>) -> Vec<Span<'_>> {
    spans.sort_by(|a, b| {
        rank(a.scan_match.severity())
            .cmp(&rank(b.scan_match.severity()))
            .then((b.end - b.start).cmp(&(a.end - a.start)))
            .then(a.start.cmp(&b.start))
    });

    let mut kept: Vec<Span<'_>> = Vec::with_capacity(spans.len());
    for span in spans {
        if kept.iter().all(|k| span.end <= k.start || k.end <= span.start) {
            kept.push(span);
        }
    }

    kept.sort_by(|a, b| b.start.cmp(&a.start));
    kept
}

fn rank(severity: Severity) -> u8 {
    match severity {
        Severity::Critical => 0,
        Severity::Warning => 1,
        Severity::Minor => 2,
    }
}

fn mark(m: &ScanMatch) -> String {
    format!(
        "<mark class=\"highlight-{}\" data-term=\"{}\">{}</mark>",
        m.severity().as_str(),
        escape_html(&m.term.term),
        escape_html(&m.match_text)
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
