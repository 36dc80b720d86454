//! Offset and context helpers shared by the scanner and the highlighter
//!
//! The regex engine reports byte offsets; everything exposed to callers is
//! measured in chars.

/// Characters of context kept on each side of a match
pub const CONTEXT_RADIUS: usize = 50;

pub const ELLIPSIS: &str = "...";

/// Context window around `text[start..end]` (byte offsets).
///
/// Keeps up to [`CONTEXT_RADIUS`] chars either side and marks a clipped side
/// with [`ELLIPSIS`].
pub fn extract_context(text: &str, start: usize, end: usize) -> String {
    let before = &text[..start];
    let context_start = before
        .char_indices()
        .rev()
        .nth(CONTEXT_RADIUS.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0);

    let after = &text[end..];
    let context_end = end
        + after
            .char_indices()
            .nth(CONTEXT_RADIUS)
            .map(|(i, _)| i)
            .unwrap_or(after.len());

    let mut context = String::with_capacity(context_end - context_start + 2 * ELLIPSIS.len());
    if context_start > 0 {
        context.push_str(ELLIPSIS);
    }
    context.push_str(&text[context_start..context_end]);
    if context_end < text.len() {
        context.push_str(ELLIPSIS);
    }
    context
}

/// 1-based line of the byte offset `start`
pub fn line_number(text: &str, start: usize) -> usize {
    text[..start].matches('\n').count() + 1
}

/// Byte-to-char offset conversion for ascending offsets.
///
/// Matches of one pattern arrive left to right, so each lookup only counts the
/// chars since the previous one.
pub struct CharCursor<'t> {
    text: &'t str,
    byte: usize,
    chars: usize,
}

impl<'t> CharCursor<'t> {
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// Char offset of `byte`; restarts from 0 if asked to go backwards
    pub fn char_offset(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Byte range of the char range `[start, start + len)`, if it lies on char
/// boundaries inside `text`
pub fn byte_range(text: &str, start: usize, len: usize) -> Option<(usize, usize)> {
    let mut indices = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()));
    let byte_start = indices.nth(start)?;
    let byte_end = if len == 0 {
        byte_start
    } else {
        indices.nth(len - 1)?
    };
    Some((byte_start, byte_end))
}
