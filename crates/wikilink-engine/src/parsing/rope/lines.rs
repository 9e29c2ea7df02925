use xi_rope::Rope;

use super::span::Span;

/// A single line of the rope with its byte spans.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the terminator if present).
    pub span: Span,
    /// Byte span of the line's content, excluding a trailing `\n` or `\r\n`.
    pub content_span: Span,
    /// The line content (terminator excluded).
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so that terminators are accounted for in `span`, keeping
/// consecutive line spans contiguous across the whole rope.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();

        let raw: &str = &line;
        let content = raw
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(raw);
        let content_end = start + content.len();

        LineRef {
            span: Span::new(start, offset),
            content_span: Span::new(start, content_end),
            text: content.to_owned(),
        }
    })
}
