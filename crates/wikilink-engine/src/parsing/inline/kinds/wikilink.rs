use serde::Serialize;

use crate::parsing::rope::span::Span;

/// Wikilink syntax: `[[target]]`, `[[target#fragment|label]]` and the
/// `!`-prefixed embed forms.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const EMBED_OPEN: &'static str = "![[";
    pub const CLOSE: &'static str = "]]";
    pub const LABEL: char = '|';
    pub const FRAGMENT: char = '#';

    /// Bytes that may start a wikilink. Anything else is rejected before
    /// any scanning happens.
    pub const TRIGGERS: [u8; 2] = [b'!', b'['];

    pub fn is_trigger(b: u8) -> bool {
        Self::TRIGGERS.contains(&b)
    }

    /// Recognizes a wikilink at the start of `line`.
    ///
    /// `line` is the unconsumed remainder of the current line and `base` is
    /// its absolute offset; the returned spans are absolute.
    ///
    /// Decomposition order matters: the interior is split on the first `|`
    /// before the left side is split on the last `#`, so `[[a#b|c#d]]` has
    /// target `a`, fragment `b` and label `c#d`.
    ///
    /// Returns `None` when:
    /// - there is no `]]` on the line
    /// - the line does not start with `[[` or `![[`
    /// - the target-and-fragment text or the label is empty
    pub fn scan(line: &str, base: usize) -> Option<Occurrence> {
        let stop = line.find(Self::CLOSE)?;

        let (embed, open) = if line.starts_with(Self::OPEN) {
            (false, Self::OPEN.len())
        } else if line.starts_with(Self::EMBED_OPEN) {
            (true, Self::EMBED_OPEN.len())
        } else {
            return None;
        };

        let inner = line.get(open..stop)?;
        let (raw, label_start) = match inner.find(Self::LABEL) {
            Some(pipe) => (&inner[..pipe], open + pipe + 1),
            None => (inner, open),
        };
        let label = Span::new(base + label_start, base + stop);

        if raw.is_empty() || label.is_empty() {
            return None;
        }

        let raw_start = base + open;
        let raw_end = raw_start + raw.len();
        let (target, fragment) = match raw.rfind(Self::FRAGMENT) {
            Some(hash) => (
                Span::new(raw_start, raw_start + hash),
                Some(Span::new(raw_start + hash + 1, raw_end)),
            ),
            None => (Span::new(raw_start, raw_end), None),
        };

        Some(Occurrence {
            embed,
            full: Span::new(base, base + stop + Self::CLOSE.len()),
            target,
            fragment,
            label,
        })
    }
}

/// A recognized wikilink, before resolution.
///
/// Lives for a single scan step: it is resolved and turned into a node
/// immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// True for `![[...]]`.
    pub embed: bool,
    /// From the opening delimiter through `]]`.
    pub full: Span,
    /// Page part. Empty for same-page links such as `[[#heading]]`.
    pub target: Span,
    /// Text after the last `#`, marker excluded.
    pub fragment: Option<Span>,
    /// Explicit label after `|`, or the unsplit target-and-fragment text.
    pub label: Span,
}

impl Occurrence {
    /// Number of bytes to advance past, landing just after `]]`.
    pub fn consumed_len(&self) -> usize {
        self.full.len()
    }
}
