use crate::parsing::rope::span::Span;
use crate::resolver::{DefaultResolver, Resolution, ResolveError, Resolver};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, WikiLink},
    types::{InlineNode, Link},
};

/// Inline parser holding the resolver used for every wikilink it meets.
///
/// The resolver is fixed at construction; `InlineParser::new()` installs
/// [`DefaultResolver`]. The parser keeps no state between calls, so a single
/// instance can serve concurrent parses whenever `R` is `Sync`.
#[derive(Debug, Clone, Default)]
pub struct InlineParser<R = DefaultResolver> {
    resolver: R,
}

impl InlineParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Resolver> InlineParser<R> {
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Parses inline content into a sequence of [`InlineNode`]s.
    ///
    /// # Arguments
    /// - `base`: Byte offset in the document where `s` begins (for absolute span positions)
    /// - `s`: The content to parse (typically one line, terminator excluded)
    ///
    /// # Precedence
    /// Code spans are checked first and suppress all other parsing inside them.
    /// `[[link]]` inside backticks is parsed as a code span, not a wikilink.
    ///
    /// # Errors
    /// Returns the resolver's error as soon as any wikilink fails to resolve;
    /// no partial output is produced.
    pub fn parse(&self, base: usize, s: &str) -> Result<Vec<InlineNode>, ResolveError> {
        let mut cur = Cursor::new(s, base);
        let mut out = vec![];
        let mut text_start = cur.pos();

        fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
            if end > start {
                out.push(InlineNode::Text(Span { start, end }));
            }
        }

        while !cur.eof() {
            let start = cur.pos();
            let node = match try_parse_code_span(&mut cur) {
                Some(node) => Some(node),
                None => self.try_parse_wikilink(&mut cur)?,
            };
            match node {
                Some(node) => {
                    flush_text(&mut out, text_start, start);
                    out.push(node);
                    text_start = cur.pos();
                }
                None => {
                    // An unmatched backtick run is literal text as a whole.
                    let skip = CodeSpan::run_len(cur.line_rest()).max(1);
                    cur.bump_n(skip);
                }
            }
        }

        flush_text(&mut out, text_start, cur.pos());
        Ok(out)
    }

    /// Attempts to parse a wikilink at the cursor.
    ///
    /// - `Ok(None)`: no wikilink here; the cursor is untouched.
    /// - `Err(_)`: the resolver failed; the cursor is untouched and no node
    ///   is produced.
    /// - `Ok(Some(node))`: the cursor has moved past the closing `]]`. The
    ///   node is a `Link` or `Embed`, or `Text` holding just the label when
    ///   the resolver declined to produce a destination.
    pub fn try_parse_wikilink(
        &self,
        cur: &mut Cursor<'_>,
    ) -> Result<Option<InlineNode>, ResolveError> {
        if !cur.peek().is_some_and(WikiLink::is_trigger) {
            return Ok(None);
        }
        let Some(occ) = WikiLink::scan(cur.line_rest(), cur.pos()) else {
            return Ok(None);
        };

        let target = cur.slice(occ.target);
        let fragment = occ.fragment.map_or("", |f| cur.slice(f));

        let resolution = self
            .resolver
            .resolve_wikilink(target, fragment)
            .inspect_err(|e| log::warn!("wikilink at byte {}: {e}", occ.full.start))?;
        log::trace!("resolved [[{target}#{fragment}]] to {resolution:?}");

        cur.bump_n(occ.consumed_len());

        let destination = match resolution {
            Resolution::Destination(dest) if !dest.is_empty() => dest,
            _ => {
                log::debug!("no destination for {target:?}, rendering label as text");
                return Ok(Some(InlineNode::Text(occ.label)));
            }
        };

        let link = Link::new(destination, occ.target, occ.fragment, occ.label);
        let node = if occ.embed {
            InlineNode::Embed {
                full: occ.full,
                link,
            }
        } else {
            InlineNode::Link {
                full: occ.full,
                link,
            }
        };
        Ok(Some(node))
    }
}

/// Parses inline content with the default resolver.
pub fn parse_inline(base: usize, s: &str) -> Result<Vec<InlineNode>, ResolveError> {
    InlineParser::new().parse(base, s)
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if no backtick run of the same
/// length closes the span on this line; the cursor only moves on success.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let start = cur.pos();
    let line = cur.line_rest();
    let open = CodeSpan::run_len(line);
    let close = CodeSpan::find_close(&line[open..], open)?;
    let inner = Span::new(start + open, start + open + close);
    cur.bump_n(open + close + open);

    Some(InlineNode::CodeSpan {
        full: Span::new(start, inner.end + open),
        inner,
    })
}
