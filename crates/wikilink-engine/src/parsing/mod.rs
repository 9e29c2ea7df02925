pub mod inline;
pub mod rope;
pub mod snapshot;

use serde::Serialize;
use xi_rope::Rope;

use crate::resolver::{ResolveError, Resolver};
use inline::{InlineNode, InlineParser};
use rope::{Span, lines_with_spans};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to resolve wikilink on line {line}: {source}")]
    Resolve {
        /// 1-based line number.
        line: usize,
        source: ResolveError,
    },
}

#[derive(Debug, Serialize)]
pub struct ParsedDoc {
    pub lines: Vec<LineNode>,
}

/// One source line and the inline nodes parsed from it.
#[derive(Debug, Serialize)]
pub struct LineNode {
    /// Includes the line terminator.
    pub span: Span,
    /// Excludes the line terminator; every inline node lies within it.
    pub content_span: Span,
    pub inlines: Vec<InlineNode>,
}

/// Parses a whole document, line by line.
///
/// Wikilinks never span lines, so each line is handed to `parser` on its own.
/// The first resolver error stops the conversion.
pub fn parse_document<R: Resolver>(
    rope: &Rope,
    parser: &InlineParser<R>,
) -> Result<ParsedDoc, ParseError> {
    let lines = lines_with_spans(rope)
        .enumerate()
        .map(|(idx, lr)| {
            let inlines = parser
                .parse(lr.content_span.start, &lr.text)
                .map_err(|source| ParseError::Resolve {
                    line: idx + 1,
                    source,
                })?;
            Ok(LineNode {
                span: lr.span,
                content_span: lr.content_span,
                inlines,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(ParsedDoc { lines })
}
