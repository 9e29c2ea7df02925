use serde::Serialize;

use crate::parsing::rope::span::Span;

/// A parsed inline node with byte spans into the document.
///
/// Text is never copied out of the document; only resolved destinations are
/// owned, since they do not exist in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct, or the label of
    /// a wikilink whose target resolved to nothing.
    Text(Span),
    /// A code span (backtick-delimited). This is a raw zone - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// A resolved `[[...]]` wikilink.
    Link {
        /// Full span including `[[` and `]]`.
        full: Span,
        link: Link,
    },
    /// A resolved `![[...]]` wikilink: an embed wrapping its link.
    Embed {
        /// Full span including `![[` and `]]`.
        full: Span,
        link: Link,
    },
}

impl InlineNode {
    /// The source span this node stands for.
    ///
    /// For `Link` and `Embed` this is the whole wikilink, delimiters included.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::Link { full, .. }
            | InlineNode::Embed { full, .. } => *full,
        }
    }

    /// The link carried by a `Link` or `Embed` node.
    pub fn link(&self) -> Option<&Link> {
        match self {
            InlineNode::Link { link, .. } | InlineNode::Embed { link, .. } => Some(link),
            _ => None,
        }
    }

    pub fn is_embed(&self) -> bool {
        matches!(self, InlineNode::Embed { .. })
    }
}

/// A link produced from a wikilink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Resolver output, verbatim. Escaping for the output format is up to
    /// whoever renders it.
    pub destination: String,
    /// Page part as written.
    pub target: Span,
    /// Fragment as written, without the `#`.
    pub fragment: Option<Span>,
    /// Always a single `Text` node holding the label.
    pub children: Vec<InlineNode>,
}

impl Link {
    pub fn new(destination: String, target: Span, fragment: Option<Span>, label: Span) -> Self {
        Self {
            destination,
            target,
            fragment,
            children: vec![InlineNode::Text(label)],
        }
    }

    /// Span of the label text child.
    pub fn label(&self) -> Option<Span> {
        match self.children.as_slice() {
            [InlineNode::Text(sp)] => Some(*sp),
            _ => None,
        }
    }
}
