use xi_rope::Rope;

use crate::parsing::{ParsedDoc, inline::InlineNode, rope::Span};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All line spans are within rope bounds and contain their content spans
/// - Inline nodes lie within their line's content and appear in source order
/// - Every link has a non-empty destination and exactly one non-empty label
///   child, located inside the wikilink
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, doc: &ParsedDoc) {
    let n = rope.len();
    for line in &doc.lines {
        assert!(
            line.span.start <= line.span.end && line.span.end <= n,
            "line span out of bounds: {:?} (rope len: {})",
            line.span,
            n
        );
        assert!(
            line.span.contains(line.content_span),
            "content span not contained in line span: content {:?}, line {:?}",
            line.content_span,
            line.span
        );
        for node in &line.inlines {
            check_node(line.content_span, node);
        }
        for pair in line.inlines.windows(2) {
            assert!(
                pair[0].span().end <= pair[1].span().start,
                "inline nodes overlap or are out of order: {:?} then {:?}",
                pair[0].span(),
                pair[1].span()
            );
        }
    }
}

fn check_node(parent: Span, node: &InlineNode) {
    let sp = node.span();
    assert!(
        parent.contains(sp),
        "inline span {sp:?} escapes its parent {parent:?}"
    );

    match node {
        InlineNode::Text(_) => {}
        InlineNode::CodeSpan { full, inner } => {
            assert!(full.contains(*inner), "code span inner {inner:?} outside {full:?}");
        }
        InlineNode::Link { full, link } | InlineNode::Embed { full, link } => {
            assert!(
                !link.destination.is_empty(),
                "link at {full:?} has an empty destination"
            );
            let Some(label) = link.label() else {
                panic!("link at {full:?} must have exactly one text child");
            };
            assert!(!label.is_empty(), "link at {full:?} has an empty label");
            assert!(full.contains(label), "label {label:?} outside link {full:?}");
            assert!(
                full.contains(link.target),
                "target {:?} outside link {full:?}",
                link.target
            );
        }
    }
}
