use xi_rope::Rope;

use crate::parsing::{
    ParsedDoc,
    inline::{InlineNode, Link},
    rope::{Span, slice::preview},
};

const PREVIEW_MAX: usize = 60;

/// Renders the document as one node per line, children indented by two spaces.
///
/// ```text
/// Line 0..11
///   Link 0..7 -> "foo.html" target=2..5
///     Text 2..5 "foo"
///   Text 7..11 " bar"
/// ```
pub fn outline(rope: &Rope, doc: &ParsedDoc) -> String {
    let mut out = String::new();
    for line in &doc.lines {
        out.push_str(&format!("Line {}\n", range(line.span)));
        for node in &line.inlines {
            write_node(&mut out, rope, node, 1);
        }
    }
    out
}

fn write_node(out: &mut String, rope: &Rope, node: &InlineNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        InlineNode::Text(sp) => {
            out.push_str(&format!(
                "{indent}Text {} {:?}\n",
                range(*sp),
                preview(rope, *sp, PREVIEW_MAX)
            ));
        }
        InlineNode::CodeSpan { full, inner } => {
            out.push_str(&format!(
                "{indent}CodeSpan {} inner={}\n",
                range(*full),
                range(*inner)
            ));
        }
        InlineNode::Link { full, link } => {
            write_link(out, rope, link, &format!("Link {}", range(*full)), depth);
        }
        InlineNode::Embed { full, link } => {
            out.push_str(&format!("{indent}Embed {}\n", range(*full)));
            write_link(out, rope, link, "Link", depth + 1);
        }
    }
}

fn write_link(out: &mut String, rope: &Rope, link: &Link, head: &str, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!(
        "{indent}{head} -> {:?} target={}",
        link.destination,
        range(link.target)
    ));
    if let Some(fragment) = link.fragment {
        out.push_str(&format!(" fragment={}", range(fragment)));
    }
    out.push('\n');
    for child in &link.children {
        write_node(out, rope, child, depth + 1);
    }
}

fn range(sp: Span) -> String {
    format!("{}..{}", sp.start, sp.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{inline::InlineParser, parse_document};
    use pretty_assertions::assert_eq;

    #[test]
    fn outlines_link_and_trailing_text() {
        let rope = Rope::from("[[foo]] bar");
        let doc = parse_document(&rope, &InlineParser::new()).unwrap();
        assert_eq!(
            outline(&rope, &doc),
            "Line 0..11\n  Link 0..7 -> \"foo.html\" target=2..5\n    Text 2..5 \"foo\"\n  Text 7..11 \" bar\"\n"
        );
    }

    #[test]
    fn outlines_embed_wrapping_link() {
        let rope = Rope::from("![[#foo|bar]]");
        let doc = parse_document(&rope, &InlineParser::new()).unwrap();
        assert_eq!(
            outline(&rope, &doc),
            "Line 0..13\n  Embed 0..13\n    Link -> \"#foo\" target=3..3 fragment=4..7\n      Text 8..11 \"bar\"\n"
        );
    }
}
