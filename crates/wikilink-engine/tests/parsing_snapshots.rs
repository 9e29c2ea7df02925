use wikilink_engine::parsing::{inline::InlineParser, parse_document, snapshot};
use wikilink_engine::resolver::{DefaultResolver, Resolution, Resolver, from_fn};
use wikilink_engine::{InlineNode, ParseError, ResolveError};

#[test]
fn fixture_basic_links() {
    assert_fixture("basic_links", &InlineParser::new());
}

#[test]
fn fixture_embeds_and_fragments() {
    assert_fixture("embeds_and_fragments", &InlineParser::new());
}

#[test]
fn fixture_raw_zones_and_non_matches() {
    assert_fixture("raw_zones_and_non_matches", &InlineParser::new());
}

/// Targets named "Does Not Exist" resolve to nothing and render as their label.
#[test]
fn fixture_unresolved_targets() {
    let default = DefaultResolver::new();
    let parser = InlineParser::with_resolver(from_fn(move |target: &str, fragment: &str| {
        if target == "Does Not Exist" {
            return Ok(Resolution::Absent);
        }
        default.resolve_wikilink(target, fragment)
    }));
    assert_fixture("unresolved_targets", &parser);
}

fn assert_fixture<R: Resolver>(name: &str, parser: &InlineParser<R>) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let rope = xi_rope::Rope::from(md.as_str());

    let doc = parse_document(&rope, parser).unwrap();
    snapshot::invariants(&rope, &doc);

    let snap = snapshot::outline(&rope, &doc);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap);
    });
}

/// Slicing a link's span from the rope reproduces the wikilink as written.
#[test]
fn link_spans_are_lossless() {
    let md = "Hello [[world|everyone]]!\n![[img.png]]\n";
    let rope = xi_rope::Rope::from(md);

    let doc = parse_document(&rope, &InlineParser::new()).unwrap();
    let written: Vec<_> = doc
        .lines
        .iter()
        .flat_map(|l| &l.inlines)
        .filter(|n| n.link().is_some())
        .map(|n| rope.slice_to_cow(n.span().start..n.span().end).into_owned())
        .collect();

    assert_eq!(written, vec!["[[world|everyone]]", "![[img.png]]"]);
}

/// The label of a `[[target|label]]` link is exactly the label, whatever the target.
#[test]
fn explicit_label_ignores_target() {
    for target in ["a", "a/b.c", "#frag", "x#y", "with space"] {
        let md = format!("[[{target}|shown]]");
        let rope = xi_rope::Rope::from(md.as_str());
        let doc = parse_document(&rope, &InlineParser::new()).unwrap();

        let label = doc.lines[0].inlines[0].link().unwrap().label().unwrap();
        assert_eq!(rope.slice_to_cow(label.start..label.end), "shown");
    }
}

/// Embeds follow the same destination and label rules as plain links.
#[test]
fn embed_matches_plain_link() {
    for body in ["foo", "foo|bar", "foo#bar", "foo#bar|baz", "#foo", "#foo|bar"] {
        let plain = wikilink_engine::parse_inline(1, &format!("[[{body}]]")).unwrap();
        let embed = wikilink_engine::parse_inline(0, &format!("![[{body}]]")).unwrap();

        assert!(matches!(plain[0], InlineNode::Link { .. }));
        assert!(matches!(embed[0], InlineNode::Embed { .. }));
        assert_eq!(plain[0].link(), embed[0].link());
    }
}

#[test]
fn resolution_failure_halts_document() {
    let md = "fine [[a]]\n\nfails [[b]]\nnever reached [[c]]\n";
    let rope = xi_rope::Rope::from(md);
    let parser = InlineParser::with_resolver(from_fn(|target: &str, _: &str| {
        if target == "b" {
            return Err(ResolveError::Lookup {
                target: target.to_owned(),
                reason: "backend unavailable".into(),
            });
        }
        Ok(Resolution::Destination(target.to_owned()))
    }));

    let err = parse_document(&rope, &parser).unwrap_err();
    assert!(matches!(err, ParseError::Resolve { line: 3, .. }));
    assert_eq!(
        err.to_string(),
        "Failed to resolve wikilink on line 3: Failed to resolve wikilink target \"b\": backend unavailable"
    );
}
