use criterion::{Criterion, criterion_group, criterion_main};
use wikilink_engine::{InlineParser, parse_document};

fn generate_markdown_content(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        match i % 4 {
            0 => content.push_str(&format!("Plain prose line {i} with [brackets] and ! marks\n")),
            1 => content.push_str(&format!("See [[Page {i}]] and [[Other#sec{i}|label]]\n")),
            2 => content.push_str(&format!("![[image{i}.png]] then `[[code {i}]]`\n")),
            _ => content.push_str(&format!("Unclosed [[page {i} and ![[nothing\n")),
        }
    }
    content
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.sample_size(10);

    let content = generate_markdown_content(1000);
    let rope = xi_rope::Rope::from(content.as_str());
    let parser = InlineParser::new();

    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&rope), &parser).unwrap();
            std::hint::black_box(doc);
        });
    });

    group.bench_function("parse_inline_line", |b| {
        let line = "See [[Page 1]] and [[Other#sec|label]] and ![[img.png]] tail";
        b.iter(|| {
            let nodes = parser.parse(0, std::hint::black_box(line)).unwrap();
            std::hint::black_box(nodes);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
