use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wren_html::{ParseOptions, parse, tokenize};

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 20_000;

fn make_blocks(blocks: usize) -> String {
    let mut out = String::with_capacity(blocks * 48);
    out.push_str("<!DOCTYPE html><body>");
    for i in 0..blocks {
        out.push_str("<div class=box><span>item ");
        out.push_str(&i.to_string());
        out.push_str("</span><img src=x></div>");
    }
    out
}

fn make_rawtext_adversarial(bytes: usize) -> String {
    let mut body = String::with_capacity(bytes + 32);
    body.push_str("<script>");
    while body.len() < bytes {
        body.push_str("</scri");
        body.push('<');
        body.push_str("pt");
    }
    body.push_str("</script>");
    body
}

fn make_entity_heavy(blocks: usize) -> String {
    let mut out = String::with_capacity(blocks * 32);
    out.push_str("<!DOCTYPE html><body><p>");
    for _ in 0..blocks {
        out.push_str("&amp;&lt;&notin;&#x2209; ");
    }
    out
}

fn bench_tokenize_small(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS);
    c.bench_function("bench_tokenize_small", |b| {
        b.iter(|| {
            let (tokens, _) = tokenize(black_box(input.as_bytes()), ParseOptions::default());
            black_box(tokens.len());
        });
    });
}

fn bench_parse_small(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS);
    c.bench_function("bench_parse_small", |b| {
        b.iter(|| {
            let doc = parse(black_box(input.as_bytes()));
            black_box(doc.parse_error_total());
        });
    });
}

fn bench_parse_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_parse_large", |b| {
        b.iter(|| {
            let doc = parse(black_box(input.as_bytes()));
            black_box(doc.parse_error_total());
        });
    });
}

fn bench_parse_rawtext_adversarial(c: &mut Criterion) {
    let input = make_rawtext_adversarial(256 * 1024);
    c.bench_function("bench_parse_rawtext_adversarial", |b| {
        b.iter(|| {
            let doc = parse(black_box(input.as_bytes()));
            black_box(doc.parse_error_total());
        });
    });
}

fn bench_parse_entity_heavy(c: &mut Criterion) {
    let input = make_entity_heavy(4096);
    c.bench_function("bench_parse_entity_heavy", |b| {
        b.iter(|| {
            let doc = parse(black_box(input.as_bytes()));
            black_box(doc.parse_error_total());
        });
    });
}

criterion_group!(
    benches,
    bench_tokenize_small,
    bench_parse_small,
    bench_parse_large,
    bench_parse_rawtext_adversarial,
    bench_parse_entity_heavy
);
criterion_main!(benches);
