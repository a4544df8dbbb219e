use criterion::{Criterion, criterion_group, criterion_main};
use notelinks_engine::{parse_links, render_segments, substitute};
use std::collections::HashMap;
mod common;

fn bench_parse_links(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let content = common::generate_note_content(200);
    group.bench_function("parse_links", |b| {
        b.iter(|| parse_links(std::hint::black_box(&content)));
    });
    group.bench_function("render_segments", |b| {
        b.iter(|| render_segments(std::hint::black_box(&content)));
    });

    let pathological = "[[".repeat(500_000);
    group.bench_function("unclosed_openers", |b| {
        b.iter(|| parse_links(std::hint::black_box(&pathological)));
    });

    let template = common::generate_template(200);
    let values: HashMap<String, String> = (0..200)
        .map(|i| (format!("var{i}"), format!("value {i}")))
        .collect();
    group.bench_function("substitute", |b| {
        b.iter(|| substitute(std::hint::black_box(&template), &values));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_links);
criterion_main!(benches);
