//! Benchmarks for the autolink transform.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lt_linkify::{Linkifier, linkify};

/// Generate prose with a link every `link_every` sentences.
fn generate_text(sentences: usize, link_every: usize) -> String {
    let mut text = String::with_capacity(sentences * 80);
    for i in 0..sentences {
        if link_every > 0 && i % link_every == 0 {
            if (i / link_every) % 2 == 0 {
                text.push_str(&format!("See https://example.com/item/{i}?page=2. "));
            } else {
                text.push_str(&format!("Ask curator{i}@library.example.edu, please. "));
            }
        } else {
            text.push_str(&format!(
                "Sentence {i} describes the item, its provenance, and its condition. "
            ));
        }
    }
    text
}

fn bench_plain_text(c: &mut Criterion) {
    let text = generate_text(50, 0);
    c.bench_function("linkify_plain_50_sentences", |b| {
        b.iter(|| linkify(&text, false));
    });
}

fn bench_markup_guard(c: &mut Criterion) {
    let text = generate_text(50, 2);
    c.bench_function("linkify_markup_passthrough", |b| {
        b.iter(|| linkify(&text, true));
    });
}

fn bench_link_density(c: &mut Criterion) {
    let linkifier = Linkifier::default();
    let mut group = c.benchmark_group("linkify_link_density");

    for every in [1, 4, 16] {
        let text = generate_text(200, every);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(every), &text, |b, text| {
            b.iter(|| linkifier.linkify(text, false));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_plain_text,
    bench_markup_guard,
    bench_link_density
);
criterion_main!(benches);
