//! Performance benchmarks for the greedy aligner
//!
//! Run with: cargo bench --bench realign_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use realign_core::{Realigner, TokenizerFamily};
use std::hint::black_box;

/// Generate text of roughly `size` bytes plus matching SentencePiece tokens
fn generate_input(size: usize) -> (String, Vec<String>) {
    let base_sentence = "This is a test sentence with some reasonable length. ";
    let repeat_count = size / base_sentence.len() + 1;
    let text = base_sentence.repeat(repeat_count).trim_end().to_string();
    let tokens = text.split(' ').map(|word| format!("▁{word}")).collect();
    (text, tokens)
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let realigner = Realigner::new(TokenizerFamily::Xlm).unwrap();

    for size in [512, 4_096, 65_536] {
        let (text, tokens) = generate_input(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("realign", size), &text, |b, text| {
            b.iter(|| realigner.align(black_box(text), black_box(&tokens)));
        });
    }

    group.finish();
}

/// Benchmark every family on the same input
fn bench_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("families");
    let (text, tokens) = generate_input(4_096);
    let plain: Vec<String> = tokens.iter().map(|t| t.replace('▁', "")).collect();

    for family in TokenizerFamily::ALL {
        let realigner = Realigner::new(family).unwrap();
        let tokens = if family == TokenizerFamily::Xlm {
            &tokens
        } else {
            &plain
        };

        group.bench_with_input(BenchmarkId::new("family", family), &text, |b, text| {
            b.iter(|| realigner.align(black_box(text), black_box(tokens)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_families);
criterion_main!(benches);
