//! Benchmarks for the chat engine hot path.
//!
//! Measures the three stages a message passes through: intent
//! classification against the pattern table, slot extraction, and the
//! full `ChatEngine::process` turn against an in-memory catalog. All
//! stages are pure CPU work; the process benchmark includes the catalog
//! scan over the demo inventory.

use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use clerk_catalog::demo_catalog;
use clerk_chat::engine::ChatEngine;
use clerk_chat::extract::{extract_price_range, extract_terms};
use clerk_chat::intent::classify;

/// Messages spanning every intent plus an unclassifiable one.
const MESSAGES: &[&str] = &[
    "hello there",
    "I'm looking for a gaming laptop",
    "how much does it cost",
    "show me laptops under 1000",
    "what categories do you have",
    "what's in my cart",
    "help",
    "goodbye",
    "zzz qqq",
];

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("all_intents", |b| {
        b.iter(|| {
            for msg in MESSAGES {
                std::hint::black_box(classify(msg));
            }
        })
    });

    // Worst case: every pattern table entry is tried and none matches.
    group.bench_function("unknown", |b| {
        b.iter(|| std::hint::black_box(classify("zzz qqq")))
    });

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("terms", |b| {
        b.iter(|| std::hint::black_box(extract_terms("I want wireless noise cancelling headphones")))
    });

    group.bench_function("price_range", |b| {
        b.iter(|| std::hint::black_box(extract_price_range("laptops between 500 and 1500")))
    });

    group.bench_function("price_range_no_match", |b| {
        b.iter(|| std::hint::black_box(extract_price_range("show me laptops")))
    });

    group.finish();
}

fn bench_process(c: &mut Criterion) {
    let engine = ChatEngine::new(demo_catalog());

    let mut group = c.benchmark_group("process");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("search_turn", |b| {
        b.iter(|| std::hint::black_box(engine.process("I'm looking for a laptop").unwrap()))
    });

    group.bench_function("price_turn", |b| {
        b.iter(|| std::hint::black_box(engine.process("anything under 100").unwrap()))
    });

    group.bench_function("greeting_turn", |b| {
        b.iter(|| std::hint::black_box(engine.process("hello").unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_extract, bench_process);
criterion_main!(benches);
