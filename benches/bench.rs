//! Criterion benchmarks for Scour.
//!
//! - Stopword index construction
//! - Stopword removal with short and long n-grams
//! - The full filter pipeline, sequential and batched

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use scour::analysis::char_filter::{EncodeCharFilter, PatternReplaceCharFilter};
use scour::analysis::stopword::{MatchMode, StopwordIndex};
use scour::analysis::token_filter::DEFAULT_ENGLISH_STOP_WORDS;
use scour::analysis::tokenizer::WordPunctTokenizer;
use scour::cleaner::TextCleaner;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "the", "quick", "brown", "fox", "jumps", "over", "a", "lazy", "dog", "good", "and", "bad",
        "in", "the", "end", "text", "cleaning", "pipeline", "42", "stop", "word", "n-gram",
    ];

    (0..count)
        .map(|i| {
            let mut doc = String::new();
            for j in 0..60 {
                if j > 0 {
                    doc.push(' ');
                }
                doc.push_str(words[(i * 7 + j * 13) % words.len()]);
                if j % 11 == 10 {
                    doc.push('.');
                }
            }
            doc
        })
        .collect()
}

fn stopword_phrases() -> Vec<String> {
    let mut phrases: Vec<String> = DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|s| s.to_string())
        .collect();
    phrases.extend(
        ["good and bad", "in the end", "over a lazy dog", "stop word"]
            .iter()
            .map(|s| s.to_string()),
    );
    phrases
}

fn bench_index_build(c: &mut Criterion) {
    let phrases = stopword_phrases();
    let tokenizer = WordPunctTokenizer::new();

    c.bench_function("stopword_index_build", |b| {
        b.iter(|| StopwordIndex::build(black_box(&phrases), &tokenizer).unwrap())
    });
}

fn bench_stopword_removal(c: &mut Criterion) {
    let docs = generate_test_documents(100);
    let bytes: usize = docs.iter().map(|d| d.len()).sum();
    let exact = TextCleaner::new(stopword_phrases()).unwrap();
    let fuzzy = exact.clone().match_mode(MatchMode::fuzzy());

    let mut group = c.benchmark_group("stopword_removal");
    group.throughput(Throughput::Bytes(bytes as u64));

    group.bench_function("exact", |b| {
        b.iter(|| {
            for doc in &docs {
                black_box(exact.remove_stop_words(doc).unwrap());
            }
        })
    });

    group.bench_function("fuzzy", |b| {
        b.iter(|| {
            for doc in &docs {
                black_box(fuzzy.remove_stop_words(doc).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let docs = generate_test_documents(1000);
    let cleaner = TextCleaner::new(stopword_phrases())
        .unwrap()
        .add_before_filter(Arc::new(EncodeCharFilter::ascii()))
        .add_before_filter(Arc::new(PatternReplaceCharFilter::numeric()))
        .add_before_filter(Arc::new(PatternReplaceCharFilter::multiple_space()))
        .add_after_filter(Arc::new(PatternReplaceCharFilter::consecutive_sentence_end()));

    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Elements(docs.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            for doc in &docs {
                black_box(cleaner.clean(doc).unwrap());
            }
        })
    });

    group.bench_function("batch", |b| {
        b.iter(|| black_box(cleaner.clean_batch(&docs).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_index_build,
    bench_stopword_removal,
    bench_pipeline
);
criterion_main!(benches);
