use criterion::{criterion_group, criterion_main, Criterion};
use textsearch_core::query::resolve;
use textsearch_core::scoring::{rank_query, DocumentLengths};
use textsearch_core::tokenizer::{tokenize, TokenizerConfig};
use textsearch_core::TermIndex;

const WORDS: &[&str] = &[
    "inverted", "index", "search", "engine", "query", "posting", "document", "ranking",
    "cosine", "similarity", "vector", "token", "phrase", "position", "weight", "corpus",
];

fn corpus(docs: usize, len: usize) -> Vec<Vec<String>> {
    let config = TokenizerConfig::default();
    (0..docs)
        .map(|d| {
            let text: Vec<&str> = (0..len).map(|i| WORDS[(d * 7 + i * 13 + i / 3) % WORDS.len()]).collect();
            tokenize(&text.join(" "), &config)
        })
        .collect()
}

fn bench_index(c: &mut Criterion) {
    let docs = corpus(200, 500);
    c.bench_function("build_index", |b| b.iter(|| TermIndex::build(&docs)));

    let index = TermIndex::build(&docs).expect("non-empty corpus");
    let lengths = DocumentLengths::compute(&index);
    c.bench_function("resolve_phrase", |b| b.iter(|| resolve(&["search", "engine"], &index)));
    c.bench_function("rank_query", |b| b.iter(|| rank_query(&["cosine", "similarity"], &index, &lengths)));
}

criterion_group!(benches, bench_index);
criterion_main!(benches);
