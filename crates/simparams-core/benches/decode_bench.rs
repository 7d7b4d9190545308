//! Criterion benchmarks for the tokenize → decode → validate path.
//!
//! Run with:
//! ```bash
//! cargo bench --package simparams-core --bench decode_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simparams_core::{validate, FieldDecoder, ParameterStore, Tokenizer};

const SAMPLE: &str = "model_name M1 force_type point time_step 0.01 total_time 2.0 \
                      area_x 10 area_y 10 n_x 5 n_y 5 alpha 0 beta 0 \
                      waveform ricker moment 1e6 density 2500\n";

fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new(text.as_bytes())
        .collect::<std::io::Result<Vec<_>>>()
        .expect("in-memory read")
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_sample_file", |b| {
        b.iter(|| tokenize(black_box(SAMPLE)))
    });
}

fn bench_decode(c: &mut Criterion) {
    let tokens = tokenize(SAMPLE);

    c.bench_function("decode_sample_tokens", |b| {
        b.iter(|| {
            let mut store = ParameterStore::new();
            for field in FieldDecoder::new(black_box(&tokens)) {
                store.apply(field.expect("sample decodes")).expect("no duplicates");
            }
            store
        })
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    // Pad the file with unknown pairs to exercise the skip path.
    let padded: String = (0..200)
        .map(|i| format!("unused_{i} {i}\n"))
        .chain(std::iter::once(SAMPLE.to_string()))
        .collect();

    c.bench_function("load_padded_file_in_memory", |b| {
        b.iter(|| {
            let tokens = tokenize(black_box(&padded));
            let mut store = ParameterStore::new();
            for field in FieldDecoder::new(&tokens) {
                store.apply(field.expect("decodes")).expect("no duplicates");
            }
            validate(&store).expect("valid")
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_decode, bench_full_pipeline);
criterion_main!(benches);
