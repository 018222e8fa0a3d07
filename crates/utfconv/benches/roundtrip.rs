//! Benchmark – conversions between the three encoding forms
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use utfconv::{TranscodeOptions, UtfForm, convert};

const CHARACTERS: &str = include_str!("../tests/data/characters.utf8");
const EMOJI: &str = include_str!("../tests/data/emoji.utf8");

/// Repeats `sample` until the text is at least `target_len` bytes long.
fn make_payload(sample: &str, target_len: usize) -> String {
    let mut s = String::with_capacity(target_len + sample.len());
    while s.len() < target_len {
        s.push_str(sample);
    }
    s
}

/// Encodes `text` in `form` with native byte order.
fn encode(text: &str, form: UtfForm) -> Vec<u8> {
    convert(text.as_bytes(), UtfForm::Utf8, form, TranscodeOptions::default()).unwrap()
}

fn bench_conversions(c: &mut Criterion) {
    let forms = [UtfForm::Utf8, UtfForm::Utf16, UtfForm::Utf32];

    for (name, sample) in [("ascii", "The quick brown fox jumps over the lazy dog. "), ("characters", CHARACTERS), ("emoji", EMOJI)] {
        let text = make_payload(sample, 64 * 1024);
        let mut group = c.benchmark_group(format!("convert_{name}"));

        for from in forms {
            let src = encode(&text, from);
            group.throughput(Throughput::Bytes(src.len() as u64));
            for to in forms {
                group.bench_with_input(BenchmarkId::new(from.to_string(), to), &src, |b, src| {
                    b.iter(|| convert(black_box(src), from, to, TranscodeOptions::default()).unwrap());
                });
            }
        }

        group.finish();
    }
}

fn bench_lenient_repair(c: &mut Criterion) {
    // Every fourth byte is a stray continuation byte.
    let broken: Vec<u8> = make_payload("abc", 64 * 1024)
        .bytes()
        .enumerate()
        .map(|(i, b)| if i % 4 == 3 { 0x80 } else { b })
        .collect();

    let mut group = c.benchmark_group("lenient_repair");
    group.throughput(Throughput::Bytes(broken.len() as u64));
    for to in [UtfForm::Utf8, UtfForm::Utf16, UtfForm::Utf32] {
        group.bench_with_input(BenchmarkId::from_parameter(to), &broken, |b, src| {
            b.iter(|| convert(black_box(src), UtfForm::Utf8, to, TranscodeOptions::lenient()).unwrap());
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_conversions, bench_lenient_repair }
criterion_main!(benches);
