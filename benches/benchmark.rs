use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use utf8chars::{
    chars_len, is_valid_utf8, utf32_to_utf8, utf8_to_utf32, Utf8AsChars, Utf8AsChars32,
};

const SAMPLES: [(&str, &str); 4] = [
    ("ascii", "The quick brown fox jumps over the lazy dog. "),
    ("latin", "Se\u{f1}or Mu\u{f1}oz pidi\u{f3} caf\u{e9} cr\u{e8}me br\u{fb}l\u{e9}e. "),
    ("cjk", "\u{65e5}\u{672c}\u{8a9e}\u{306e}\u{5165}\u{529b}\u{3068}\u{5909}\u{63db}\u{3002}"),
    ("emoji", "\u{1f600}\u{1f680}\u{1f30d}\u{1f4a1} mixed "),
];

fn inputs() -> Vec<(&'static str, Vec<u8>)> {
    SAMPLES
        .iter()
        .map(|(name, text)| (*name, text.repeat(256).into_bytes()))
        .collect()
}

fn counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting");
    for (name, bytes) in inputs() {
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("chars_len", name), &bytes, |b, bytes| {
            b.iter(|| chars_len(bytes))
        });
        group.bench_with_input(BenchmarkId::new("is_valid_utf8", name), &bytes, |b, bytes| {
            b.iter(|| is_valid_utf8(bytes))
        });
    }
    group.finish();
}

fn iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");
    for (name, bytes) in inputs() {
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("chars32", name), &bytes, |b, bytes| {
            b.iter(|| Utf8AsChars32::new(bytes).into_iter().count())
        });
        group.bench_with_input(BenchmarkId::new("chars", name), &bytes, |b, bytes| {
            b.iter(|| Utf8AsChars::new(bytes).into_iter().count())
        });
        group.bench_with_input(BenchmarkId::new("back", name), &bytes, |b, bytes| {
            b.iter(|| Utf8AsChars32::new(bytes).back())
        });
    }
    group.finish();
}

fn conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    for (name, bytes) in inputs() {
        let utf32 = utf8_to_utf32(&bytes);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("utf8_to_utf32", name), &bytes, |b, bytes| {
            b.iter(|| utf8_to_utf32(bytes))
        });
        group.bench_with_input(BenchmarkId::new("utf32_to_utf8", name), &utf32, |b, utf32| {
            b.iter(|| utf32_to_utf8(utf32))
        });
    }
    group.finish();
}

criterion_group!(benches, counting, iteration, conversion);

criterion_main!(benches);
