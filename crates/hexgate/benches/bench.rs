use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use hexgate::{AdapterConfig, StreamRng, decode_word, encode_word, reverse_bits};
use std::time::Instant;

// Number of words served per benchmark iteration.
const TOTAL_WORDS: usize = 4096;

fn encoded_stream(words: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(words * 9);
    for i in 0..words {
        let word = (i as u32).wrapping_mul(0x9E37_79B9);
        out.extend_from_slice(&encode_word(word));
        if i % 256 == 255 {
            out.push(b'\n');
        }
    }
    out
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(1));

    group.bench_function("decode_word", |b| {
        b.iter(|| decode_word(black_box(b"DEADBEEF")));
    });
    group.bench_function("reverse_bits", |b| {
        b.iter(|| reverse_bits(black_box(0xDEAD_BEEF)));
    });

    group.finish();
}

/// Benchmarks the serving hot path, refills included.
fn bench_stream(c: &mut Criterion, group_name: &str, reverse: bool) {
    let input = encoded_stream(TOTAL_WORDS);
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_WORDS as u64));

    group.bench_function(format!("elems/{TOTAL_WORDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let config = AdapterConfig::new("bench").with_reverse_bits(reverse);
                let mut rng = StreamRng::new(input.as_slice(), config);
                for _ in 0..TOTAL_WORDS {
                    black_box(rng.next_raw_word());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

fn bench_stream_plain(c: &mut Criterion) {
    bench_stream(c, "stream/plain", false);
}

fn bench_stream_reversed(c: &mut Criterion) {
    bench_stream(c, "stream/reversed", true);
}

criterion_group!(
    benches,
    bench_decode,
    bench_stream_plain,
    bench_stream_reversed
);
criterion_main!(benches);
