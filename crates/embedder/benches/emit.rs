//! Benchmarks for byte-array generation.

use bytembed_embedder::{embed_reader, EmbedConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn generate_test_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i * 31 % 251) as u8).collect()
}

fn bench_embed(c: &mut Criterion) {
    let mut group = c.benchmark_group("embed_reader");

    for size in [1024, 65536, 1048576].iter() {
        let data = generate_test_data(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        for chunk_size in [256, 65536] {
            let config = EmbedConfig {
                chunk_size,
                ..EmbedConfig::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("chunk_{chunk_size}"), size),
                &data,
                |b, data| {
                    b.iter(|| {
                        let mut out = Vec::with_capacity(data.len() * 7);
                        embed_reader("bench", black_box(data.as_slice()), &mut out, &config)
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_embed);
criterion_main!(benches);
