use chart_core::{compute_histogram, generate_samples, DEFAULT_BIN_COUNT};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_samples_10k", |b| b.iter(|| black_box(generate_samples())));
}

fn bench_histogram(c: &mut Criterion) {
    let samples = generate_samples();
    let mut group = c.benchmark_group("compute_histogram");
    for &bins in &[10usize, DEFAULT_BIN_COUNT, 256] {
        group.bench_function(format!("bins_{bins}"), |b| {
            b.iter(|| black_box(compute_histogram(black_box(&samples), bins)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_histogram);
criterion_main!(benches);
