use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kandinsky::{
    complement_hex, ease, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, rounded_gradient,
    rounded_multi_gradient,
};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    group.bench_function("hex-round-trip", |b| {
        b.iter(|| hex_to_rgb(black_box("#6699cc")).map(rgb_to_hex))
    });

    group.bench_function("hsl-round-trip", |b| {
        b.iter(|| hsl_to_rgb(rgb_to_hsl(black_box([175.0, 103.0, 31.0]))))
    });

    group.finish();

    let mut group = c.benchmark_group("palette");

    group.bench_function("eased-gradient-256", |b| {
        b.iter(|| {
            rounded_gradient(
                ease::smoothstep,
                black_box(256),
                [0.0, 0.0, 0.0],
                [255.0, 255.0, 255.0],
            )
        })
    });

    let stops = [
        [255.0, 0.0, 0.0],
        [255.0, 255.0, 0.0],
        [0.0, 255.0, 0.0],
        [0.0, 0.0, 255.0],
    ];
    group.bench_function("multi-gradient-256", |b| {
        b.iter(|| rounded_multi_gradient(black_box(256), &stops))
    });

    group.bench_function("complement-12", |b| {
        b.iter(|| complement_hex(black_box(12), "#af671f"))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
