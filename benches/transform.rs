//! Benchmarks for transform composition, inversion and batch application.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use affinum::simd::transform_points_x4;
use affinum::{AffineTransform3, Mat3, Point3, TransformChain, Vec3};

fn uniform_node(seed: f64) -> AffineTransform3<f64> {
    let mut t = AffineTransform3::from_rotation(Mat3::rotation_z(seed) * Mat3::rotation_x(seed * 0.5));
    t.set_uniform_scale(1.0 + seed * 0.01).unwrap();
    t.set_translation(seed, -seed, 0.5 * seed);
    t
}

fn general_node(seed: f64) -> AffineTransform3<f64> {
    let mut t = AffineTransform3::from_matrix(Mat3::from_rows([
        [1.0, 0.1 * seed, 0.0],
        [0.0, 1.0, 0.2],
        [0.05 * seed, 0.0, 1.0],
    ]));
    t.set_translation(seed, 0.0, 1.0);
    t
}

/// Generates deterministic points in a 100-unit cube.
fn generate_points(count: usize, seed: u64) -> Vec<Point3<f32>> {
    let mut state = seed;
    let mut next = || {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state as f32 / u64::MAX as f32) * 100.0
    };
    (0..count).map(|_| Point3::new(next(), next(), next())).collect()
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    let (ua, ub) = (uniform_node(0.3), uniform_node(0.7));
    group.bench_function("uniform_fast_path", |b| {
        b.iter(|| black_box(&ua).compose(black_box(&ub)))
    });

    let (ga, gb) = (general_node(0.3), general_node(0.7));
    group.bench_function("general_fallback", |b| {
        b.iter(|| black_box(&ga).compose(black_box(&gb)))
    });

    group.bench_function("homogeneous_product", |b| {
        b.iter(|| *black_box(&ga).h() * *black_box(&gb).h())
    });

    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_world");

    for depth in [4, 16, 64] {
        let mut chain = TransformChain::new();
        for i in 0..depth {
            chain.push(uniform_node(i as f64 * 0.1));
        }
        group.bench_with_input(BenchmarkId::new("uniform", depth), &chain, |b, chain| {
            b.iter(|| chain.world())
        });

        let mut chain = TransformChain::new();
        for i in 0..depth {
            chain.push(general_node(i as f64 * 0.1));
        }
        group.bench_with_input(BenchmarkId::new("general", depth), &chain, |b, chain| {
            b.iter(|| chain.world())
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_h");

    let mut nonuniform = uniform_node(0.4);
    nonuniform.set_scale(1.0, 2.0, 3.0).unwrap();
    let cases = [
        ("uniform", uniform_node(0.4)),
        ("nonuniform", nonuniform),
        ("general", general_node(0.4)),
    ];

    for (name, t) in &cases {
        group.bench_with_input(BenchmarkId::new("recompute", name), t, |b, t| {
            b.iter(|| {
                let mut t = t.clone();
                t.set_translation_vec(black_box(Vec3::new(1.0, 2.0, 3.0)));
                t.inverse_h()
            })
        });
        group.bench_with_input(BenchmarkId::new("cached", name), t, |b, t| {
            let _ = t.inverse_h();
            b.iter(|| black_box(t).inverse_h())
        });
    }

    group.finish();
}

fn bench_apply_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_points");

    let mut t: AffineTransform3<f32> = AffineTransform3::from_rotation(Mat3::rotation_y(0.8));
    t.set_scale(1.0, 2.0, 0.5).unwrap();
    t.set_translation(10.0, -3.0, 2.0);

    for count in [100, 10000, 100000] {
        let points = generate_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("scalar", count), &points, |b, pts| {
            b.iter(|| t.apply_points(black_box(pts)))
        });
        group.bench_with_input(BenchmarkId::new("simd", count), &points, |b, pts| {
            b.iter(|| transform_points_x4(t.h(), black_box(pts)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compose,
    bench_chain,
    bench_inverse,
    bench_apply_points
);
criterion_main!(benches);
