use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::DMatrix;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use ring_align::CircularAligner;

fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("circular_align");
    group.sample_size(20);

    for &(l, n) in &[(64usize, 16usize), (256, 64)] {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let signals = DMatrix::from_fn(l, n, |_, _| rng.gen_range(-1.0..1.0));
        let aligner = CircularAligner::new(n / 2);

        group.bench_function(format!("{}x{}", l, n), |b| {
            b.iter(|| {
                let aligned = aligner.align(black_box(&signals)).unwrap();
                black_box(aligned)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_align);
criterion_main!(benches);
