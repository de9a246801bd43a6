//! Benchmark pairing.
//! It measures the pairing of the SM9 curve.
//!
//! To run this benchmark:
//!
//!     cargo bench --bench  pairing

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pairing::{Engine, MillerLoopResult, MultiMillerLoop};
use rand_core::SeedableRng;
use rand_xorshift::XorShiftRng;
use sm9curves::ff::Field;
use sm9curves::group::prime::PrimeCurveAffine;
use sm9curves::sm9::{Fr, G1Affine, G2Affine, G2Prepared, Sm9};

const SEED: [u8; 16] = [
    0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc, 0xe5,
];

fn bench_pairing<E: Engine>(c: &mut Criterion, name: &'static str) {
    {
        let mut rng = XorShiftRng::from_seed(SEED);
        let mut group = c.benchmark_group(format!("{} Pairing", name));

        group.significance_level(0.1).sample_size(100);
        group.throughput(Throughput::Elements(1));

        let a = E::Fr::random(&mut rng);
        let b = E::Fr::random(&mut rng);

        let g1 = E::G1Affine::generator();
        let g1_affine = (g1 * a).into();

        let g2 = E::G2Affine::generator();
        let g2_affine = (g2 * b).into();

        group.bench_function(&format!("{} pairing", name), move |b| {
            b.iter(|| E::pairing(&black_box(g1_affine), &black_box(g2_affine)))
        });
    }
}

fn bench_sm9_pairing(c: &mut Criterion) {
    bench_pairing::<Sm9>(c, "SM9");
}

fn bench_sm9_stages(c: &mut Criterion) {
    let mut rng = XorShiftRng::from_seed(SEED);
    let mut group = c.benchmark_group("SM9 pairing stages");
    group.significance_level(0.1).sample_size(100);

    let p: G1Affine = (G1Affine::generator() * Fr::random(&mut rng)).into();
    let q: G2Affine = (G2Affine::generator() * Fr::random(&mut rng)).into();
    let prepared = G2Prepared::from(q);
    let f = Sm9::multi_miller_loop(&[(&p, &prepared)]);

    group.bench_function("G2 prepare", |b| b.iter(|| G2Prepared::from(black_box(q))));
    group.bench_function("Miller loop", |b| {
        b.iter(|| Sm9::multi_miller_loop(&[(black_box(&p), black_box(&prepared))]))
    });
    group.bench_function("final exponentiation", |b| {
        b.iter(|| black_box(f).final_exponentiation())
    });
    group.finish()
}

criterion_group!(benches, bench_sm9_pairing, bench_sm9_stages);
criterion_main!(benches);
