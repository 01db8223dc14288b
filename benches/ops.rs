use std::hint::black_box;

use bigint::BigInt;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{distributions::Uniform, prelude::Distribution, thread_rng};

fn bench_ops(c: &mut Criterion) {
    let mut rng = thread_rng();
    let dist = Uniform::new(BigInt::one(), BigInt::one().shl_expanding(256));

    let a = dist.sample(&mut rng);
    let b = dist.sample(&mut rng);

    c.bench_function("add_256", |bench| {
        bench.iter(|| black_box(&a) + black_box(&b))
    });
    c.bench_function("sub_256", |bench| {
        bench.iter(|| black_box(&a) - black_box(&b))
    });
    c.bench_function("mul_256", |bench| {
        bench.iter(|| black_box(&a) * black_box(&b))
    });
    c.bench_function("div_rem_256", |bench| {
        bench.iter(|| black_box(&a).checked_div_rem(black_box(&b)))
    });
    c.bench_function("to_decimal_256", |bench| bench.iter(|| a.to_string()));
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);
