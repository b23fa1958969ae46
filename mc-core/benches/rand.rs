use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mc_core::rand::{mix, JavaRandom};

fn java_random_next_int_benchmark(c: &mut Criterion) {
    let mut rand = JavaRandom::new(42);
    c.bench_function("JavaRandom::next_int(bounded)", |b| {
        b.iter(|| rand.next_int_bounded(black_box(1000)).unwrap());
    });
}

fn java_random_next_double_benchmark(c: &mut Criterion) {
    let mut rand = JavaRandom::new(42);
    c.bench_function("JavaRandom::next_double", |b| {
        b.iter(|| rand.next_double());
    });
}

fn mix_benchmark(c: &mut Criterion) {
    c.bench_function("mix", |b| {
        b.iter(|| mix(black_box(1234567890123), black_box(42)));
    });
}

criterion_group!(benches, java_random_next_int_benchmark, java_random_next_double_benchmark, mix_benchmark);
criterion_main!(benches);
