use criterion::{criterion_group, criterion_main, Criterion};
use eca_engines::{EcaEngine, NaiveEngine, PackedEngine, RuleTable, SeedPolicy};

const N: usize = 1 << 16;

fn bench_naive(c: &mut Criterion) {
    let cells = SeedPolicy::Random { seed: Some(42) }.generate(N);
    let mut engine = NaiveEngine::from_generation(RuleTable::new(110), &cells).unwrap();
    c.bench_function("naive", |b| b.iter(|| engine.step()));
}

fn bench_packed(c: &mut Criterion) {
    let cells = SeedPolicy::Random { seed: Some(42) }.generate(N);
    let mut engine = PackedEngine::from_generation(RuleTable::new(110), &cells).unwrap();
    c.bench_function("packed", |b| b.iter(|| engine.step()));
}

fn bench_render(c: &mut Criterion) {
    let history = eca_engines::evolve(30, 400, 200, SeedPolicy::Centered).unwrap();
    c.bench_function("render", |b| b.iter(|| eca::to_image(&history, 2).unwrap()));
}

criterion_group!(benches, bench_naive, bench_packed, bench_render);
criterion_main!(benches);
