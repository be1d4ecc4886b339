//! Benchmarks for the matchbook engine hot path.
//!
//! ```bash
//! cargo bench -p matchbook-engine
//! ```

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use matchbook_engine::Engine;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic mixed operation stream: mostly inserts around a tight
/// spread so a realistic share of them cross.
fn generate_operations(count: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ops = Vec::with_capacity(count);
    for id in 1..=count as u64 {
        let side = if rng.gen_bool(0.5) { "BUY" } else { "SELL" };
        let cents: i64 = rng.gen_range(9_950..=10_050);
        let volume: u64 = rng.gen_range(1..=100);
        ops.push(format!(
            "INSERT,{id},FFLY,{side},{}.{:02},{volume}",
            cents / 100,
            cents % 100,
        ));
    }
    ops
}

fn bench_insert_throughput(c: &mut Criterion) {
    let ops = generate_operations(10_000, 42);

    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements(ops.len() as u64));
    group.bench_function("insert_10k_mixed", |b| {
        b.iter_batched(
            Engine::new,
            |mut engine| {
                for op in &ops {
                    engine.apply_line(op);
                }
                black_box(engine.book_count())
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let ops = generate_operations(10_000, 7);
    let mut engine = Engine::new();
    for op in &ops {
        engine.apply_line(op);
    }

    c.bench_function("render_snapshot", |b| {
        b.iter(|| black_box(engine.render()));
    });
}

criterion_group!(benches, bench_insert_throughput, bench_render);
criterion_main!(benches);
