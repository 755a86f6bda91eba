//! Benchmark: height-table lookups and pool churn on the render path.
//!
//! Run with: `cargo bench -p infinilist-core --bench window_bench`
//!
//! `index_at` runs twice per render (viewport top and bottom); pool churn
//! is what a fast fling costs when every frame recycles a screenful.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use infinilist_core::{ElementStyle, HeightTable, Layer, LayerHeight, LayerPool, ReleaseMode, Surface};

#[derive(Debug, Default)]
struct NullSurface;

impl Surface for NullSurface {
    fn apply_style(&mut self, _style: &ElementStyle) {}
    fn set_text(&mut self, _text: &str) {}
}

fn bench_index_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("height_table/index_at");
    for &count in &[1_000usize, 100_000, 1_000_000] {
        let table = HeightTable::build(count, |i| 20.0 + (i % 7) as f64 * 5.0);
        let total = table.total();
        group.bench_with_input(BenchmarkId::from_parameter(count), &table, |b, table| {
            let mut y = 0.0;
            b.iter(|| {
                y = (y + 997.0) % total;
                black_box(table.index_at(black_box(y)))
            });
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("height_table/build_100k", |b| {
        b.iter(|| black_box(HeightTable::build(100_000, |i| 40.0 + (i % 3) as f64)))
    });
}

fn bench_pool_churn(c: &mut Criterion) {
    c.bench_function("layer_pool/recycle_screenful", |b| {
        let mut pool: LayerPool<NullSurface> = LayerPool::new();
        for i in 0..16 {
            let mut layer = Layer::new(NullSurface);
            layer.attach(i, i as f64 * 40.0, 320.0, LayerHeight::Px(40.0), "row");
            let _ = pool.release(layer, ReleaseMode::Keep);
        }
        let mut index = 0usize;
        b.iter(|| {
            let mut taken = Vec::with_capacity(16);
            for _ in 0..16 {
                let mut layer = pool.borrow("row").unwrap_or_else(|| Layer::new(NullSurface));
                layer.attach(index, index as f64 * 40.0, 320.0, LayerHeight::Px(40.0), "row");
                index += 1;
                taken.push(layer);
            }
            for layer in taken {
                let _ = pool.release(layer, ReleaseMode::Keep);
            }
        });
    });
}

criterion_group!(benches, bench_index_at, bench_build, bench_pool_churn);
criterion_main!(benches);
