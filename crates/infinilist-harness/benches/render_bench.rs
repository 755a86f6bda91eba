//! Benchmark: full render passes against the headless host.
//!
//! Run with: `cargo bench -p infinilist-harness --bench render_bench`
//!
//! `scroll_step` is the steady-state cost of a 60fps fling (a few rows
//! recycled per frame). `jump` replaces the whole window from the pool.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use infinilist::{InfiniteList, ListConfig};
use infinilist_core::Surface;
use infinilist_harness::{FrameClock, HeadlessHost, HeadlessSurface};
use infinilist_scroll::NoTouch;

const ITEMS: usize = 100_000;

fn attached() -> InfiniteList<HeadlessHost> {
    let config = ListConfig::new(
        || ITEMS,
        |index, surface: &mut HeadlessSurface| surface.set_text(&format!("Item {index}")),
    )
    .with_item_height(|index| 32.0 + (index % 4) as f64 * 8.0);
    let mut list = InfiniteList::new(config);
    list.attach(HeadlessHost::new(360.0, 800.0), Box::new(NoTouch))
        .expect("attach");
    list
}

fn bench_scroll_step(c: &mut Criterion) {
    let mut list = attached();
    let mut clock = FrameClock::new();
    list.tick(clock.next_frame());
    let mut item = 0usize;
    c.bench_function("render/scroll_step", |b| {
        b.iter(|| {
            item = (item + 3) % (ITEMS - 100);
            list.scroll_to_item(item, false).expect("attached");
            black_box(list.tick(clock.next_frame()))
        })
    });
}

fn bench_jump(c: &mut Criterion) {
    let mut list = attached();
    let mut clock = FrameClock::new();
    list.tick(clock.next_frame());
    let mut item = 0usize;
    c.bench_function("render/jump", |b| {
        b.iter(|| {
            item = (item + 7_919) % (ITEMS - 100);
            list.scroll_to_item(item, false).expect("attached");
            black_box(list.tick(clock.next_frame()))
        })
    });
}

fn bench_refresh(c: &mut Criterion) {
    let mut list = attached();
    c.bench_function("render/refresh_100k", |b| {
        b.iter(|| black_box(list.refresh()))
    });
}

criterion_group!(benches, bench_scroll_step, bench_jump, bench_refresh);
criterion_main!(benches);
