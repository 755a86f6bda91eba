//! Property-based invariant tests for the windowing engine.
//!
//! Drives a list through random jumps and drags and checks after every
//! frame:
//!
//! ## Invariants
//!
//! 1. Membership: the window is exactly the items `i` with
//!    `table[i] <= t + h` and `table[i + 1] > t`, plus the load-more row at
//!    `count` when more pages exist and the viewport reaches the end.
//! 2. Order: window indices are strictly increasing and contiguous.
//! 3. Partition: no surface is both bound and pooled; together they are
//!    every live surface of the host.
//! 4. Pooled layers are unbound and hidden.
//! 5. Bound layers sit at their height-table offset and carry their item's
//!    type; pooled layers are keyed by a type the list hands out.

use std::collections::BTreeSet;

use infinilist::{InfiniteList, LOAD_MORE_TYPE, ListConfig};
use infinilist_harness::{FrameClock, HeadlessHost, HeadlessSurface, ScriptedTouch, TouchScript};
use proptest::prelude::*;

// ── Strategies ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Jump(usize),
    Drag(f64),
    Idle,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..500).prop_map(Op::Jump),
        (-900.0f64..900.0).prop_map(Op::Drag),
        Just(Op::Idle),
    ]
}

fn arb_heights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(prop_oneof![1 => Just(0.0), 6 => 1.0f64..120.0], 0..150)
}

fn item_type(index: usize) -> &'static str {
    if index % 5 == 0 { "header" } else { "row" }
}

// ── Harness ───────────────────────────────────────────────────────────────

fn build(heights: Vec<f64>, viewport: f64, has_more: bool) -> (InfiniteList<HeadlessHost>, TouchScript) {
    let count = heights.len();
    let config = ListConfig::new(move || count, |_, _: &mut HeadlessSurface| {})
        .with_item_height(move |i| heights[i])
        .with_item_type(item_type)
        .with_has_more(move || has_more);
    let mut list = InfiniteList::new(config);
    let (touch, script) = ScriptedTouch::boxed();
    list.attach(HeadlessHost::new(320.0, viewport), touch)
        .expect("attach");
    (list, script)
}

fn apply(list: &mut InfiniteList<HeadlessHost>, script: &TouchScript, clock: &mut FrameClock, op: &Op) {
    match *op {
        Op::Jump(target) => {
            let count = list.height_table().item_count();
            if count > 0 {
                list.scroll_to_item(target % count, false).expect("in range");
            }
        }
        Op::Drag(delta) => script.drag(1000.0, 1000.0 - delta, 3, clock.now()),
        Op::Idle => {}
    }
    list.tick(clock.next_frame());
}

fn check(list: &InfiniteList<HeadlessHost>, viewport: f64, has_more: bool) -> Result<(), TestCaseError> {
    let table = list.height_table();
    let t = list.scroll_offset();
    let bounds = table.as_slice();
    let count = table.item_count();

    // 1. Membership.
    let mut expected: Vec<usize> = (0..count)
        .filter(|&i| bounds[i] <= t + viewport && bounds[i + 1] > t)
        .collect();
    if has_more && table.total() <= t + viewport {
        expected.push(count);
    }
    let indices = list.rendered_indices();
    prop_assert_eq!(&indices, &expected, "offset {}", t);

    // 2. Order.
    for pair in indices.windows(2) {
        prop_assert_eq!(pair[0] + 1, pair[1]);
    }

    // 3. Partition.
    let bound: BTreeSet<u64> = list.rendered_layers().map(|l| l.surface().id()).collect();
    let pooled: BTreeSet<u64> = list.pool().iter().map(|l| l.surface().id()).collect();
    prop_assert_eq!(bound.len(), list.rendered_layers().count());
    prop_assert!(bound.is_disjoint(&pooled));
    let all: BTreeSet<u64> = bound.union(&pooled).copied().collect();
    prop_assert_eq!(&all, list.host().expect("attached").live_surfaces());

    // 4. Pooled layers are parked.
    for layer in list.pool().iter() {
        prop_assert!(!layer.is_bound());
        prop_assert!(layer.surface().is_hidden());
    }

    // 5. Geometry.
    for layer in list.rendered_layers() {
        let index = layer.index().expect("bound");
        prop_assert_eq!(layer.offset(), table.offset_of(index));
        prop_assert!(!layer.surface().is_hidden());
        if index == count {
            prop_assert_eq!(layer.type_id(), Some(LOAD_MORE_TYPE));
        } else {
            prop_assert_eq!(layer.type_id(), Some(item_type(index)));
        }
    }
    for layer in list.pool().iter() {
        let type_id = layer.type_id().unwrap_or_default();
        prop_assert!(
            ["header", "row", LOAD_MORE_TYPE].contains(&type_id),
            "unexpected pool key {:?}", type_id
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn window_tracks_scroll_offset(
        heights in arb_heights(),
        viewport in 50.0f64..900.0,
        ops in prop::collection::vec(arb_op(), 1..40),
    ) {
        let (mut list, script) = build(heights, viewport, false);
        let mut clock = FrameClock::new();
        list.tick(clock.next_frame());
        check(&list, viewport, false)?;
        for op in &ops {
            apply(&mut list, &script, &mut clock, op);
            check(&list, viewport, false)?;
        }
    }

    #[test]
    fn window_tracks_scroll_offset_with_load_more(
        heights in arb_heights(),
        viewport in 50.0f64..900.0,
        ops in prop::collection::vec(arb_op(), 1..40),
    ) {
        let (mut list, script) = build(heights, viewport, true);
        let mut clock = FrameClock::new();
        list.tick(clock.next_frame());
        check(&list, viewport, true)?;
        for op in &ops {
            apply(&mut list, &script, &mut clock, op);
            check(&list, viewport, true)?;
        }
    }

    #[test]
    fn detach_leaves_no_live_surfaces(
        heights in arb_heights(),
        ops in prop::collection::vec(arb_op(), 0..20),
    ) {
        let (mut list, script) = build(heights, 400.0, false);
        let mut clock = FrameClock::new();
        for op in &ops {
            apply(&mut list, &script, &mut clock, op);
        }
        let host = list.detach().expect("attached");
        prop_assert!(host.live_surfaces().is_empty());
        prop_assert_eq!(host.created(), host.destroyed());
    }
}
