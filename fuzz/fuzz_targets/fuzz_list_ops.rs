#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use infinilist::prelude::Duration;
use infinilist::{InfiniteList, LOAD_MORE_TYPE, ListConfig};
use infinilist_core::Surface;
use infinilist_harness::{FrameClock, HeadlessHost, HeadlessSurface};
use infinilist_scroll::NoTouch;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    count: u8,
    has_more: bool,
    row_height: u8,
    viewport: u8,
    ops: Vec<Op>,
}

#[derive(Debug, Arbitrary)]
enum Op {
    Frame,
    Stall(u16),
    Jump(u16),
    Resize(u8),
    Refresh,
    Reattach,
}

fuzz_target!(|input: Input| {
    if input.ops.len() > 256 {
        return;
    }
    let count = usize::from(input.count);
    let row_height = f64::from(input.row_height.max(1));
    let viewport = f64::from(input.viewport) * 2.0;
    let has_more = input.has_more;

    let config = ListConfig::new(
        move || count,
        |index, surface: &mut HeadlessSurface| surface.set_text(&index.to_string()),
    )
    .with_item_height(move |_| row_height)
    .with_has_more(move || has_more)
    .with_page_fetcher(|_, _| {});
    let mut list = InfiniteList::new(config);
    let _ = list.attach(HeadlessHost::new(300.0, viewport), Box::new(NoTouch));
    let mut clock = FrameClock::new();

    for op in &input.ops {
        match *op {
            Op::Frame => {
                list.tick(clock.next_frame());
            }
            Op::Stall(ms) => {
                list.tick(clock.advance(Duration::from_millis(u64::from(ms))));
            }
            Op::Jump(index) => {
                let _ = list.scroll_to_item(usize::from(index) % count.max(1), false);
            }
            Op::Resize(height) => {
                if let Some(host) = list.host_mut() {
                    host.set_viewport(300.0, f64::from(height) * 2.0);
                }
                let _ = list.handle_resize();
            }
            Op::Refresh => {
                let _ = list.refresh();
            }
            Op::Reattach => {
                if let Some(host) = list.detach() {
                    assert_eq!(host.live_surfaces().len(), 0, "detach leaked surfaces");
                    let _ = list.attach(HeadlessHost::new(300.0, viewport), Box::new(NoTouch));
                }
            }
        }

        let indices = list.rendered_indices();
        for pair in indices.windows(2) {
            assert_eq!(pair[0] + 1, pair[1], "window not contiguous");
        }
        for layer in list.rendered_layers() {
            if layer.type_id() == Some(LOAD_MORE_TYPE) {
                assert_eq!(layer.index(), Some(count));
            } else {
                assert!(layer.index().is_some_and(|i| i < count));
            }
        }
        for entry in list.backlog().iter() {
            assert!(indices.contains(&entry), "backlog entry outside window");
        }
        if let Some(host) = list.host() {
            let ids: BTreeSet<u64> = list
                .rendered_layers()
                .map(|l| l.surface().id())
                .chain(list.pool().iter().map(|l| l.surface().id()))
                .collect();
            assert_eq!(&ids, host.live_surfaces(), "surface accounting drifted");
        }
    }
});
