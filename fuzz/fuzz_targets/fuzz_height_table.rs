#![no_main]

use infinilist::VisibleRange;
use infinilist_core::HeightTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the viewport, the rest are item heights (0..=255).
    let Some((&viewport, heights)) = data.split_first() else {
        return;
    };
    if heights.len() > 4096 {
        return;
    }
    let viewport = f64::from(viewport) * 4.0;
    let table = HeightTable::build(heights.len(), |i| f64::from(heights[i]));

    assert_eq!(table.len(), heights.len() + 1);
    assert_eq!(table.as_slice()[0], 0.0);
    for pair in table.as_slice().windows(2) {
        assert!(pair[0] <= pair[1], "table not monotone");
    }

    let total = table.total();
    let mut y = 0.0;
    while y <= total + 50.0 {
        let index = table.index_at(y);
        assert!(index <= table.item_count());
        if index < table.item_count() {
            assert!(table.as_slice()[index + 1] > y);
        }
        if index > 0 {
            assert!(table.as_slice()[index] <= y);
        }

        for has_more in [false, true] {
            let range = VisibleRange::compute(&table, y, viewport, has_more);
            assert!(range.top <= range.end);
            assert!(range.end <= table.item_count());
            if range.wants_more {
                assert!(has_more);
                assert_eq!(range.keep_end(), range.end + 1);
            }
        }
        y += 7.5;
    }
});
