//! Property-based invariant tests for the buffer and diff.
//!
//! These tests verify the structural invariants the rest of the pipeline
//! relies on:
//!
//! 1. Writes are clipped: any (x, y) write either lands in bounds or is a
//!    no-op; it never faults.
//! 2. In-bounds writes round-trip through `get`.
//! 3. Fill never touches cells outside the filled rect.
//! 4. Diff of a buffer with itself is empty.
//! 5. Diff length equals the number of cells that actually differ, and
//!    runs cover exactly the changed positions.
//! 6. Resize always yields a fully blank buffer of the new size.

use proptest::prelude::*;
use textwall_core::geometry::Rect;
use textwall_render::buffer::Buffer;
use textwall_render::cell::{Cell, Color};
use textwall_render::diff::BufferDiff;

// ── Helpers ─────────────────────────────────────────────────────────────

fn dims_strategy() -> impl Strategy<Value = (u16, u16)> {
    (1u16..=64, 1u16..=48)
}

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Default),
        Just(Color::Border),
        Just(Color::Info),
        Just(Color::Status),
        Just(Color::Text),
        Just(Color::RainBright),
        Just(Color::RainMid),
        Just(Color::RainDim),
        Just(Color::RainDimmer),
    ]
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    (any::<char>(), color_strategy()).prop_map(|(ch, color)| Cell::new(ch, color))
}

// ═════════════════════════════════════════════════════════════════════════
// 1 + 2. Clipped writes: in bounds round-trips, out of bounds is a no-op
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn set_is_clipped_and_roundtrips(
        (w, h) in dims_strategy(),
        x in any::<u16>(),
        y in any::<u16>(),
        cell in cell_strategy(),
    ) {
        let mut buf = Buffer::new(w, h);
        buf.set(x, y, cell);

        if x < w && y < h {
            prop_assert_eq!(buf.get(x, y), Some(&cell));
        } else {
            prop_assert!(buf.get(x, y).is_none());
            // Nothing else was disturbed either
            for yy in 0..h {
                for xx in 0..w {
                    prop_assert!(buf.get(xx, yy).is_some_and(Cell::is_blank));
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Fill never touches cells outside the rect
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fill_stays_inside_rect(
        (w, h) in dims_strategy(),
        rx in 0u16..=80,
        ry in 0u16..=60,
        rw in 0u16..=80,
        rh in 0u16..=60,
        cell in cell_strategy(),
    ) {
        let rect = Rect::new(rx, ry, rw, rh);
        let mut buf = Buffer::new(w, h);
        buf.fill(rect, cell);

        for y in 0..h {
            for x in 0..w {
                let got = buf.get(x, y);
                if rect.contains(x, y) {
                    prop_assert_eq!(got, Some(&cell));
                } else {
                    prop_assert!(got.is_some_and(Cell::is_blank));
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Self-diff is empty
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn self_diff_is_empty(
        (w, h) in dims_strategy(),
        writes in prop::collection::vec((any::<u16>(), any::<u16>(), cell_strategy()), 0..32),
    ) {
        let mut buf = Buffer::new(w, h);
        for (x, y, cell) in writes {
            buf.set(x, y, cell);
        }
        let diff = BufferDiff::compute(&buf, &buf.clone());
        prop_assert!(diff.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Diff changes and runs agree with a direct comparison
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn diff_matches_direct_comparison(
        (w, h) in dims_strategy(),
        writes in prop::collection::vec((any::<u16>(), any::<u16>(), cell_strategy()), 0..32),
    ) {
        let old = Buffer::new(w, h);
        let mut new = Buffer::new(w, h);
        for (x, y, cell) in writes {
            new.set(x % w, y % h, cell);
        }

        let diff = BufferDiff::compute(&old, &new);

        let mut expected = Vec::new();
        for y in 0..h {
            for x in 0..w {
                if old.get(x, y) != new.get(x, y) {
                    expected.push((x, y));
                }
            }
        }
        prop_assert_eq!(diff.changes(), expected.as_slice());

        // Runs cover exactly the changed positions
        let mut covered = Vec::new();
        for run in diff.runs() {
            for x in run.x0..=run.x1 {
                covered.push((x, run.y));
            }
        }
        prop_assert_eq!(covered, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Resize yields a blank buffer of the new size
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resize_blanks((w, h) in dims_strategy(), (nw, nh) in dims_strategy()) {
        let mut buf = Buffer::new(w, h);
        buf.fill(buf.area(), Cell::from_char('#'));
        buf.resize(nw, nh);

        prop_assert_eq!(buf.width(), nw);
        prop_assert_eq!(buf.height(), nh);
        for y in 0..nh {
            for x in 0..nw {
                prop_assert!(buf.get(x, y).is_some_and(Cell::is_blank));
            }
        }
    }
}
