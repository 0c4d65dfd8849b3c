#![forbid(unsafe_code)]

//! The falling-character rain animation.
//!
//! Drops live in the side margins only. Each tick every drop falls one
//! row, drops whose head has passed the bottom edge are culled, and one
//! fair coin flip decides whether a new drop spawns at the top of a
//! uniformly chosen margin column.
//!
//! Randomness is a xorshift32 stream owned by the field, so two fields
//! built from the same seed animate identically. Glyphs are re-rolled
//! every frame from a counter-derived stream, which keeps [`RainField::paint`]
//! callable through `&self` and makes frames reproducible.

use std::ops::Range;

use textwall_render::buffer::Buffer;
use textwall_render::cell::{Cell, Color};

/// Number of rows a drop's trail spans, head included.
pub const TRAIL_LEN: u16 = 8;

/// xorshift32 step. `state` must be nonzero and stays nonzero.
fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Glyph for one cell of a trail: ASCII `'0'..='Z'`.
fn roll_glyph(rng: &mut u32) -> char {
    (48 + (xorshift32(rng) % 43) as u8) as char
}

/// Trail color by distance from the head.
fn tier_color(offset: u16) -> Color {
    match offset {
        0 | 1 => Color::RainBright,
        2 | 3 => Color::RainMid,
        4 | 5 => Color::RainDim,
        _ => Color::RainDimmer,
    }
}

/// One falling drop: a column and the row its head occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainDrop {
    col: u16,
    head_row: u16,
}

impl RainDrop {
    #[must_use]
    pub fn col(&self) -> u16 {
        self.col
    }

    #[must_use]
    pub fn head_row(&self) -> u16 {
        self.head_row
    }

    /// Paint the trail into blank cells only.
    fn paint(&self, buf: &mut Buffer, rng: &mut u32) {
        for offset in 0..TRAIL_LEN {
            // Always roll, so drop order and occlusion cannot shift the
            // glyph stream of later drops within a frame.
            let glyph = roll_glyph(rng);
            let Some(row) = self.head_row.checked_sub(offset) else {
                continue;
            };
            if buf.get(self.col, row).is_some_and(|cell| cell.is_blank()) {
                buf.set(self.col, row, Cell::new(glyph, tier_color(offset)));
            }
        }
    }
}

/// All live drops plus the spawn RNG.
#[derive(Debug, Clone)]
pub struct RainField {
    drops: Vec<RainDrop>,
    rng: u32,
    frame: u64,
}

impl RainField {
    /// Create a field from an explicit seed (zero is remapped).
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            drops: Vec::new(),
            rng: seed | 1,
            frame: 0,
        }
    }

    /// Create a field seeded from the system clock.
    #[must_use]
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        Self::new(nanos)
    }

    /// Live drops, oldest first.
    #[must_use]
    pub fn drops(&self) -> &[RainDrop] {
        &self.drops
    }

    /// Advance one tick: fall, cull, maybe spawn.
    ///
    /// `bands` are the column ranges where drops may appear; when both
    /// are empty the coin is still flipped (keeping the stream stable)
    /// but nothing spawns.
    pub fn advance(&mut self, rows: u16, bands: (Range<u16>, Range<u16>)) {
        self.frame = self.frame.wrapping_add(1);

        for drop in &mut self.drops {
            drop.head_row = drop.head_row.saturating_add(1);
        }
        self.drops.retain(|drop| drop.head_row < rows);

        if xorshift32(&mut self.rng) & 1 == 0
            && let Some(col) = self.pick_column(bands)
        {
            self.drops.push(RainDrop { col, head_row: 0 });
        }
    }

    /// Uniform choice over the union of both bands.
    fn pick_column(&mut self, bands: (Range<u16>, Range<u16>)) -> Option<u16> {
        let (left, right) = bands;
        let total = left.len() + right.len();
        if total == 0 {
            return None;
        }
        let idx = xorshift32(&mut self.rng) as usize % total;
        if idx < left.len() {
            Some(left.start + idx as u16)
        } else {
            Some(right.start + (idx - left.len()) as u16)
        }
    }

    /// Paint every trail into the buffer, skipping occupied cells.
    pub fn paint(&self, buf: &mut Buffer) {
        let mut glyph_rng = (self.frame.wrapping_mul(2654435761) as u32) | 1;
        for drop in &self.drops {
            drop.paint(buf, &mut glyph_rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide_bands() -> (Range<u16>, Range<u16>) {
        (1..20, 60..79)
    }

    #[test]
    fn glyphs_stay_in_the_ascii_window() {
        let mut rng = 0x9e3779b9;
        for _ in 0..1000 {
            let c = roll_glyph(&mut rng);
            assert!(('0'..='Z').contains(&c), "{c:?}");
        }
    }

    #[test]
    fn tiers_darken_down_the_trail() {
        assert_eq!(tier_color(0), Color::RainBright);
        assert_eq!(tier_color(1), Color::RainBright);
        assert_eq!(tier_color(2), Color::RainMid);
        assert_eq!(tier_color(3), Color::RainMid);
        assert_eq!(tier_color(4), Color::RainDim);
        assert_eq!(tier_color(5), Color::RainDim);
        assert_eq!(tier_color(6), Color::RainDimmer);
        assert_eq!(tier_color(7), Color::RainDimmer);
    }

    #[test]
    fn drops_spawn_at_the_top_inside_the_bands() {
        let mut field = RainField::new(7);
        for _ in 0..64 {
            field.advance(1000, wide_bands());
        }
        assert!(!field.drops().is_empty());
        for drop in field.drops() {
            let in_left = (1..20).contains(&drop.col());
            let in_right = (60..79).contains(&drop.col());
            assert!(in_left || in_right, "col {}", drop.col());
        }
    }

    #[test]
    fn drops_are_culled_past_the_bottom_edge() {
        let mut field = RainField::new(3);
        for _ in 0..200 {
            field.advance(10, wide_bands());
        }
        for drop in field.drops() {
            assert!(drop.head_row() < 10);
        }
    }

    #[test]
    fn empty_bands_spawn_nothing() {
        let mut field = RainField::new(5);
        for _ in 0..100 {
            field.advance(1000, (1..1, 79..79));
        }
        assert!(field.drops().is_empty());
    }

    #[test]
    fn spawn_rate_is_about_one_half() {
        let mut field = RainField::new(0xdecafbad);
        let ticks = 2000u32;
        // Tall enough that nothing is culled during the run.
        for _ in 0..ticks {
            field.advance(u16::MAX, wide_bands());
        }
        let rate = field.drops().len() as f64 / f64::from(ticks);
        assert!((rate - 0.5).abs() < 0.05, "rate {rate}");
    }

    #[test]
    fn same_seed_gives_identical_frames() {
        let mut a = RainField::new(42);
        let mut b = RainField::new(42);
        for _ in 0..50 {
            a.advance(24, wide_bands());
            b.advance(24, wide_bands());

            let mut buf_a = Buffer::new(80, 24);
            let mut buf_b = Buffer::new(80, 24);
            a.paint(&mut buf_a);
            b.paint(&mut buf_b);
            assert_eq!(a.drops(), b.drops());
            assert_eq!(
                textwall_render::diff::BufferDiff::compute(&buf_a, &buf_b).len(),
                0
            );
        }
    }

    #[test]
    fn paint_never_overwrites_occupied_cells() {
        let mut field = RainField::new(11);
        for _ in 0..40 {
            field.advance(24, wide_bands());
        }

        let mut buf = Buffer::new(80, 24);
        // Pre-claim a stripe across every spawn column.
        for x in 0..80 {
            buf.set(x, 5, Cell::new('#', Color::Border));
        }
        field.paint(&mut buf);
        for x in 0..80 {
            assert_eq!(buf.get(x, 5).map(|c| c.ch), Some('#'));
        }
    }

    #[test]
    fn paint_stays_inside_the_bands() {
        let mut field = RainField::new(13);
        for _ in 0..60 {
            field.advance(24, wide_bands());
        }

        let mut buf = Buffer::new(80, 24);
        field.paint(&mut buf);
        for y in 0..24 {
            for x in 0..80u16 {
                let cell = buf.get(x, y).copied().unwrap();
                if !cell.is_blank() {
                    assert!(
                        (1..20).contains(&x) || (60..79).contains(&x),
                        "painted outside the bands at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut field = RainField::new(0);
        for _ in 0..32 {
            field.advance(100, wide_bands());
        }
        // A stuck all-zero xorshift state would never spawn.
        assert!(!field.drops().is_empty());
    }
}
