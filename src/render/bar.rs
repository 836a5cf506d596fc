//! Value → glyph run, with optional sub-character precision.
//!
//! ### Layout
//! * `Solid` sets scale over `budget - 1` cells and always end in the tip
//!   glyph, so any bar (zero included) is at least one cell and a full bar is
//!   exactly `budget` cells.
//! * `Partial` sets scale over all `budget` cells; the leftover fraction picks
//!   one glyph from the table when it is larger than the table's resolution.
//!
//! Logarithmic scaling only moves the whole-cell part. The partial glyph is
//! always chosen from the linear remainder.

use crate::render::glyph::GlyphSet;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Scale {
    #[default]
    Linear,
    Logarithmic,
}

impl Scale {
    #[inline]
    fn apply(self, v: f64) -> f64 {
        match self {
            Self::Linear => v,
            Self::Logarithmic if v > 0.0 => v.ln(),
            Self::Logarithmic => 0.0,
        }
    }

    /// `scale(value) / scale(max)` in `[0, 1]`; zero when undefined.
    ///
    /// A value at or above a positive `max` is always a full bar, even when
    /// `ln(max)` is zero.
    #[must_use]
    pub fn fraction(self, value: f64, max: f64) -> f64 {
        if !value.is_finite() || !max.is_finite() || max <= 0.0 {
            return 0.0;
        }
        if value >= max {
            return 1.0;
        }
        let denom = self.apply(max);
        if denom <= 0.0 {
            return 0.0;
        }
        (self.apply(value) / denom).clamp(0.0, 1.0)
    }
}

/// A rendered bar and how many cells it visually covers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bar {
    pub text: String,
    pub cells: f64,
}

pub struct BarRenderer<'g> {
    glyphs: &'g GlyphSet,
    scale: Scale,
}

impl<'g> BarRenderer<'g> {
    #[inline]
    #[must_use]
    pub fn new(glyphs: &'g GlyphSet, scale: Scale) -> Self {
        Self { glyphs, scale }
    }

    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn render(&self, value: f64, max: f64, budget: usize) -> Bar {
        if budget == 0 {
            return Bar::default();
        }
        let span = match self.glyphs {
            GlyphSet::Solid { .. } => budget - 1,
            GlyphSet::Partial { .. } => budget,
        };
        let span_f = span as f64;

        let whole = ((self.scale.fraction(value, max) * span_f).floor() as usize).min(span);
        let linear = Scale::Linear.fraction(value, max) * span_f;
        let remainder = linear - linear.floor();

        let mut text = self.glyphs.full().repeat(whole);
        let mut cells = whole as f64;

        match self.glyphs {
            GlyphSet::Solid { tip, .. } => {
                text.push_str(tip);
                cells += 1.0;
            }
            GlyphSet::Partial { table } => {
                let res = self.glyphs.resolution();
                if whole < span && remainder > res {
                    let idx = ((remainder * table.len() as f64) as usize).min(table.len() - 1);
                    text.push_str(table[idx]);
                    cells += (idx + 1) as f64 * res;
                }
            }
        }
        Bar { text, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid() -> GlyphSet {
        GlyphSet::from_spec("-o").unwrap()
    }

    fn blocks() -> GlyphSet {
        GlyphSet::from_spec("pb").unwrap()
    }

    #[test]
    fn solid_saturates_exactly() {
        let g = solid();
        let r = BarRenderer::new(&g, Scale::Linear);
        for budget in 1..40 {
            let bar = r.render(7.0, 7.0, budget);
            assert!((bar.cells - budget as f64).abs() < f64::EPSILON);
            assert_eq!(bar.text.chars().count(), budget);
        }
    }

    #[test]
    fn solid_zero_still_shows_tip() {
        let g = solid();
        let bar = BarRenderer::new(&g, Scale::Linear).render(0.0, 10.0, 20);
        assert_eq!(bar.text, "o");
    }

    #[test]
    fn solid_half() {
        let g = solid();
        let bar = BarRenderer::new(&g, Scale::Linear).render(5.0, 10.0, 11);
        assert_eq!(bar.text, "-----o");
    }

    #[test]
    fn partial_picks_remainder_glyph() {
        let g = blocks();
        let r = BarRenderer::new(&g, Scale::Linear);
        // 0.5 * 3 = 1.5 cells -> one block, remainder 0.5 -> index 4
        let bar = r.render(1.0, 2.0, 3);
        assert_eq!(bar.text, "█▋");
        // remainder at or under one eighth is dropped
        let bar = r.render(1.0, 10.0, 1);
        assert_eq!(bar.text, "");
    }

    #[test]
    fn partial_saturates() {
        let g = blocks();
        let bar = BarRenderer::new(&g, Scale::Linear).render(3.0, 3.0, 12);
        assert_eq!(bar.text, "█".repeat(12));
        assert!((bar.cells - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn monotonic_in_value() {
        for g in [solid(), blocks(), GlyphSet::from_spec("pl").unwrap()] {
            let r = BarRenderer::new(&g, Scale::Linear);
            let mut prev = 0.0;
            for v in 0..=500 {
                let bar = r.render(f64::from(v), 500.0, 37);
                assert!(bar.cells >= prev, "shrank at {v}");
                assert!(bar.cells <= 37.0);
                prev = bar.cells;
            }
        }
    }

    #[test]
    fn zero_max_never_divides() {
        let g = blocks();
        let bar = BarRenderer::new(&g, Scale::Logarithmic).render(0.0, 0.0, 10);
        assert_eq!(bar.text, "");
        let g = solid();
        let bar = BarRenderer::new(&g, Scale::Linear).render(5.0, 0.0, 10);
        assert_eq!(bar.text, "o");
    }

    #[test]
    fn logarithmic_whole_cells() {
        let g = solid();
        let r = BarRenderer::new(&g, Scale::Logarithmic);
        // ln(10) / ln(1000) = 1/3 of a 10-cell span
        assert_eq!(r.render(10.0, 1000.0, 11).text, "---o");
        assert_eq!(r.render(1.0, 1000.0, 11).text, "o");
        assert_eq!(r.render(1000.0, 1000.0, 11).text, "----------o");
    }

    #[test]
    fn logarithmic_saturates_at_max_of_one() {
        let g = GlyphSet::default();
        let r = BarRenderer::new(&g, Scale::Logarithmic);
        for budget in 1..12 {
            assert_eq!(r.render(1.0, 1.0, budget).text, "-".repeat(budget));
        }
        let g = blocks();
        let bar = BarRenderer::new(&g, Scale::Logarithmic).render(1.0, 1.0, 6);
        assert_eq!(bar.text, "█".repeat(6));
    }

    #[test]
    fn logarithmic_partial_glyph_uses_linear_remainder() {
        let g = blocks();
        // ln(50) / ln(1000) * 10 = 5.66 whole cells, but 50 / 1000 * 10 = 0.5
        // picks the half-cell glyph
        let bar = BarRenderer::new(&g, Scale::Logarithmic).render(50.0, 1000.0, 10);
        assert_eq!(bar.text, "█████▋");
        let bar = BarRenderer::new(&g, Scale::Linear).render(50.0, 1000.0, 10);
        assert_eq!(bar.text, "▋");
    }

    #[test]
    fn negative_values_clamp_to_empty() {
        let g = blocks();
        let bar = BarRenderer::new(&g, Scale::Linear).render(-3.0, 5.0, 10);
        assert_eq!(bar, Bar::default());
    }
}
